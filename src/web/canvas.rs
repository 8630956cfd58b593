//! Drawing surface backed by a browser canvas.

use std::f64::consts::TAU;

use glam::Vec2;
use glamour::Size2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::{
    color::Color,
    surface::{GradientStop, Surface},
};

/// Log a failed canvas call, drawing continues with the next call.
fn check(result: Result<(), JsValue>, call: &str) {
    if let Err(err) = result {
        log::warn!("Canvas call '{call}' failed: {err:?}");
    }
}

/// 2D rendering context of a canvas element.
pub(crate) struct CanvasSurface {
    /// Context all calls are forwarded to.
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a context.
    pub(crate) const fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    /// Set the fill color.
    fn fill_color(&self, color: Color) {
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    /// Set the stroke color and width.
    fn stroke_color(&self, width: f32, color: Color) {
        self.context.set_line_width(f64::from(width));
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        check(
            self.context
                .translate(f64::from(offset.x), f64::from(offset.y)),
            "translate",
        );
    }

    fn rotate(&mut self, angle: f32) {
        check(self.context.rotate(f64::from(angle)), "rotate");
    }

    fn scale(&mut self, factor: Vec2) {
        check(
            self.context.scale(f64::from(factor.x), f64::from(factor.y)),
            "scale",
        );
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.context.set_global_alpha(f64::from(alpha));
    }

    fn clear_rect(&mut self, origin: Vec2, size: Size2) {
        self.context.clear_rect(
            f64::from(origin.x),
            f64::from(origin.y),
            f64::from(size.width),
            f64::from(size.height),
        );
    }

    fn fill_rect(&mut self, origin: Vec2, size: Size2, color: Color) {
        self.fill_color(color);
        self.context.fill_rect(
            f64::from(origin.x),
            f64::from(origin.y),
            f64::from(size.width),
            f64::from(size.height),
        );
    }

    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Size2, stops: &[GradientStop]) {
        let x = f64::from(origin.x);
        let y = f64::from(origin.y);
        let gradient = self
            .context
            .create_linear_gradient(x, y, x, y + f64::from(size.height));

        for stop in stops {
            check(
                gradient.add_color_stop(stop.offset, &stop.color.to_css()),
                "add_color_stop",
            );
        }

        self.context.set_fill_style(&gradient);
        self.context
            .fill_rect(x, y, f64::from(size.width), f64::from(size.height));
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32, color: Color) {
        self.fill_color(color);
        self.context.begin_path();
        check(
            self.context.ellipse(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radii.x.abs()),
                f64::from(radii.y.abs()),
                f64::from(rotation),
                0.0,
                TAU,
            ),
            "ellipse",
        );
        self.context.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.fill_color(color);
        self.context.begin_path();
        self.context
            .move_to(f64::from(first.x), f64::from(first.y));
        for point in rest {
            self.context
                .line_to(f64::from(point.x), f64::from(point.y));
        }
        self.context.close_path();
        self.context.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.stroke_color(width, color);
        self.context.begin_path();
        self.context.move_to(f64::from(from.x), f64::from(from.y));
        self.context.line_to(f64::from(to.x), f64::from(to.y));
        self.context.stroke();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color, dash: &[f32]) {
        let pattern = dash
            .iter()
            .map(|length| JsValue::from_f64(f64::from(*length)))
            .collect::<js_sys::Array>();

        self.stroke_color(width, color);
        check(self.context.set_line_dash(&pattern), "set_line_dash");
        self.context.begin_path();
        check(
            self.context.arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                TAU,
            ),
            "arc",
        );
        self.context.stroke();

        // Solid lines for everything drawn afterwards
        check(
            self.context.set_line_dash(&js_sys::Array::new()),
            "set_line_dash",
        );
    }
}

//! Browser front-end, mounting every scene on its own canvas element.
//!
//! Scenes are mounted in isolation: a scene failing to mount is logged and the others are still mounted.

mod canvas;

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use glam::Vec2;
use gloo::{
    events::{EventListener, EventListenerOptions, EventListenerPhase},
    render::{request_animation_frame, AnimationFrame},
    timers::callback::Timeout,
};
use smallvec::SmallVec;
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent,
    Window,
};

use self::canvas::CanvasSurface;
use crate::{
    config::{is_constrained_user_agent, Config},
    error::Error,
    frame_loop::{FrameLoop, FrameOutcome},
    input::{PointerEvent, PointerPhase},
    scene::{Habitat, Scene, SceneKind},
    viewport::{Container, Viewport},
};

/// Mouse events and how they map to a pointer.
const MOUSE_EVENTS: [(&str, PointerPhase); 4] = [
    ("mousedown", PointerPhase::Start),
    ("mousemove", PointerPhase::Move),
    ("mouseup", PointerPhase::End),
    ("mouseleave", PointerPhase::End),
];

/// Touch events and how they map to a pointer.
const TOUCH_EVENTS: [(&str, PointerPhase); 4] = [
    ("touchstart", PointerPhase::Start),
    ("touchmove", PointerPhase::Move),
    ("touchend", PointerPhase::End),
    ("touchcancel", PointerPhase::Cancel),
];

thread_local! {
    static APP: RefCell<App> = const { RefCell::new(App::new()) };
}

/// Browser resources that must stay alive while the scenes run.
struct App {
    /// Waits for the document to be parsed.
    ready: Option<EventListener>,
    /// Delay before the scenes are mounted.
    startup: Option<Timeout>,
    /// Every mounted scene.
    mounts: Vec<Rc<Mount>>,
}

impl App {
    const fn new() -> Self {
        Self {
            ready: None,
            startup: None,
            mounts: Vec::new(),
        }
    }
}

/// Entry point called when the WASM module is loaded.
///
/// # Errors
///
/// - When the logger can't be set up or the page has no document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Show logs
    console_log::init_with_level(log::Level::Debug)
        .map_err(|err| JsValue::from_str(&format!("Error setting up logger: {err}")))?;

    // Show panics in the browser console log
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Error finding web window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Error finding web document"))?;

    // Phones and tablets get fewer frames and fewer entities
    let constrained = window
        .navigator()
        .user_agent()
        .is_ok_and(|user_agent| is_constrained_user_agent(&user_agent));
    let config = Config::default().for_device(constrained);
    log::debug!(
        "Running on a {} device at {} frames per second",
        if constrained { "constrained" } else { "regular" },
        config.target_fps
    );

    if document.ready_state() == "loading" {
        let ready = EventListener::once(&document, "DOMContentLoaded", move |_event| {
            schedule_mount(config);
        });
        APP.with_borrow_mut(|app| app.ready = Some(ready));
    } else {
        schedule_mount(config);
    }

    Ok(())
}

/// Stop every running scene.
///
/// Scenes that haven't been mounted yet won't be mounted anymore.
#[wasm_bindgen(js_name = stopScenes)]
pub fn stop_scenes() {
    let mounts = APP.with_borrow_mut(|app| {
        app.ready = None;
        app.startup = None;

        std::mem::take(&mut app.mounts)
    });

    for mount in &mounts {
        mount.stop();
    }

    log::debug!("Stopped {} scenes", mounts.len());
}

/// Mount the scenes after the startup delay.
fn schedule_mount(config: Config) {
    let startup = Timeout::new(config.startup_delay_ms, move || mount_all(&config));

    APP.with_borrow_mut(|app| app.startup = Some(startup));
}

/// Mount every built-in scene.
fn mount_all(config: &Config) {
    for kind in SceneKind::ALL {
        match Mount::mount(kind, config) {
            Ok(mount) => {
                APP.with_borrow_mut(|app| app.mounts.push(mount));

                log::info!("Mounted {kind} on '{}'", kind.canvas_id());
            }
            Err(Error::SurfaceNotFound { id }) => {
                log::warn!("Skipping {kind}, the page has no canvas '{id}'");
            }
            Err(err) => log::error!("Error mounting {kind}: {err}"),
        }
    }
}

/// Convert a thrown exception.
fn js_error(err: JsValue) -> Error {
    Error::Js(format!("{err:?}"))
}

/// Register an event listener that can cancel the default browser behavior.
///
/// The listener is removed when the returned value is dropped.
fn listen(
    target: &EventTarget,
    name: &'static str,
    handler: impl FnMut(&Event) + 'static,
) -> EventListener {
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };

    EventListener::new_with_options(target, name, options, handler)
}

/// Scene mounted on a canvas element.
///
/// Callbacks only hold a weak reference, dropping the last [`Rc`] releases the scene and cancels everything it registered.
struct Mount {
    /// Element drawn on.
    canvas: HtmlCanvasElement,
    /// Drawing context of the element.
    surface: RefCell<CanvasSurface>,
    /// Logical and displayed size of the element.
    viewport: RefCell<Viewport>,
    /// Loop driving the scene.
    frame_loop: RefCell<FrameLoop<Habitat>>,
    /// Quiet time after the last resize event before refitting.
    resize_delay_ms: u32,
    /// Pending refit, replaced by every resize event.
    resize_timer: RefCell<Option<Timeout>>,
    /// Next scheduled frame.
    frame: RefCell<Option<AnimationFrame>>,
    /// Resize and pointer listeners.
    listeners: RefCell<Vec<EventListener>>,
}

impl Mount {
    /// Build a scene and attach it to its canvas.
    ///
    /// # Errors
    ///
    /// - When the page has no canvas with the id of the scene.
    /// - When the canvas has no 2D context.
    /// - When the canvas style can't be changed.
    fn mount(kind: SceneKind, config: &Config) -> Result<Rc<Self>, Error> {
        let window = web_sys::window().ok_or_else(|| Error::Js("no web window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Js("no web document".to_owned()))?;

        let id = kind.canvas_id();
        let canvas = document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| Error::SurfaceNotFound { id: id.to_owned() })?;
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| Error::Context { id: id.to_owned() })?;

        // Drawing always happens at the logical size, CSS scales it
        let logical = config.logical_size();
        canvas.set_width(logical.width as u32);
        canvas.set_height(logical.height as u32);
        canvas
            .style()
            .set_property("touch-action", "none")
            .map_err(js_error)?;

        let mount = Rc::new(Self {
            canvas,
            surface: RefCell::new(CanvasSurface::new(context)),
            viewport: RefCell::new(Viewport::new(logical, config.viewport.clone())),
            frame_loop: RefCell::new(FrameLoop::new(kind.build(config), config.target_fps)),
            resize_delay_ms: config.resize_debounce_ms,
            resize_timer: RefCell::new(None),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        mount.fit();
        mount.listen_resize(&window);
        mount.listen_pointer();
        mount.request_frame();

        Ok(mount)
    }

    /// Stop the frame loop and unregister every browser callback.
    fn stop(&self) {
        self.frame_loop.borrow().stop();

        // Dropping the handles cancels them
        self.frame.borrow_mut().take();
        self.resize_timer.borrow_mut().take();
        self.listeners.borrow_mut().clear();
    }

    /// Recalculate the displayed size of the canvas.
    fn fit(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let window_width = window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default() as f32;
        let window_height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default() as f32;
        let container = Container {
            width: self
                .canvas
                .parent_element()
                .map_or(window_width, |parent| parent.client_width() as f32),
            window_width,
            window_height,
        };

        let displayed = self.viewport.borrow_mut().fit(container);

        let style = self.canvas.style();
        for (property, value) in [("width", displayed.width), ("height", displayed.height)] {
            if let Err(err) = style.set_property(property, &format!("{value}px")) {
                log::warn!("Error setting canvas {property}: {err:?}");
            }
        }
    }

    /// Refit the canvas once resize events stop arriving.
    fn listen_resize(self: &Rc<Self>, window: &Window) {
        let listeners = ["resize", "orientationchange"].map(|name| {
            let mount = Rc::downgrade(self);
            listen(window, name, move |_event| {
                if let Some(mount) = mount.upgrade() {
                    mount.schedule_fit();
                }
            })
        });

        self.listeners.borrow_mut().extend(listeners);
    }

    /// Start a timer for the latest resize event.
    fn schedule_fit(self: &Rc<Self>) {
        let mount = Rc::downgrade(self);
        let timer = Timeout::new(self.resize_delay_ms, move || {
            if let Some(mount) = mount.upgrade() {
                mount.resize_timer.borrow_mut().take();
                mount.fit();
            }
        });

        // Replacing the pending timer cancels it, only the last event in a burst refits
        *self.resize_timer.borrow_mut() = Some(timer);
    }

    /// Forward mouse and touch events to the scene.
    fn listen_pointer(self: &Rc<Self>) {
        let mut listeners = Vec::with_capacity(MOUSE_EVENTS.len() + TOUCH_EVENTS.len());

        for (name, phase) in MOUSE_EVENTS {
            let mount = Rc::downgrade(self);
            listeners.push(listen(&self.canvas, name, move |event| {
                let (Some(event), Some(mount)) = (event.dyn_ref::<MouseEvent>(), mount.upgrade())
                else {
                    return;
                };
                event.prevent_default();

                let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                mount.pointer(PointerEvent::from_mouse(phase, client));
            }));
        }

        for (name, phase) in TOUCH_EVENTS {
            let mount = Rc::downgrade(self);
            listeners.push(listen(&self.canvas, name, move |event| {
                let (Some(event), Some(mount)) = (event.dyn_ref::<TouchEvent>(), mount.upgrade())
                else {
                    return;
                };
                // Don't scroll the page
                event.prevent_default();

                let list = event.touches();
                let touches = (0..list.length())
                    .filter_map(|index| list.item(index))
                    .map(|touch| Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
                    .collect::<SmallVec<[Vec2; 4]>>();

                if let Some(pointer) = PointerEvent::from_touches(phase, &touches) {
                    mount.pointer(pointer);
                }
            }));
        }

        self.listeners.borrow_mut().extend(listeners);
    }

    /// Convert a pointer event to logical coordinates and pass it to the scene.
    fn pointer(&self, event: PointerEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        let top_left = Vec2::new(rect.left() as f32, rect.top() as f32);

        let event = event.to_logical(&self.viewport.borrow(), top_left);
        self.frame_loop.borrow_mut().scene_mut().handle_pointer(event);
    }

    /// Schedule the next frame with `requestAnimationFrame`.
    fn request_frame(self: &Rc<Self>) {
        let mount: Weak<Self> = Rc::downgrade(self);
        let frame = request_animation_frame(move |now_ms| {
            if let Some(mount) = mount.upgrade() {
                mount.animate(now_ms);
            }
        });

        *self.frame.borrow_mut() = Some(frame);
    }

    /// Drive the frame loop for a single browser refresh.
    fn animate(self: &Rc<Self>, now_ms: f64) {
        self.frame.borrow_mut().take();

        let outcome = {
            let mut surface = self.surface.borrow_mut();

            self.frame_loop.borrow_mut().tick(now_ms, &mut *surface)
        };
        if outcome == FrameOutcome::Stopped {
            log::debug!("Frame loop stopped");
            return;
        }

        self.request_frame();
    }
}

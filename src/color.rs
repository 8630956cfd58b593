//! Colors as packed ARGB values.

/// Color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Fully opaque white.
    pub const WHITE: Self = Self(0xFFFFFFFF);
    /// Fully opaque black.
    pub const BLACK: Self = Self(0xFF000000);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0x00000000);

    /// Opaque color from a `0xRRGGBB` hex value.
    #[inline]
    #[must_use]
    pub const fn rgb(hex: u32) -> Self {
        Self(0xFF000000 | (hex & 0x00FFFFFF))
    }

    /// Opaque color from hue, saturation and lightness.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue in degrees, wraps around at `360.0`.
    /// * `saturation` - Saturation between `0.0` and `1.0`.
    /// * `lightness` - Lightness between `0.0` and `1.0`.
    #[must_use]
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - 2.0f32.mul_add(lightness, -1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let second = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, second, 0.0),
            1 => (second, chroma, 0.0),
            2 => (0.0, chroma, second),
            3 => (0.0, second, chroma),
            4 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };
        let offset = lightness - chroma / 2.0;

        let channel = |value: f32| ((value + offset) * 255.0).round().clamp(0.0, 255.0) as u32;

        Self(0xFF000000 | (channel(r) << 16) | (channel(g) << 8) | channel(b))
    }

    /// Same color with the alpha channel replaced.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Opacity between `0.0` and `1.0`.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u32;

        Self((alpha << 24) | (self.0 & 0x00FFFFFF))
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Color as a CSS `rgba(..)` string.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.red(),
            self.green(),
            self.blue(),
            f32::from(self.alpha()) / 255.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::rgb(0xFF0000));
        assert_eq!(Color::hsl(120.0, 1.0, 0.5), Color::rgb(0x00FF00));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5), Color::rgb(0x0000FF));
        assert_eq!(Color::hsl(360.0, 1.0, 0.5), Color::rgb(0xFF0000));
        assert_eq!(Color::hsl(0.0, 0.0, 1.0), Color::WHITE);
    }

    #[test]
    fn hsl_fish_color() {
        // hsl(200, 70%, 50%)
        assert_eq!(Color::hsl(200.0, 0.7, 0.5), Color::rgb(0x269DD9));
    }

    #[test]
    fn css_string() {
        assert_eq!(Color::rgb(0x006994).to_css(), "rgba(0, 105, 148, 1.000)");
        assert_eq!(
            Color::WHITE.with_alpha(0.8).to_css(),
            "rgba(255, 255, 255, 0.800)"
        );
    }
}

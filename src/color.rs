//! Color values and the black-or-white contrast rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A color in the `sRGB` color space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red component, 0.0 - 1.0
    pub r: f32,
    /// Green component, 0.0 - 1.0
    pub g: f32,
    /// Blue component, 0.0 - 1.0
    pub b: f32,
    /// Transparency, 0.0 - 1.0
    pub a: f32,
}

impl Color {
    /// The black color.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// The white color.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// A color with no opacity.
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Creates a new [`Color`] from its RGB components.
    #[must_use]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// Creates a new [`Color`] from its RGBA components.
    #[must_use]
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a new [`Color`] from 8-bit RGB components.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgb(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
    }

    /// Scales the alpha channel of the [`Color`] by the given factor.
    #[must_use]
    pub fn scale_alpha(self, factor: f32) -> Color {
        Color {
            a: self.a * factor,
            ..self
        }
    }

    /// Computes the relative luminance of the [`Color`], per the WCAG 2.x
    /// definition over linearized sRGB components.
    ///
    /// Returns a value in `0.0..=1.0`, where `0.0` is black and `1.0` is white.
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        fn srgb_to_linear(x: f32) -> f32 {
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * srgb_to_linear(self.r)
            + 0.7152 * srgb_to_linear(self.g)
            + 0.0722 * srgb_to_linear(self.b)
    }

    /// Returns the [`Backdrop`] that maximizes legibility of content drawn in
    /// this [`Color`].
    #[must_use]
    pub fn contrasting_backdrop(self) -> Backdrop {
        Backdrop::for_tint(self)
    }
}

/// A solid background shade behind tinted content.
///
/// Only two shades exist; the point is legibility, not decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Backdrop {
    /// A black backdrop, for light tints.
    Dark,
    /// A white backdrop, for dark tints.
    Light,
}

impl Backdrop {
    /// Picks the [`Backdrop`] with the higher WCAG contrast ratio against the
    /// given tint.
    ///
    /// Comparing the two ratios is equivalent to a relative-luminance
    /// threshold of `sqrt(1.05 * 0.05) - 0.05` (about `0.179`): tints darker
    /// than that get a white backdrop, lighter ones get black. Ties go to
    /// black, which keeps pure mid-gray on a dark backdrop.
    #[must_use]
    pub fn for_tint(tint: Color) -> Backdrop {
        let luminance = tint.relative_luminance();

        let against_black = (luminance + 0.05) / 0.05;
        let against_white = 1.05 / (luminance + 0.05);

        if against_black >= against_white {
            Backdrop::Dark
        } else {
            Backdrop::Light
        }
    }

    /// Returns the solid [`Color`] of the [`Backdrop`].
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Backdrop::Dark => Color::BLACK,
            Backdrop::Light => Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert!(Color::BLACK.relative_luminance() < 1e-6);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn white_tint_gets_dark_backdrop() {
        assert_eq!(Backdrop::for_tint(Color::WHITE), Backdrop::Dark);
    }

    #[test]
    fn black_tint_gets_light_backdrop() {
        assert_eq!(Backdrop::for_tint(Color::BLACK), Backdrop::Light);
    }

    #[test]
    fn mid_grays_split_at_threshold() {
        // 50% gray has relative luminance ~0.214, above the ~0.179 threshold.
        let mid = Color::from_rgb(0.5, 0.5, 0.5);
        assert_eq!(Backdrop::for_tint(mid), Backdrop::Dark);

        // A darker gray falls below it.
        let dark = Color::from_rgb(0.3, 0.3, 0.3);
        assert_eq!(Backdrop::for_tint(dark), Backdrop::Light);
    }

    #[test]
    fn saturated_tints() {
        // Yellow is bright; blue is dim.
        assert_eq!(
            Backdrop::for_tint(Color::from_rgb(1.0, 1.0, 0.0)),
            Backdrop::Dark
        );
        assert_eq!(
            Backdrop::for_tint(Color::from_rgb(0.0, 0.0, 1.0)),
            Backdrop::Light
        );
    }

    #[test]
    fn backdrop_colors() {
        assert_eq!(Backdrop::Dark.color(), Color::BLACK);
        assert_eq!(Backdrop::Light.color(), Color::WHITE);
    }

    #[test]
    fn from_rgb8_round_trip() {
        let color = Color::from_rgb8(255, 0, 127);
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!(color.g.abs() < 1e-6);
        assert!((color.b - 127.0 / 255.0).abs() < 1e-6);
    }
}

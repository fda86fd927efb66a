//! Color value types.
//!
//! [`LinearColor`] and [`PerceptualColor`] are plain `Copy` values. Every
//! conversion between them, or to the 8-bit [`DisplayColor`], is a named
//! method; there are no `From` impls between color types, so a conversion
//! never happens without being spelled out at the call site.

use crate::convert;
use crate::quantize::{self, QuantizeError};
use crate::DisplayColor;
use palette::Srgba;

/// A color in linear (gamma-free) RGB.
///
/// Channels are nominally in `0.0..=1.0` but are never clamped; out-of-gamut
/// values produced by conversion are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinearColor {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl LinearColor {
    /// Linear black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Linear white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a linear color from normalized channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a linear color from 8-bit channels, each mapped to `byte / 255`.
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            quantize::from_byte_channel(r),
            quantize::from_byte_channel(g),
            quantize::from_byte_channel(b),
        )
    }

    /// Returns true if every channel lies within `0.0..=1.0`.
    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Converts to Oklab.
    #[inline]
    pub fn to_perceptual(self) -> PerceptualColor {
        convert::to_perceptual(self)
    }

    /// Quantizes to an 8-bit display color.
    ///
    /// Out-of-range channels saturate; see [`quantize::to_byte_channel`].
    #[inline]
    pub fn to_display(self) -> DisplayColor {
        quantize::to_display_color(self)
    }

    /// Quantizes to an opaque 8-bit display color (alpha 255).
    #[inline]
    pub fn to_display_rgba(self) -> Srgba<u8> {
        quantize::to_display_color_alpha(self, u8::MAX)
    }

    /// Quantizes to an 8-bit display color carrying the given `alpha`.
    #[inline]
    pub fn to_display_alpha(self, alpha: u8) -> Srgba<u8> {
        quantize::to_display_color_alpha(self, alpha)
    }

    /// Quantizes to an 8-bit display color, rejecting out-of-range channels.
    ///
    /// # Errors
    /// * `QuantizeError::OutOfRange` - A channel is outside `0.0..=1.0` or not finite
    #[inline]
    pub fn try_to_display(self) -> Result<DisplayColor, QuantizeError> {
        quantize::try_to_display_color(self)
    }

    /// Dequantizes an 8-bit display color.
    #[inline]
    pub fn from_display(color: DisplayColor) -> Self {
        quantize::from_display_color(color)
    }

    /// Dequantizes an 8-bit display color, dropping alpha.
    #[inline]
    pub fn from_display_alpha(color: Srgba<u8>) -> Self {
        quantize::from_display_color(color.color)
    }
}

/// A color in Oklab perceptual space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, ~1.0 = white for in-gamut colors)
/// - `a`: Green-red axis
/// - `b`: Blue-yellow axis
///
/// No range is enforced. Values outside the displayable region convert to
/// linear colors outside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PerceptualColor {
    /// Lightness.
    pub l: f64,
    /// Green-red axis.
    pub a: f64,
    /// Blue-yellow axis.
    pub b: f64,
}

impl PerceptualColor {
    /// Creates an Oklab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates an Oklab color from lightness, chroma and hue angle (radians).
    ///
    /// The hue is measured from the `+b` axis toward `+a`, so
    /// `a = chroma * sin(hue)` and `b = chroma * cos(hue)`. Zero chroma gives
    /// `a = b = 0` whatever the hue.
    #[inline]
    pub fn from_polar(l: f64, chroma: f64, hue: f64) -> Self {
        if chroma == 0.0 {
            return Self::new(l, 0.0, 0.0);
        }
        Self::new(l, chroma * libm::sin(hue), chroma * libm::cos(hue))
    }

    /// Magnitude of the `(a, b)` vector.
    #[inline]
    pub fn chroma(&self) -> f64 {
        libm::hypot(self.a, self.b)
    }

    /// Hue angle in radians, in the same convention as [`Self::from_polar`].
    ///
    /// Returns a value in `-π..=π`. Meaningless for achromatic colors.
    #[inline]
    pub fn hue(&self) -> f64 {
        libm::atan2(self.a, self.b)
    }

    /// Converts to linear RGB.
    #[inline]
    pub fn to_linear(self) -> LinearColor {
        convert::to_linear(self)
    }

    /// Converts to an 8-bit display color via linear RGB.
    #[inline]
    pub fn to_display(self) -> DisplayColor {
        self.to_linear().to_display()
    }

    /// Converts an 8-bit display color to Oklab via linear RGB.
    #[inline]
    pub fn from_display(color: DisplayColor) -> Self {
        LinearColor::from_display(color).to_perceptual()
    }
}

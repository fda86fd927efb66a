//! Core types for palette generation.

use crate::colors::PerceptualColor;

/// Parameters that fully determine a generated palette.
///
/// Samples lie on a single ray in the `(a, b)` plane: fixed lightness, fixed
/// hue, chroma growing linearly from zero toward `max_chroma`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteParams {
    /// Number of samples.
    pub count: usize,

    /// Oklab lightness shared by every sample.
    pub luminance: f64,

    /// Chroma bound. The arc is half-open, so no sample reaches it.
    pub max_chroma: f64,

    /// Hue angle in radians, measured from `+b` toward `+a`.
    pub hue_angle: f64,
}

impl PaletteParams {
    /// Creates a parameter set.
    #[inline]
    pub const fn new(count: usize, luminance: f64, max_chroma: f64, hue_angle: f64) -> Self {
        Self {
            count,
            luminance,
            max_chroma,
            hue_angle,
        }
    }

    /// Chroma of the sample at `index`: `max_chroma * index / count`.
    ///
    /// Index 0 and an empty palette (`count == 0`) give exactly `0.0`, even
    /// for a non-finite `max_chroma`. Indices at or past `count` continue the
    /// same line beyond `max_chroma`.
    #[inline]
    pub fn chroma_at(&self, index: usize) -> f64 {
        if index == 0 || self.count == 0 {
            return 0.0;
        }
        self.max_chroma * (index as f64 / self.count as f64)
    }

    /// The sample at `index`: lightness `luminance`, chroma [`Self::chroma_at`],
    /// rotated by `hue_angle`.
    #[inline]
    pub fn sample_at(&self, index: usize) -> PerceptualColor {
        PerceptualColor::from_polar(self.luminance, self.chroma_at(index), self.hue_angle)
    }
}

impl Default for PaletteParams {
    fn default() -> Self {
        PaletteParams::new(0, 0.5, 0.0, 0.0)
    }
}

/// Palette errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteError {
    /// Sample index outside `0..count`.
    IndexOutOfRange { index: usize, count: usize },

    /// Requested sample count exceeds the palette's capacity.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl core::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteError::IndexOutOfRange { index, count } => {
                write!(f, "index {} out of range for palette of {} samples", index, count)
            }
            PaletteError::CapacityExceeded { requested, capacity } => {
                write!(
                    f,
                    "requested {} samples, palette capacity is {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteError {}

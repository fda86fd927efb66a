#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LinearColor`**: Normalized, gamma-free RGB with `f64` channels
//! - **`PerceptualColor`**: Oklab color (`l`, `a`, `b`), perceptually uniform
//! - **`DisplayColor`**: The host's 8-bit RGB color (`palette::Srgb<u8>`)
//! - **`Palette`**: Fixed-capacity set of Oklab samples swept along one chroma ray
//! - **`PaletteParams`**: The four values a palette is generated from
//! - **`PaletteBuilder`**: Builder for palettes
//!
//! Conversions are always explicit method calls (`to_perceptual`, `to_linear`,
//! `to_display`, `from_display`). Linear and Oklab conversions never fail and
//! never clamp. Quantization to 8 bits saturates out-of-range channels, or
//! reports them through `try_to_display`.

// Re-export Srgb from palette for user convenience
pub use palette::{Srgb, Srgba};

pub mod colors;
pub mod convert;
pub mod generator;
pub mod quantize;
pub mod types;

pub use colors::{LinearColor, PerceptualColor};
pub use generator::{Palette, PaletteBuilder};
pub use quantize::QuantizeError;
pub use types::{PaletteError, PaletteParams};

/// The host display color: three 8-bit channels.
pub type DisplayColor = Srgb<u8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_conversions_pivot_through_linear() {
        let display = DisplayColor::new(12, 200, 99);
        let lab = PerceptualColor::from_display(display);
        assert_eq!(lab.to_display(), display);
    }
}

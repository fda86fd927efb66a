//! 8-bit channel quantization.
//!
//! The boundary between normalized [`LinearColor`] channels and the host's
//! [`DisplayColor`]. Channels are scaled by 255 directly; no transfer
//! function is applied.
//!
//! Out-of-range policy: [`to_byte_channel`] clamps to `0.0..=1.0` before
//! scaling and rounds to nearest, with NaN mapping to 0. Callers that would
//! rather fail use [`try_to_byte_channel`].

use crate::colors::LinearColor;
use crate::DisplayColor;
use palette::Srgba;

/// Channel quantization errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QuantizeError {
    /// Channel value outside `0.0..=1.0`, or not finite.
    OutOfRange(f64),
}

impl core::fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuantizeError::OutOfRange(value) => {
                write!(f, "channel value {} is outside 0.0..=1.0", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuantizeError {}

/// Quantizes a normalized channel to 8 bits, saturating out-of-range input.
#[inline]
pub fn to_byte_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::round(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Quantizes a normalized channel to 8 bits.
///
/// # Errors
/// * `QuantizeError::OutOfRange` - `value` is outside `0.0..=1.0` or NaN
#[inline]
pub fn try_to_byte_channel(value: f64) -> Result<u8, QuantizeError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(QuantizeError::OutOfRange(value));
    }
    Ok(to_byte_channel(value))
}

/// Maps an 8-bit channel back to `0.0..=1.0`.
#[inline]
pub fn from_byte_channel(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

/// Quantizes each channel of a linear color independently.
pub fn to_display_color(color: LinearColor) -> DisplayColor {
    DisplayColor::new(
        to_byte_channel(color.r),
        to_byte_channel(color.g),
        to_byte_channel(color.b),
    )
}

/// Quantizes a linear color and attaches `alpha` unchanged.
pub fn to_display_color_alpha(color: LinearColor, alpha: u8) -> Srgba<u8> {
    let rgb = to_display_color(color);
    Srgba::new(rgb.red, rgb.green, rgb.blue, alpha)
}

/// Quantizes each channel, failing on the first out-of-range one.
///
/// # Errors
/// * `QuantizeError::OutOfRange` - A channel is outside `0.0..=1.0` or NaN
pub fn try_to_display_color(color: LinearColor) -> Result<DisplayColor, QuantizeError> {
    Ok(DisplayColor::new(
        try_to_byte_channel(color.r)?,
        try_to_byte_channel(color.g)?,
        try_to_byte_channel(color.b)?,
    ))
}

/// Dequantizes each channel of a display color independently.
pub fn from_display_color(color: DisplayColor) -> LinearColor {
    LinearColor::new(
        from_byte_channel(color.red),
        from_byte_channel(color.green),
        from_byte_channel(color.blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        assert_eq!(to_byte_channel(0.0), 0);
        assert_eq!(to_byte_channel(1.0), 255);
        assert_eq!(from_byte_channel(0), 0.0);
        assert_eq!(from_byte_channel(255), 1.0);
    }

    #[test]
    fn rounds_to_nearest() {
        // 0.5 * 255 = 127.5
        assert_eq!(to_byte_channel(0.5), 128);
        assert_eq!(to_byte_channel(0.499), 127);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(to_byte_channel(1.5), 255);
        assert_eq!(to_byte_channel(2.0), 255);
        assert_eq!(to_byte_channel(-0.1), 0);
        assert_eq!(to_byte_channel(f64::INFINITY), 255);
        assert_eq!(to_byte_channel(f64::NEG_INFINITY), 0);
        assert_eq!(to_byte_channel(f64::NAN), 0);
    }

    #[test]
    fn checked_quantization_rejects_out_of_range() {
        assert_eq!(try_to_byte_channel(0.2), Ok(51));
        assert_eq!(try_to_byte_channel(1.01), Err(QuantizeError::OutOfRange(1.01)));
        assert_eq!(try_to_byte_channel(-0.5), Err(QuantizeError::OutOfRange(-0.5)));
        assert!(try_to_byte_channel(f64::NAN).is_err());
    }

    #[test]
    fn every_byte_survives_round_trip() {
        for byte in 0..=255u8 {
            assert_eq!(to_byte_channel(from_byte_channel(byte)), byte);
        }
    }
}

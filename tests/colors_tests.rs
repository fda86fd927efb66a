//! Integration tests for color value types and quantization

mod common;
use common::*;

use oklab_palette::quantize::{from_byte_channel, to_byte_channel, try_to_byte_channel};
use oklab_palette::{DisplayColor, LinearColor, PerceptualColor, QuantizeError, Srgba};

#[test]
fn byte_constructor_matches_dequantization() {
    let color = LinearColor::from_bytes(0, 51, 255);
    assert_eq!(color, LinearColor::new(0.0, 0.2, 1.0));
    assert_eq!(color, LinearColor::from_display(DisplayColor::new(0, 51, 255)));
}

#[test]
fn quantization_round_trip_within_one_step() {
    for i in 0..=1000 {
        let v = i as f64 / 1000.0;
        let back = from_byte_channel(to_byte_channel(v));
        assert!((back - v).abs() <= 1.0 / 255.0, "{} came back as {}", v, back);
    }
}

#[test]
fn display_conversion_saturates_out_of_range_channels() {
    let color = LinearColor::new(1.4, -0.3, 0.5);
    assert_eq!(color.to_display(), DisplayColor::new(255, 0, 128));
}

#[test]
fn checked_display_conversion_reports_offending_channel() {
    let color = LinearColor::new(0.5, 1.25, 0.5);
    assert_eq!(color.try_to_display(), Err(QuantizeError::OutOfRange(1.25)));

    let ok = LinearColor::new(0.0, 0.5, 1.0);
    assert_eq!(ok.try_to_display(), Ok(DisplayColor::new(0, 128, 255)));
    assert!(try_to_byte_channel(f64::NAN).is_err());
}

#[test]
fn alpha_is_passed_through_and_dropped() {
    let color = LinearColor::new(1.0, 0.0, 0.0);
    let rgba = color.to_display_alpha(255);
    assert_eq!(rgba, Srgba::new(255u8, 0, 0, 255));

    let opaque = LinearColor::new(0.0, 0.0, 1.0).to_display_rgba();
    assert_eq!(opaque, Srgba::new(0u8, 0, 255, 255));
    assert_eq!(opaque.alpha, 255);

    let translucent = Srgba::new(0u8, 255, 0, 10);
    assert_eq!(
        LinearColor::from_display_alpha(translucent),
        LinearColor::new(0.0, 1.0, 0.0)
    );
}

#[test]
fn every_display_color_survives_perceptual_round_trip() {
    for r in (0..=255u8).step_by(15) {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(15) {
                let display = DisplayColor::new(r, g, b);
                let lab = PerceptualColor::from_display(display);
                assert_eq!(lab.to_display(), display);
            }
        }
    }
}

#[test]
fn gamut_check_covers_each_channel() {
    assert!(LinearColor::BLACK.is_in_gamut());
    assert!(LinearColor::WHITE.is_in_gamut());
    assert!(!LinearColor::new(1.0001, 0.5, 0.5).is_in_gamut());
    assert!(!LinearColor::new(0.5, -0.0001, 0.5).is_in_gamut());
    assert!(!LinearColor::new(0.5, 0.5, f64::NAN).is_in_gamut());
}

#[test]
fn polar_construction_matches_chroma_and_hue() {
    let lab = PerceptualColor::from_polar(0.6, 0.15, 1.2);
    assert!((lab.chroma() - 0.15).abs() < 1e-12);
    assert!(angle_difference(lab.hue(), 1.2).abs() < 1e-12);

    // Zero hue points along +b.
    let along_b = PerceptualColor::from_polar(0.6, 0.1, 0.0);
    assert!(perceptual_equal(along_b, PerceptualColor::new(0.6, 0.0, 0.1)));
}

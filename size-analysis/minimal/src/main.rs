#![no_std]
#![no_main]

use cortex_m_rt::entry;
use oklab_palette::{LinearColor, Palette, PaletteParams, PerceptualColor};
use panic_halt as _;

// ============================================================================
// Library Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_library() {
    // Conversion engine and quantizer only
    let orange = LinearColor::from_bytes(255, 128, 0).to_perceptual();
    core::hint::black_box(orange.to_display());

    let lab = PerceptualColor::new(0.7, 0.1, -0.05);
    core::hint::black_box(lab.to_linear().try_to_display());

    // 8-sample palette
    if let Ok(mut palette) = Palette::<8>::new(8, 0.65, 0.15, 0.8) {
        palette.set_hue_angle(2.1);
        for color in palette.display_colors() {
            core::hint::black_box(color);
        }
        core::hint::black_box(palette);
    }

    // 32-sample palette, batch reconfigured
    let palette32 = Palette::<32>::builder()
        .count(24)
        .luminance(0.5)
        .max_chroma(0.2)
        .build();

    if let Ok(mut palette) = palette32 {
        let _ = palette.reconfigure(PaletteParams::new(32, 0.55, 0.25, 4.0));
        let _ = palette.set(0, lab);
        core::hint::black_box(palette.get(31));
        core::hint::black_box(palette);
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_library();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}

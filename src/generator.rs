use crate::colors::PerceptualColor;
use crate::types::{PaletteError, PaletteParams};
use crate::DisplayColor;
use heapless::Vec;

/// An ordered set of Oklab colors swept along one chroma ray.
///
/// Sample `i` has lightness `luminance`, hue `hue_angle` and chroma
/// `max_chroma * i / count`. Sample 0 is always the neutral gray at that
/// lightness, and the last sample stops one step short of `max_chroma`.
///
/// The samples are a cache derived from [`PaletteParams`]. Every parameter
/// write rebuilds all of them. [`Palette::set`] may overwrite a single
/// sample; the palette then no longer matches its parameters until the next
/// parameter write or [`Palette::regenerate`].
///
/// # Type Parameters
/// * `N` - Maximum number of samples this palette can hold
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<const N: usize> {
    params: PaletteParams,
    samples: Vec<PerceptualColor, N>,
}

impl<const N: usize> Palette<N> {
    /// Generates a palette of `count` samples.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `count` is larger than `N`
    pub fn new(
        count: usize,
        luminance: f64,
        max_chroma: f64,
        hue_angle: f64,
    ) -> Result<Self, PaletteError> {
        Self::from_params(PaletteParams::new(count, luminance, max_chroma, hue_angle))
    }

    /// Generates a palette from a parameter set.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `params.count` is larger than `N`
    pub fn from_params(params: PaletteParams) -> Result<Self, PaletteError> {
        let mut palette = Self {
            params,
            samples: Vec::new(),
        };
        palette.reconfigure(params)?;
        Ok(palette)
    }

    /// Creates a new palette builder.
    pub fn builder() -> PaletteBuilder<N> {
        PaletteBuilder::new()
    }

    /// Returns the generation parameters.
    pub fn params(&self) -> PaletteParams {
        self.params
    }

    /// Returns the number of samples.
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the palette holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Replaces all parameters at once and regenerates a single time.
    ///
    /// Leaves the palette untouched on error.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `params.count` is larger than `N`
    pub fn reconfigure(&mut self, params: PaletteParams) -> Result<(), PaletteError> {
        if params.count > N {
            return Err(PaletteError::CapacityExceeded {
                requested: params.count,
                capacity: N,
            });
        }
        self.params = params;
        self.regenerate();
        Ok(())
    }

    /// Sets the sample count and regenerates.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `count` is larger than `N`
    pub fn set_count(&mut self, count: usize) -> Result<(), PaletteError> {
        self.reconfigure(PaletteParams {
            count,
            ..self.params
        })
    }

    /// Sets the lightness and regenerates.
    pub fn set_luminance(&mut self, luminance: f64) {
        self.params.luminance = luminance;
        self.regenerate();
    }

    /// Sets the chroma bound and regenerates.
    pub fn set_max_chroma(&mut self, max_chroma: f64) {
        self.params.max_chroma = max_chroma;
        self.regenerate();
    }

    /// Sets the hue angle (radians) and regenerates.
    pub fn set_hue_angle(&mut self, hue_angle: f64) {
        self.params.hue_angle = hue_angle;
        self.regenerate();
    }

    /// Rebuilds every sample from the current parameters, discarding any
    /// edits made through [`Palette::set`].
    pub fn regenerate(&mut self) {
        let params = self.params;
        self.samples.clear();
        // Every stored parameter set has `count <= N`, so this cannot overflow.
        self.samples.extend((0..params.count).map(|index| params.sample_at(index)));
    }

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below [`Palette::count`]
    pub fn get(&self, index: usize) -> Result<PerceptualColor, PaletteError> {
        self.samples
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                count: self.samples.len(),
            })
    }

    /// Overwrites the sample at `index` without touching the others or the
    /// parameters.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index` is not below [`Palette::count`]
    pub fn set(&mut self, index: usize, color: PerceptualColor) -> Result<(), PaletteError> {
        let count = self.samples.len();
        let slot = self
            .samples
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, count })?;
        *slot = color;
        Ok(())
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[PerceptualColor] {
        &self.samples
    }

    /// Returns an owned copy of the samples, independent of later regeneration.
    pub fn snapshot(&self) -> Vec<PerceptualColor, N> {
        self.samples.clone()
    }

    /// Iterates the samples in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, PerceptualColor> {
        self.samples.iter()
    }

    /// Iterates the samples converted to 8-bit display colors.
    pub fn display_colors(&self) -> impl Iterator<Item = DisplayColor> + '_ {
        self.samples.iter().map(|sample| sample.to_display())
    }
}

impl<const N: usize> core::ops::Index<usize> for Palette<N> {
    type Output = PerceptualColor;

    /// # Panics
    /// Panics if `index` is out of range; use [`Palette::get`] to handle that case.
    fn index(&self, index: usize) -> &PerceptualColor {
        &self.samples[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a Palette<N> {
    type Item = &'a PerceptualColor;
    type IntoIter = core::slice::Iter<'a, PerceptualColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for palettes.
///
/// Defaults: no samples, lightness 0.5, zero chroma, hue 0.
#[derive(Debug)]
pub struct PaletteBuilder<const N: usize> {
    params: PaletteParams,
}

impl<const N: usize> PaletteBuilder<N> {
    /// Creates a builder with default parameters.
    pub fn new() -> Self {
        Self {
            params: PaletteParams::default(),
        }
    }

    /// Sets the sample count.
    pub fn count(mut self, count: usize) -> Self {
        self.params.count = count;
        self
    }

    /// Sets the shared lightness.
    pub fn luminance(mut self, luminance: f64) -> Self {
        self.params.luminance = luminance;
        self
    }

    /// Sets the chroma bound.
    pub fn max_chroma(mut self, max_chroma: f64) -> Self {
        self.params.max_chroma = max_chroma;
        self
    }

    /// Sets the hue angle in radians.
    pub fn hue_angle(mut self, hue_angle: f64) -> Self {
        self.params.hue_angle = hue_angle;
        self
    }

    /// Generates the palette.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The count is larger than `N`
    pub fn build(self) -> Result<Palette<N>, PaletteError> {
        Palette::from_params(self.params)
    }
}

impl<const N: usize> Default for PaletteBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_is_valid() {
        let palette = Palette::<4>::new(0, 0.5, 0.2, 1.0).unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.iter().count(), 0);
        assert!(palette.get(0).is_err());
    }

    #[test]
    fn failed_reconfigure_leaves_palette_untouched() {
        let mut palette = Palette::<4>::new(3, 0.5, 0.2, 0.0).unwrap();
        let before = palette.snapshot();

        let result = palette.set_count(5);
        assert_eq!(
            result,
            Err(PaletteError::CapacityExceeded {
                requested: 5,
                capacity: 4
            })
        );
        assert_eq!(palette.count(), 3);
        assert_eq!(palette.params().count, 3);
        assert_eq!(palette.as_slice(), before.as_slice());
    }

    #[test]
    fn full_capacity_is_accepted() {
        let palette = Palette::<8>::new(8, 0.5, 0.2, 0.0).unwrap();
        assert_eq!(palette.count(), 8);
    }
}

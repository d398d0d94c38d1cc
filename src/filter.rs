//! Filter variants applied to torn tiles and live flaps.

use alloc::vec::Vec;

/// One post-processing look, selected by index.
///
/// The simulation only tags subsections and bodies with a filter; the
/// renderer decides what each tag means (a shader pass, or simply a
/// pre-filtered copy of the source image for `ImageVariant`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterKind {
    /// Pencil-sketch edge look.
    Sketch,
    /// Posterize with the given number of levels.
    Posterize { levels: u8 },
    /// Displacement-map distortion.
    Displacement,
    /// Color lookup table.
    Lookup,
    /// Perlin-noise driven pixellation.
    PerlinPixellate,
    /// Radial zoom blur.
    ZoomBlur,
    /// Laplacian edge detection.
    Laplacian,
    /// The n-th pre-filtered copy of the source image.
    ImageVariant(usize),
}

/// An indexable, closed collection of filter variants.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterBank {
    kinds: Vec<FilterKind>,
}

impl FilterBank {
    pub fn new(kinds: Vec<FilterKind>) -> Self {
        FilterBank { kinds }
    }

    /// A bank of `count` pre-filtered image copies.
    pub fn image_variants(count: usize) -> Self {
        FilterBank {
            kinds: (0..count).map(FilterKind::ImageVariant).collect(),
        }
    }

    pub fn push(&mut self, kind: FilterKind) {
        self.kinds.push(kind);
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterKind> {
        self.kinds.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_variant_bank() {
        let bank = FilterBank::image_variants(8);
        assert_eq!(bank.len(), 8);
        assert_eq!(bank.get(3), Some(&FilterKind::ImageVariant(3)));
        assert_eq!(bank.get(8), None);
    }

    #[test]
    fn mixed_bank() {
        let mut bank = FilterBank::new(alloc::vec![
            FilterKind::Sketch,
            FilterKind::Posterize { levels: 5 },
        ]);
        bank.push(FilterKind::Lookup);
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.get(2), Some(&FilterKind::Lookup));
    }
}

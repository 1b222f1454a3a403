//! Rectangular sub-regions of an image.

/// A rectangle in pixel coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering a whole `width x height` image.
    pub const fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True if the region is non-empty and lies within a
    /// `width x height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.checked_add(self.width).is_some_and(|right| right <= width)
            && self.y.checked_add(self.height).is_some_and(|bottom| bottom <= height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_region_fits() {
        assert!(Region::full(8, 4).fits_within(8, 4));
    }

    #[test]
    fn test_overhanging_region_does_not_fit() {
        assert!(!Region::new(6, 0, 4, 4).fits_within(8, 4));
        assert!(!Region::new(0, 1, 8, 4).fits_within(8, 4));
    }

    #[test]
    fn test_empty_region_does_not_fit() {
        assert!(!Region::new(0, 0, 0, 4).fits_within(8, 4));
    }

    #[test]
    fn test_overflowing_origin_does_not_fit() {
        assert!(!Region::new(usize::MAX, 0, 2, 1).fits_within(8, 4));
    }
}

//! Extents in two and three dimensions.

use bytemuck::{Pod, Zeroable};

/// A width and height, e.g. of a viewport.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Size2 {
    width: f64,
    height: f64,
}

/// A width, height and depth.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Size3 {
    width: f64,
    height: f64,
    depth: f64,
}

impl Size2 {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn set(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The ratio of width to height. A zero height gives an infinite or NaN
    /// ratio.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl_approx_eq_for_fields!(Size2, [width, height]);

impl Size3 {
    #[inline]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    #[inline]
    pub fn set(&mut self, width: f64, height: f64, depth: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self.depth = depth;
        self
    }
}

impl_approx_eq_for_fields!(Size3, [width, height, depth]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_are_empty() {
        assert_eq!(Size2::default(), Size2::new(0.0, 0.0));
        assert_eq!(Size3::default(), Size3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_eq!(Size2::new(1920.0, 1080.0).aspect_ratio(), 1920.0 / 1080.0);
        assert_eq!(Size2::new(2.0, 1.0).aspect_ratio(), 2.0);
    }

    #[test]
    fn aspect_ratio_of_zero_height_is_not_finite() {
        assert!(!Size2::new(1.0, 0.0).aspect_ratio().is_finite());
    }

    #[test]
    fn setting_size_replaces_all_extents() {
        let mut size = Size3::default();
        size.set(1.0, 2.0, 3.0);
        assert_eq!(size, Size3::new(1.0, 2.0, 3.0));
        assert_eq!(size.depth(), 3.0);

        let mut size = Size2::default();
        size.set(4.0, 5.0);
        assert_eq!((size.width(), size.height()), (4.0, 5.0));
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box dimensions.

use kurbo::Size;

/// Width, height, and depth of a box.
///
/// ```text
///                     ---  ↑
///                    / ,_\ │
///                  ,_| |_  │ height
///                  |_, ,_| │
///                    | |   ↓
/// reference point ×─ | | ─── baseline
///                    | |   ↑
///                   /_/    ↓ depth
///                  ←─────→
///                   width
/// ```
///
/// Height and depth are conventionally non-negative, but nothing here enforces
/// it: a top transform or a height split can legitimately produce a negative
/// depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    /// Extent along the horizontal axis.
    pub width: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
}

impl Dimensions {
    /// All-zero dimensions.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates dimensions from width, height, and depth.
    #[inline]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Vertical extent, `height + depth`.
    #[inline]
    pub fn total_extent(&self) -> f64 {
        self.height + self.depth
    }

    /// Width by total extent, for consumers that only care about the bounding rectangle.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.total_extent())
    }

    /// Moves the baseline so that `height` becomes `h`, keeping the total extent.
    pub fn split_at_height(&mut self, h: f64) {
        debug_assert!(h.is_finite(), "split height must be finite; got {h:?}");
        let total = self.total_extent();
        self.height = h;
        self.depth = total - h;
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::Dimensions;

    #[test]
    fn split_keeps_total_extent() {
        let mut dims = Dimensions::new(4.0, 10.0, 2.0);
        dims.split_at_height(3.0);
        assert_eq!(dims.height, 3.0);
        assert_eq!(dims.depth, 9.0);
        assert_eq!(dims.total_extent(), 12.0);
        assert_eq!(dims.width, 4.0, "width is not part of the split");
    }

    #[test]
    fn split_above_total_gives_negative_depth() {
        let mut dims = Dimensions::new(0.0, 1.0, 1.0);
        dims.split_at_height(5.0);
        assert_eq!(dims.depth, -3.0);
    }

    #[test]
    fn size_uses_total_extent() {
        let dims = Dimensions::new(5.0, 10.0, 2.0);
        let size = dims.size();
        assert_eq!(size.width, 5.0);
        assert_eq!(size.height, 12.0);
    }
}

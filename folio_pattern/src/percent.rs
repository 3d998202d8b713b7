// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Percentage positions within a region.

use kurbo::Point;

/// A position normalized to `[0, 100]` along each axis.
///
/// Produced by [`TileLayout::relative_position`](crate::TileLayout::relative_position)
/// relative to the region's total extent, or to its clip rectangle when one is
/// configured.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentPosition {
    /// Percentage of the region width.
    pub x: f64,
    /// Percentage of the region height.
    pub y: f64,
}

impl PercentPosition {
    /// Creates a percentage position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the position as fractions in `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> Point {
        Point::new(self.x / 100.0, self.y / 100.0)
    }

    /// Maps the position onto a rectangle of the given size.
    ///
    /// Handy for turning pen input into coordinates on an on-screen rendition
    /// of the same region.
    #[must_use]
    pub fn scale_to(self, width: f64, height: f64) -> Point {
        Point::new(self.x * width / 100.0, self.y * height / 100.0)
    }
}

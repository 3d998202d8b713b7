// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for layout configuration and coordinate queries.

use alloc::string::String;
use core::fmt;

/// One axis of the tiled pattern space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis (tiles across).
    Horizontal,
    /// The Y axis (tiles down).
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// Error returned when a tile layout cannot be built.
///
/// These are setup errors: the region definition has to be fixed before the
/// layout can be queried.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The tile grid has zero tiles along an axis, or too many in total.
    #[error("tile grid of {across}x{down} is empty or too large")]
    InvalidGrid {
        /// Tiles across.
        across: u32,
        /// Tiles down.
        down: u32,
    },
    /// A tile has zero, negative or non-finite size.
    #[error("tile size must be positive, got {width}x{height} dots")]
    EmptyTile {
        /// Tile width in dots.
        width: f64,
        /// Tile height in dots.
        height: f64,
    },
    /// The total extent, used to normalize percentage positions, is empty.
    #[error("total region size must be positive, got {width}x{height} dots")]
    EmptyExtent {
        /// Total width in dots.
        width: f64,
        /// Total height in dots.
        height: f64,
    },
    /// The origin is NaN or infinite.
    #[error("pattern origin ({x}, {y}) is not finite")]
    NonFiniteOrigin {
        /// Origin X in dots.
        x: f64,
        /// Origin Y in dots.
        y: f64,
    },
    /// The tile-to-tile stride is negative or non-finite.
    #[error("{axis} tile stride of {stride} dots must be finite and non-negative")]
    InvalidStride {
        /// Offending axis.
        axis: Axis,
        /// Stride in dots.
        stride: f64,
    },
    /// The stride falls strictly between zero and the tile size.
    ///
    /// Staggered tiles like this are not supported: a stride must be either
    /// `0` (all tiles share one pattern page along that axis) or at least the
    /// size of a tile.
    #[error(
        "{axis} tile stride of {stride} dots is between 0 and the tile size of {tile} dots; staggered tiles are unsupported"
    )]
    StaggeredStride {
        /// Offending axis.
        axis: Axis,
        /// Stride in dots.
        stride: f64,
        /// Tile size along the same axis in dots.
        tile: f64,
    },
    /// The void trimmed from the trailing tile is outside `0..=tile`.
    #[error("{axis} void of {void} dots must lie within 0..={tile}")]
    InvalidVoid {
        /// Offending axis.
        axis: Axis,
        /// Void in dots.
        void: f64,
        /// Tile size along the same axis in dots.
        tile: f64,
    },
    /// The total extent is smaller than the tiles laid end to end.
    ///
    /// Percentage positions past the total extent would exceed 100.
    #[error(
        "{axis} total size of {total} dots is smaller than the {tiled} dots covered by the tiles"
    )]
    ExtentMismatch {
        /// Offending axis.
        axis: Axis,
        /// Configured total size in dots.
        total: f64,
        /// Tile count times tile size, less the void, in dots.
        tiled: f64,
    },
    /// The last tile's index does not fit in an `i32`.
    #[error("{tile_count} tiles starting at #{starting_tile} run past the largest tile index")]
    TileIndexOverflow {
        /// Index of the top-left tile.
        starting_tile: i32,
        /// Number of tiles.
        tile_count: u32,
    },
    /// The clip rectangle is empty or non-finite.
    #[error("clip rectangle {width}x{height} at ({x}, {y}) must be finite with positive area")]
    EmptyClip {
        /// Clip X, region-relative.
        x: f64,
        /// Clip Y, region-relative.
        y: f64,
        /// Clip width.
        width: f64,
        /// Clip height.
        height: f64,
    },
}

/// Error returned by a coordinate query that has no meaningful answer.
///
/// A point that is simply outside the region is not an error for
/// [`contains`](crate::TileLayout::contains) or
/// [`tile_index`](crate::TileLayout::tile_index); it only becomes one when a
/// relative position is requested for it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The point does not fall inside the region.
    #[error("({x}, {y}) is not inside the tiled region")]
    NotContained {
        /// Queried X in dots.
        x: f64,
        /// Queried Y in dots.
        y: f64,
    },
    /// The converter has no layout yet.
    #[error("region `{0}` has no tile layout configured")]
    Unconfigured(String),
}

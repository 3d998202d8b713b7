// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiling metadata produced when pattern is laid out onto a sheet.

use kurbo::Point;

use crate::error::ConfigError;
use crate::layout::{TileLayout, TileLayoutBuilder};

/// Describes how a block of dot pattern was tiled onto a region.
///
/// A pattern renderer emits one of these for every region it fills with
/// pattern. It carries everything a [`TileLayout`] needs, in the renderer's
/// own terms: the trailing tiles are described by how many dots they keep
/// rather than by how many were trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TiledPatternDescriptor {
    /// Tiles across the region.
    pub tiles_across: u32,
    /// Tiles down the region.
    pub tiles_down: u32,
    /// Width of a full tile, in dots.
    pub full_tile_width: u32,
    /// Height of a full tile, in dots.
    pub full_tile_height: u32,
    /// Dots kept from the right-most column of tiles.
    pub trailing_tile_width: u32,
    /// Dots kept from the bottom-most row of tiles.
    pub trailing_tile_height: u32,
    /// Horizontal distance between the origins of adjacent tiles, in dots.
    pub stride_x: f64,
    /// Vertical distance between the origins of adjacent tiles, in dots.
    pub stride_y: f64,
    /// Physical X of the top-left tile's corner.
    pub origin_x: f64,
    /// Physical Y of the top-left tile's corner.
    pub origin_y: f64,
    /// Width of the whole region in dots, without padding.
    pub total_width: f64,
    /// Height of the whole region in dots, without padding.
    pub total_height: f64,
    /// Number of the pattern file the top-left tile came from.
    pub first_pattern_file: i32,
}

impl TiledPatternDescriptor {
    /// Dots trimmed from the right-most tiles.
    ///
    /// Negative when the trailing tile claims to be wider than a full tile,
    /// which [`TileLayoutBuilder::build`] rejects.
    #[must_use]
    pub fn void_right(&self) -> f64 {
        f64::from(self.full_tile_width) - f64::from(self.trailing_tile_width)
    }

    /// Dots trimmed from the bottom-most tiles.
    #[must_use]
    pub fn void_bottom(&self) -> f64 {
        f64::from(self.full_tile_height) - f64::from(self.trailing_tile_height)
    }
}

impl TileLayoutBuilder {
    /// Seeds a builder with everything a pattern descriptor provides.
    ///
    /// The pattern file number becomes the starting tile, so tile indices
    /// line up with the pattern files (handy for telling notebook pages apart).
    #[must_use]
    pub fn from_descriptor(desc: &TiledPatternDescriptor) -> Self {
        Self::new()
            .origin(desc.origin_x, desc.origin_y)
            .starting_tile(desc.first_pattern_file)
            .tile_grid(desc.tiles_across, desc.tiles_down)
            .tile_size(
                f64::from(desc.full_tile_width),
                f64::from(desc.full_tile_height),
            )
            .tile_stride(desc.stride_x, desc.stride_y)
            .void_edges(desc.void_right(), desc.void_bottom())
            .total_size(desc.total_width, desc.total_height)
    }
}

impl TileLayout {
    /// Builds a layout covering everything the descriptor describes.
    pub fn from_descriptor(desc: &TiledPatternDescriptor) -> Result<Self, ConfigError> {
        TileLayoutBuilder::from_descriptor(desc).build()
    }

    /// Builds a layout for a region that occupies only part of the described block.
    ///
    /// `origin`, `width` and `height` give the region's place in the block,
    /// in region-relative dots.
    pub fn from_descriptor_clipped(
        desc: &TiledPatternDescriptor,
        origin: Point,
        width: f64,
        height: f64,
    ) -> Result<Self, ConfigError> {
        TileLayoutBuilder::from_descriptor(desc)
            .clip_rect(origin, width, height)
            .build()
    }
}

// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile layout: configuration, derived bounds and per-sample queries.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::error::{Axis, ConfigError, QueryError};
use crate::percent::PercentPosition;

/// Staged configuration for a [`TileLayout`].
///
/// Every setter is idempotent and nothing is validated until
/// [`TileLayoutBuilder::build`], which either returns a consistent layout or
/// a [`ConfigError`] describing the first problem found.
///
/// Defaults: origin at zero, a 1x1 grid, zero sizes, zero stride, no void,
/// starting tile `0`, no clip. Tile size and total size must be set before
/// building.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TileLayoutBuilder {
    origin: Point,
    tiles_across: u32,
    tiles_down: u32,
    tile_size: Size,
    tile_stride: Vec2,
    void_edges: Vec2,
    total_size: Size,
    starting_tile: i32,
    clip: Option<Rect>,
}

impl Default for TileLayoutBuilder {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            tiles_across: 1,
            tiles_down: 1,
            tile_size: Size::ZERO,
            tile_stride: Vec2::ZERO,
            void_edges: Vec2::ZERO,
            total_size: Size::ZERO,
            starting_tile: 0,
            clip: None,
        }
    }
}

impl TileLayoutBuilder {
    /// Creates a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tile grid dimensions.
    #[must_use]
    pub fn tile_grid(mut self, across: u32, down: u32) -> Self {
        self.tiles_across = across;
        self.tiles_down = down;
        self
    }

    /// Sets the nominal size of one tile, in dots.
    #[must_use]
    pub fn tile_size(mut self, width: f64, height: f64) -> Self {
        self.tile_size = Size::new(width, height);
        self
    }

    /// Sets the physical coordinate of the top-left corner of the top-left tile.
    #[must_use]
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// Sets the region extent without inter-tile padding, in dots.
    ///
    /// This is the denominator for percentage positions.
    #[must_use]
    pub fn total_size(mut self, width: f64, height: f64) -> Self {
        self.total_size = Size::new(width, height);
        self
    }

    /// Sets the distance between the origins of adjacent tiles, in dots.
    ///
    /// Along an axis with more than one tile this must be `0` or at least the
    /// tile size; see [`ConfigError::StaggeredStride`].
    #[must_use]
    pub fn tile_stride(mut self, x: f64, y: f64) -> Self {
        self.tile_stride = Vec2::new(x, y);
        self
    }

    /// Sets the dots trimmed from the right-most and bottom-most tile.
    #[must_use]
    pub fn void_edges(mut self, right: f64, bottom: f64) -> Self {
        self.void_edges = Vec2::new(right, bottom);
        self
    }

    /// Sets the index assigned to the top-left tile.
    #[must_use]
    pub fn starting_tile(mut self, index: i32) -> Self {
        self.starting_tile = index;
        self
    }

    /// Restricts the region to a sub-rectangle, in region-relative dots.
    #[must_use]
    pub fn clip_rect(mut self, origin: Point, width: f64, height: f64) -> Self {
        // Not `Rect::from_origin_size`: that would normalize negative sizes
        // and hide them from validation.
        self.clip = Some(Rect::new(
            origin.x,
            origin.y,
            origin.x + width,
            origin.y + height,
        ));
        self
    }

    /// Removes any clip rectangle.
    #[must_use]
    pub fn clear_clip(mut self) -> Self {
        self.clip = None;
        self
    }

    /// Validates the configuration and computes the derived bounds.
    pub fn build(self) -> Result<TileLayout, ConfigError> {
        if let Err(err) = self.validate() {
            log::debug!("rejected tile layout {self:?}: {err}");
            return Err(err);
        }

        let tile_count = self.tiles_across * self.tiles_down;
        let (stride_x, extent_x) = axis_bounds(
            self.tiles_across,
            tile_count,
            self.tile_size.width,
            self.tile_stride.x,
            self.total_size.width,
            self.void_edges.x,
        );
        let (stride_y, extent_y) = axis_bounds(
            self.tiles_down,
            tile_count,
            self.tile_size.height,
            self.tile_stride.y,
            self.total_size.height,
            self.void_edges.y,
        );

        let layout = TileLayout {
            config: self,
            tile_count,
            stride: Vec2::new(stride_x, stride_y),
            max: Point::new(self.origin.x + extent_x, self.origin.y + extent_y),
        };
        log::debug!(
            "built tile layout: {}x{} tiles from #{} at ({}, {}), bounds {:?}",
            self.tiles_across,
            self.tiles_down,
            self.starting_tile,
            self.origin.x,
            self.origin.y,
            layout.outer_bounds(),
        );
        if let Some(clip) = self.clip {
            log::debug!("tile layout clipped to {clip:?}");
        }
        Ok(layout)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles_across == 0
            || self.tiles_down == 0
            || self.tiles_across.checked_mul(self.tiles_down).is_none()
        {
            return Err(ConfigError::InvalidGrid {
                across: self.tiles_across,
                down: self.tiles_down,
            });
        }
        if !is_positive(self.tile_size.width) || !is_positive(self.tile_size.height) {
            return Err(ConfigError::EmptyTile {
                width: self.tile_size.width,
                height: self.tile_size.height,
            });
        }
        if !is_positive(self.total_size.width) || !is_positive(self.total_size.height) {
            return Err(ConfigError::EmptyExtent {
                width: self.total_size.width,
                height: self.total_size.height,
            });
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::NonFiniteOrigin {
                x: self.origin.x,
                y: self.origin.y,
            });
        }
        check_axis(
            Axis::Horizontal,
            self.tiles_across,
            self.tile_size.width,
            self.tile_stride.x,
            self.void_edges.x,
        )?;
        check_axis(
            Axis::Vertical,
            self.tiles_down,
            self.tile_size.height,
            self.tile_stride.y,
            self.void_edges.y,
        )?;
        check_extent(
            Axis::Horizontal,
            self.tiles_across,
            self.tile_size.width,
            self.void_edges.x,
            self.total_size.width,
        )?;
        check_extent(
            Axis::Vertical,
            self.tiles_down,
            self.tile_size.height,
            self.void_edges.y,
            self.total_size.height,
        )?;
        let tile_count = self.tiles_across * self.tiles_down;
        if self
            .starting_tile
            .checked_add_unsigned(tile_count - 1)
            .is_none()
        {
            return Err(ConfigError::TileIndexOverflow {
                starting_tile: self.starting_tile,
                tile_count,
            });
        }
        if let Some(clip) = self.clip
            && (!clip.is_finite() || !is_positive(clip.width()) || !is_positive(clip.height()))
        {
            return Err(ConfigError::EmptyClip {
                x: clip.x0,
                y: clip.y0,
                width: clip.width(),
                height: clip.height(),
            });
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_axis(axis: Axis, tiles: u32, tile: f64, stride: f64, void: f64) -> Result<(), ConfigError> {
    if !stride.is_finite() || stride < 0.0 {
        return Err(ConfigError::InvalidStride { axis, stride });
    }
    if tiles > 1 && stride > 0.0 && stride < tile {
        return Err(ConfigError::StaggeredStride { axis, stride, tile });
    }
    if !void.is_finite() || !(0.0..=tile).contains(&void) {
        return Err(ConfigError::InvalidVoid { axis, void, tile });
    }
    Ok(())
}

/// Along an axis with several tiles, region dots reach `tiles * tile - void`.
///
/// Single-tile axes use the total size as their stride, so they never map
/// past it.
fn check_extent(axis: Axis, tiles: u32, tile: f64, void: f64, total: f64) -> Result<(), ConfigError> {
    if tiles == 1 {
        return Ok(());
    }
    let tiled = f64::from(tiles) * tile - void;
    if total < tiled {
        return Err(ConfigError::ExtentMismatch { axis, total, tiled });
    }
    Ok(())
}

/// Returns the effective stride and the extent past the origin along one axis.
fn axis_bounds(
    tiles: u32,
    tile_count: u32,
    tile: f64,
    stride: f64,
    total: f64,
    void: f64,
) -> (f64, f64) {
    if tiles == 1 {
        (total, total)
    } else if stride < tile {
        // Every tile shares one pattern page along this axis.
        (tile, tile - void)
    } else {
        // Tiles run end to end in pattern space, even those on later rows.
        let last = f64::from(tile_count - 1);
        (stride, stride * last + tile - void)
    }
}

/// Floor-divides a non-negative origin-relative offset by a stride.
#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets inside the outer bounds are below tile_count strides"
)]
fn tile_step(offset: f64, stride: f64) -> u32 {
    (offset / stride).floor() as u32
}

/// Geometry of one region's tiled dot pattern.
///
/// A `TileLayout` maps absolute streamed pen coordinates (huge values in the
/// pattern's native dot space) onto one logical region:
///
/// - [`contains`](Self::contains) decides whether a sample belongs to the region,
/// - [`tile_index`](Self::tile_index) names the tile it landed on,
/// - [`relative_position`](Self::relative_position) normalizes it to
///   percentages of the region (or of its clip rectangle).
///
/// Layouts are immutable. The outer bounds and effective strides are computed
/// once by [`TileLayoutBuilder::build`], so every query is a handful of
/// comparisons and divisions. Use [`to_builder`](Self::to_builder) to derive
/// a changed layout.
///
/// ## Tile numbering
///
/// Tiles are numbered row-major from [`starting_tile`](Self::starting_tile):
///
/// ```text
/// [0][1][2]
/// [3][4][5]
/// ```
///
/// but in pattern space they usually run along a single axis, so the layout
/// above occupies `[0][1][2][3][4][5]`. A sample's tile offset is therefore
/// the larger of its horizontal and vertical step counts. This holds when
/// tiling varies along one axis at a time; a grid that steps along both axes
/// at once resolves to the larger step, not to a row and column pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TileLayoutBuilder", into = "TileLayoutBuilder")
)]
pub struct TileLayout {
    config: TileLayoutBuilder,
    tile_count: u32,
    stride: Vec2,
    max: Point,
}

impl TileLayout {
    /// Returns a builder with default configuration.
    #[must_use]
    pub fn builder() -> TileLayoutBuilder {
        TileLayoutBuilder::new()
    }

    /// Creates a layout for a region that lives on a single tile.
    pub fn single_tile(origin: Point, width: f64, height: f64) -> Result<Self, ConfigError> {
        TileLayoutBuilder::new()
            .origin(origin.x, origin.y)
            .tile_size(width, height)
            .total_size(width, height)
            .build()
    }

    /// Returns a builder seeded with this layout's configuration.
    #[must_use]
    pub fn to_builder(&self) -> TileLayoutBuilder {
        self.config
    }

    /// Whether the point falls inside this region.
    ///
    /// Rejections are checked cheapest first: the outer bounds, then the
    /// padding between tiles, then the clip rectangle.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        let origin = self.config.origin;
        let in_bounds =
            pt.x >= origin.x && pt.y >= origin.y && pt.x < self.max.x && pt.y < self.max.y;
        if !in_bounds {
            return false;
        }

        let offset = pt - origin;
        let tile = self.config.tile_size;
        let off_gap = offset.x % self.stride.x < tile.width && offset.y % self.stride.y < tile.height;
        if !off_gap {
            return false;
        }

        match self.config.clip {
            None => true,
            Some(clip) => {
                let dots = self.region_dots(offset);
                dots.x >= clip.x0 && dots.x <= clip.x1 && dots.y >= clip.y0 && dots.y <= clip.y1
            }
        }
    }

    /// Returns the index of the tile containing the point.
    ///
    /// `None` means the point is not in this region, which is the common case
    /// when one pen stream is tested against many regions.
    #[inline]
    pub fn tile_index(&self, pt: Point) -> Option<i32> {
        if !self.contains(pt) {
            return None;
        }
        let (h, v) = self.tile_steps(pt - self.config.origin);
        // In-bounds steps stay below `tile_count`, and `build` checked that the
        // last tile's index fits.
        Some(self.config.starting_tile.wrapping_add_unsigned(h.max(v)))
    }

    /// Converts the point into percentages of the region's extent.
    ///
    /// With a clip rectangle, the percentages are relative to the clip
    /// rectangle instead. Fails for points outside the region.
    pub fn relative_position(&self, pt: Point) -> Result<PercentPosition, QueryError> {
        if !self.contains(pt) {
            return Err(QueryError::NotContained { x: pt.x, y: pt.y });
        }
        let dots = self.region_dots(pt - self.config.origin);
        let frame = self.normalization_frame();
        Ok(PercentPosition::new(
            (dots.x - frame.x0) / frame.width() * 100.0,
            (dots.y - frame.y0) / frame.height() * 100.0,
        ))
    }

    /// The rectangle percentage positions are relative to, in region dots.
    fn normalization_frame(&self) -> Rect {
        self.config
            .clip
            .unwrap_or_else(|| Rect::from_origin_size(Point::ZERO, self.config.total_size))
    }

    fn tile_steps(&self, offset: Vec2) -> (u32, u32) {
        (
            tile_step(offset.x, self.stride.x),
            tile_step(offset.y, self.stride.y),
        )
    }

    /// Position of an in-bounds offset in the gap-free region, in dots.
    fn region_dots(&self, offset: Vec2) -> Point {
        let (h, v) = self.tile_steps(offset);
        let in_tile = Vec2::new(
            offset.x - f64::from(h) * self.stride.x,
            offset.y - f64::from(v) * self.stride.y,
        );
        let tile = h.max(v);
        let row = tile / self.config.tiles_across;
        let col = tile % self.config.tiles_across;
        Point::new(
            f64::from(col) * self.config.tile_size.width + in_tile.x,
            f64::from(row) * self.config.tile_size.height + in_tile.y,
        )
    }

    /// Physical coordinate of the top-left corner of the top-left tile.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.config.origin
    }

    /// Number of tiles across.
    #[must_use]
    pub fn tiles_across(&self) -> u32 {
        self.config.tiles_across
    }

    /// Number of tiles down.
    #[must_use]
    pub fn tiles_down(&self) -> u32 {
        self.config.tiles_down
    }

    /// Total number of tiles, `tiles_across * tiles_down`.
    #[must_use]
    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    /// Nominal size of one tile, in dots.
    #[must_use]
    pub fn tile_size(&self) -> Size {
        self.config.tile_size
    }

    /// Configured distance between the origins of adjacent tiles.
    #[must_use]
    pub fn tile_stride(&self) -> Vec2 {
        self.config.tile_stride
    }

    /// Period used for the inter-tile gap test along each axis.
    #[must_use]
    pub fn effective_stride(&self) -> Vec2 {
        self.stride
    }

    /// Dots trimmed from the right-most and bottom-most tile.
    #[must_use]
    pub fn void_edges(&self) -> Vec2 {
        self.config.void_edges
    }

    /// Region extent without inter-tile padding, in dots.
    #[must_use]
    pub fn total_size(&self) -> Size {
        self.config.total_size
    }

    /// Index of the top-left tile.
    #[must_use]
    pub fn starting_tile(&self) -> i32 {
        self.config.starting_tile
    }

    /// Clip rectangle in region-relative dots, if any.
    #[must_use]
    pub fn clip(&self) -> Option<Rect> {
        self.config.clip
    }

    /// Outer containment rectangle in physical coordinates (max edges exclusive).
    #[must_use]
    pub fn outer_bounds(&self) -> Rect {
        Rect::from_points(self.config.origin, self.max)
    }

    /// Area of the region in square dots.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.config.total_size.area()
    }

    /// Snapshot of the layout for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TileLayoutDebugInfo {
        TileLayoutDebugInfo {
            outer_bounds: self.outer_bounds(),
            effective_stride: self.stride,
            tiles_across: self.config.tiles_across,
            tiles_down: self.config.tiles_down,
            starting_tile: self.config.starting_tile,
            last_tile: self
                .config
                .starting_tile
                .wrapping_add_unsigned(self.tile_count - 1),
            clip: self.config.clip,
        }
    }
}

impl TryFrom<TileLayoutBuilder> for TileLayout {
    type Error = ConfigError;

    fn try_from(builder: TileLayoutBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

impl From<TileLayout> for TileLayoutBuilder {
    fn from(layout: TileLayout) -> Self {
        layout.config
    }
}

/// Debug snapshot of a [`TileLayout`].
#[derive(Clone, Copy, Debug)]
pub struct TileLayoutDebugInfo {
    /// Outer containment rectangle in physical coordinates.
    pub outer_bounds: Rect,
    /// Period of the inter-tile gap test.
    pub effective_stride: Vec2,
    /// Tiles across.
    pub tiles_across: u32,
    /// Tiles down.
    pub tiles_down: u32,
    /// Index of the top-left tile.
    pub starting_tile: i32,
    /// Index of the last tile.
    pub last_tile: i32,
    /// Clip rectangle in region-relative dots.
    pub clip: Option<Rect>,
}

// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_pattern --heading-base-level=0

//! Folio Pattern: resolve digital-pen coordinates against tiled dot pattern.
//!
//! A digitizing pen reading a printed dot pattern reports absolute positions
//! in the pattern's own dot space. These numbers are huge, and a paper region
//! is usually covered by several pattern tiles that sit far apart in that
//! space, with padding between them and a partially used last tile. This
//! crate turns such a position into:
//!
//! - whether it belongs to a given region ([`TileLayout::contains`]),
//! - which tile it landed on ([`TileLayout::tile_index`]),
//! - where it is within the region, as percentages
//!   ([`TileLayout::relative_position`]).
//!
//! It does **not** talk to pens, render pattern, or manage sheets. Callers
//! are expected to:
//! - Obtain a [`TiledPatternDescriptor`] from whatever laid pattern onto the
//!   sheet, or describe the tiling by hand with a [`TileLayoutBuilder`].
//! - Feed pen samples (in dot units) to the queries, typically once per
//!   sample for every region on the page.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use folio_pattern::TileLayout;
//!
//! // Two 100-dot tiles, 120 dots apart in pattern space.
//! let layout = TileLayout::builder()
//!     .origin(40_000.0, 9_000.0)
//!     .tile_grid(2, 1)
//!     .tile_size(100.0, 100.0)
//!     .tile_stride(120.0, 0.0)
//!     .total_size(200.0, 100.0)
//!     .starting_tile(3)
//!     .build()?;
//!
//! let sample = Point::new(40_130.0, 9_050.0);
//! assert_eq!(layout.tile_index(sample), Some(4));
//!
//! let pos = layout.relative_position(sample)?;
//! assert_eq!((pos.x.round(), pos.y.round()), (55.0, 50.0));
//!
//! // Samples in the padding between tiles belong to no region.
//! assert!(!layout.contains(Point::new(40_110.0, 9_050.0)));
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! ## Design notes
//!
//! - Layouts are immutable and validated once; every query is O(1).
//! - Tiles are assumed to vary along one axis at a time in pattern space.
//!   See [`TileLayout`] for how tile indices are resolved.
//! - A stride between zero and the tile size (staggered tiles) is rejected
//!   at build time.
//! - With the `std` feature, [`PatternConverter`] wraps a layout for one
//!   named region so it can be configured late and shared across threads.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
mod converter;
mod descriptor;
mod error;
mod layout;
mod percent;

#[cfg(feature = "std")]
pub use converter::PatternConverter;
pub use descriptor::TiledPatternDescriptor;
pub use error::{Axis, ConfigError, QueryError};
pub use layout::{TileLayout, TileLayoutBuilder, TileLayoutDebugInfo};
pub use percent::PercentPosition;

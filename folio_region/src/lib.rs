// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=folio_region --heading-base-level=0

//! Folio Region: named paper regions and pen-stroke routing.
//!
//! A printed sheet usually carries several active regions (a drawing area,
//! a row of buttons, a signature box), each covered by its own tiled dot
//! pattern. This crate keeps those regions by name and sends pen strokes to
//! the ones they touch:
//!
//! - [`RegionRegistry`] owns one [`PatternConverter`] per region, keyed by the
//!   converter's region name, and resolves a pen position against all of them.
//! - [`PenRouter`] consumes a pen's stroke lifecycle through [`PenListener`]
//!   and forwards each event to the [`RegionListener`]s of the regions hit,
//!   with the tile index and percentage position already resolved.
//!
//! It does **not** talk to pen hardware. Callers are expected to adapt their
//! pen SDK's callbacks into [`PenListener`] calls, in dot units.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::mpsc;
//!
//! use folio_pattern::{PatternConverter, TileLayout};
//! use folio_region::{PenListener, PenRouter, PenSample, RegionEvent, RegionRegistry};
//! use kurbo::Point;
//!
//! let mut regions = RegionRegistry::new();
//! let layout = TileLayout::single_tile(Point::new(5_000.0, 0.0), 200.0, 100.0)?;
//! regions.register(Arc::new(PatternConverter::with_layout("signature", layout)))?;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut router = PenRouter::new(regions);
//! router.listen("signature", move |event: &RegionEvent<'_>| {
//!     tx.send(event.hit.position).unwrap();
//! })?;
//!
//! router.pen_down(&PenSample::new(5_050.0, 25.0, 0));
//! router.pen_up(&PenSample::new(0.0, 0.0, 40));
//!
//! let first = rx.recv()?;
//! assert_eq!((first.x, first.y), (25.0, 25.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Design notes
//!
//! - Regions are visited in registration order; overlapping regions all
//!   receive the event.
//! - Converters may be registered before their pattern is known. They match
//!   nothing until configured.
//! - A pen-up carries no usable position, so it is delivered to the regions
//!   the stroke was last seen in.

mod pen;
mod registry;
mod router;

pub use folio_pattern::PatternConverter;
pub use pen::{PenListener, PenSample};
pub use registry::{Hits, RegionHit, RegionRegistry, RegistryError};
pub use router::{PenPhase, PenRouter, RegionEvent, RegionListener};

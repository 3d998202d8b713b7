// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-keyed registry of region converters.

use std::sync::Arc;

use folio_pattern::{PatternConverter, PercentPosition};
use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

/// Errors from registering regions or attaching listeners to them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A region with this name is already registered.
    #[error("a region named `{0}` is already registered")]
    DuplicateRegion(String),
    /// No region with this name is registered.
    #[error("no region named `{0}` is registered")]
    UnknownRegion(String),
}

/// A pen sample resolved against one region.
#[derive(Clone, Debug)]
pub struct RegionHit {
    converter: Arc<PatternConverter>,
    /// Index of the tile the sample landed on.
    pub tile: i32,
    /// Position of the sample as percentages of the region.
    pub position: PercentPosition,
}

impl RegionHit {
    /// Name of the region that was hit.
    #[must_use]
    pub fn region(&self) -> &str {
        self.converter.region_name()
    }

    /// Converter of the region that was hit.
    #[must_use]
    pub fn converter(&self) -> &Arc<PatternConverter> {
        &self.converter
    }
}

/// Hits for one sample; most samples hit at most a couple of regions.
pub type Hits = SmallVec<[RegionHit; 2]>;

/// Regions on the paper, each with its converter, looked up by name.
///
/// Region names must be unique. Resolution visits regions in registration
/// order, so when regions overlap the earlier one is reported first.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Arc<PatternConverter>>,
    by_name: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a region, keyed by its converter's region name.
    pub fn register(&mut self, converter: Arc<PatternConverter>) -> Result<(), RegistryError> {
        let name = converter.region_name();
        if self.by_name.contains_key(name) {
            log::warn!("refusing to register region `{name}` twice");
            return Err(RegistryError::DuplicateRegion(name.into()));
        }
        log::debug!(
            "registered region `{name}` ({})",
            if converter.is_configured() {
                "configured"
            } else {
                "awaiting pattern"
            }
        );
        self.by_name.insert(name.into(), self.regions.len());
        self.regions.push(converter);
        Ok(())
    }

    /// Removes a region by name and returns its converter.
    pub fn remove(&mut self, name: &str) -> Option<Arc<PatternConverter>> {
        let index = self.by_name.remove(name)?;
        let converter = self.regions.remove(index);
        for slot in self.by_name.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        log::debug!("removed region `{name}`");
        Some(converter)
    }

    /// Looks up a region's converter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<PatternConverter>> {
        self.by_name.get(name).map(|&index| &self.regions[index])
    }

    /// Whether a region with this name is registered.
    #[must_use]
    pub fn contains_region(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.regions.iter().map(|converter| converter.region_name())
    }

    /// Resolves a pen position against every region.
    ///
    /// Unconfigured regions never match.
    pub fn resolve(&self, pt: Point) -> Hits {
        self.regions
            .iter()
            .filter_map(|converter| hit(converter, pt))
            .collect()
    }

    /// Resolves a pen position against the regions, stopping at the first hit.
    pub fn resolve_first(&self, pt: Point) -> Option<RegionHit> {
        self.regions
            .iter()
            .find_map(|converter| hit(converter, pt))
    }
}

fn hit(converter: &Arc<PatternConverter>, pt: Point) -> Option<RegionHit> {
    // One snapshot so tile and position come from the same layout.
    let layout = converter.layout()?;
    let tile = layout.tile_index(pt)?;
    let position = layout.relative_position(pt).ok()?;
    Some(RegionHit {
        converter: Arc::clone(converter),
        tile,
        position,
    })
}

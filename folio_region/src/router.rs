// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing of pen strokes to the regions they touch.

use core::fmt;

use hashbrown::HashMap;

use crate::pen::{PenListener, PenSample};
use crate::registry::{Hits, RegionHit, RegionRegistry, RegistryError};

/// Where in a stroke an event happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PenPhase {
    /// First contact of a stroke.
    Down,
    /// Movement during a stroke.
    Move,
    /// End of a stroke.
    Up,
}

/// A pen event resolved against one region.
#[derive(Clone, Copy, Debug)]
pub struct RegionEvent<'a> {
    /// Phase of the stroke.
    pub phase: PenPhase,
    /// Region, tile and percentage position.
    ///
    /// For [`PenPhase::Up`] this is the last hit of the stroke in the region.
    pub hit: &'a RegionHit,
    /// The raw sample.
    pub sample: &'a PenSample,
}

/// Handles pen events for a region.
pub trait RegionListener {
    /// Called for every stroke event that touches the region.
    fn region_event(&mut self, event: &RegionEvent<'_>);
}

impl<F> RegionListener for F
where
    F: FnMut(&RegionEvent<'_>),
{
    fn region_event(&mut self, event: &RegionEvent<'_>) {
        self(event);
    }
}

type BoxedListener = Box<dyn RegionListener + Send>;

/// Routes one pen's strokes to listeners on the regions it touches.
///
/// Each down and move sample is resolved against every registered region and
/// forwarded to the listeners of each region hit. The pen-up is delivered to
/// the regions the stroke was last seen in, carrying that last hit.
#[derive(Default)]
pub struct PenRouter {
    regions: RegionRegistry,
    listeners: HashMap<String, Vec<BoxedListener>>,
    last_hits: Hits,
}

impl PenRouter {
    /// Creates a router over a registry.
    #[must_use]
    pub fn new(regions: RegionRegistry) -> Self {
        Self {
            regions,
            listeners: HashMap::new(),
            last_hits: Hits::new(),
        }
    }

    /// The routed regions.
    #[must_use]
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// The routed regions, for registering or removing regions.
    ///
    /// Listeners of a removed region stay attached and resume if a region
    /// with the same name is registered again.
    pub fn regions_mut(&mut self) -> &mut RegionRegistry {
        &mut self.regions
    }

    /// Attaches a listener to a registered region.
    pub fn listen<L>(&mut self, region: &str, listener: L) -> Result<(), RegistryError>
    where
        L: RegionListener + Send + 'static,
    {
        if !self.regions.contains_region(region) {
            return Err(RegistryError::UnknownRegion(region.into()));
        }
        self.listeners
            .entry_ref(region)
            .or_default()
            .push(Box::new(listener));
        Ok(())
    }

    /// Detaches every listener from a region, returning how many there were.
    pub fn unlisten(&mut self, region: &str) -> usize {
        self.listeners.remove(region).map_or(0, |list| list.len())
    }

    /// Whether the current stroke has touched any region.
    #[must_use]
    pub fn in_stroke_region(&self) -> bool {
        !self.last_hits.is_empty()
    }

    fn route(&mut self, phase: PenPhase, sample: &PenSample) {
        let hits = self.regions.resolve(sample.position);
        if hits.is_empty() {
            if phase == PenPhase::Down {
                log::trace!("pen down at {:?} touched no region", sample.position);
            }
            return;
        }
        self.deliver(phase, &hits, sample);
        self.last_hits = hits;
    }

    fn deliver(&mut self, phase: PenPhase, hits: &[RegionHit], sample: &PenSample) {
        for hit in hits {
            let Some(listeners) = self.listeners.get_mut(hit.region()) else {
                continue;
            };
            let event = RegionEvent { phase, hit, sample };
            for listener in listeners.iter_mut() {
                listener.region_event(&event);
            }
        }
    }
}

impl PenListener for PenRouter {
    fn pen_down(&mut self, sample: &PenSample) {
        self.last_hits.clear();
        self.route(PenPhase::Down, sample);
    }

    fn sample(&mut self, sample: &PenSample) {
        self.route(PenPhase::Move, sample);
    }

    fn pen_up(&mut self, sample: &PenSample) {
        let hits = core::mem::take(&mut self.last_hits);
        self.deliver(PenPhase::Up, &hits, sample);
    }
}

impl fmt::Debug for PenRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PenRouter")
            .field("regions", &self.regions)
            .field(
                "listeners",
                &self
                    .listeners
                    .iter()
                    .map(|(name, list)| (name.as_str(), list.len()))
                    .collect::<HashMap<_, _>>(),
            )
            .field("last_hits", &self.last_hits)
            .finish()
    }
}

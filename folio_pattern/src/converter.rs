// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region converter that can be configured late and queried from many threads.

use alloc::string::String;
use alloc::sync::Arc;

use kurbo::Point;
use parking_lot::RwLock;

use crate::descriptor::TiledPatternDescriptor;
use crate::error::{ConfigError, QueryError};
use crate::layout::{TileLayout, TileLayoutBuilder};
use crate::percent::PercentPosition;

/// Resolves pen coordinates for one named region.
///
/// The converter refers to its region by name only; resolve the region itself
/// through whatever registry owns it. A converter may be created before its
/// pattern is known and configured once a pattern renderer has produced a
/// [`TiledPatternDescriptor`]. Until then it contains nothing.
///
/// Queries take a shared lock around a few arithmetic operations.
/// Configuration validates and builds the complete [`TileLayout`] inside an
/// exclusive section, so a query sees either the old layout or the new one,
/// never a mix. Callers on a hot path can also grab a [`layout`](Self::layout)
/// snapshot once and query it without locking.
#[derive(Debug)]
pub struct PatternConverter {
    region: String,
    layout: RwLock<Option<Arc<TileLayout>>>,
}

impl PatternConverter {
    /// Creates an unconfigured converter for the named region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            layout: RwLock::new(None),
        }
    }

    /// Creates a converter that is already configured.
    #[must_use]
    pub fn with_layout(region: impl Into<String>, layout: TileLayout) -> Self {
        Self {
            region: region.into(),
            layout: RwLock::new(Some(Arc::new(layout))),
        }
    }

    /// Name of the region this converter resolves coordinates for.
    #[must_use]
    pub fn region_name(&self) -> &str {
        &self.region
    }

    /// Whether a layout has been configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.layout.read().is_some()
    }

    /// Returns the current layout, if any.
    #[must_use]
    pub fn layout(&self) -> Option<Arc<TileLayout>> {
        self.layout.read().clone()
    }

    /// Replaces the layout.
    pub fn configure(&self, layout: TileLayout) {
        log::debug!(
            "region `{}` configured with {} tile(s) starting at #{}",
            self.region,
            layout.tile_count(),
            layout.starting_tile()
        );
        *self.layout.write() = Some(Arc::new(layout));
    }

    /// Configures the converter from a pattern descriptor.
    ///
    /// On error the previous layout, if any, stays in place.
    pub fn configure_from_descriptor(
        &self,
        desc: &TiledPatternDescriptor,
    ) -> Result<(), ConfigError> {
        let layout = TileLayout::from_descriptor(desc).inspect_err(|err| self.log_rejected(err))?;
        self.configure(layout);
        Ok(())
    }

    /// Configures the converter for a region occupying part of a described block.
    ///
    /// See [`TileLayout::from_descriptor_clipped`].
    pub fn configure_clipped_from_descriptor(
        &self,
        desc: &TiledPatternDescriptor,
        origin: Point,
        width: f64,
        height: f64,
    ) -> Result<(), ConfigError> {
        let layout = TileLayout::from_descriptor_clipped(desc, origin, width, height)
            .inspect_err(|err| self.log_rejected(err))?;
        self.configure(layout);
        Ok(())
    }

    /// Derives a new layout from the current configuration.
    ///
    /// `edit` receives a builder seeded with the current layout, or a default
    /// builder when unconfigured. Reading the current layout, building the new
    /// one and storing it happen under one exclusive lock. On error the
    /// previous layout stays in place.
    pub fn reconfigure<F>(&self, edit: F) -> Result<(), ConfigError>
    where
        F: FnOnce(TileLayoutBuilder) -> TileLayoutBuilder,
    {
        let mut slot = self.layout.write();
        let current = slot
            .as_deref()
            .map_or_else(TileLayoutBuilder::new, TileLayout::to_builder);
        let layout = edit(current)
            .build()
            .inspect_err(|err| self.log_rejected(err))?;
        log::debug!("region `{}` reconfigured", self.region);
        *slot = Some(Arc::new(layout));
        Ok(())
    }

    /// Drops the layout, returning the converter to its unconfigured state.
    pub fn clear(&self) {
        *self.layout.write() = None;
    }

    /// Whether the point falls inside this region. Always `false` when unconfigured.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        self.layout
            .read()
            .as_ref()
            .is_some_and(|layout| layout.contains(pt))
    }

    /// Index of the tile containing the point, if the point is in this region.
    #[inline]
    pub fn tile_index(&self, pt: Point) -> Option<i32> {
        self.layout
            .read()
            .as_ref()
            .and_then(|layout| layout.tile_index(pt))
    }

    /// Converts the point into percentages of the region.
    pub fn relative_position(&self, pt: Point) -> Result<PercentPosition, QueryError> {
        match self.layout.read().as_ref() {
            Some(layout) => layout.relative_position(pt),
            None => Err(QueryError::Unconfigured(self.region.clone())),
        }
    }

    /// Area of the region in square dots, if configured.
    #[must_use]
    pub fn area(&self) -> Option<f64> {
        self.layout.read().as_ref().map(|layout| layout.area())
    }

    fn log_rejected(&self, err: &ConfigError) {
        log::warn!("region `{}`: tile layout rejected: {err}", self.region);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::PatternConverter;
    use crate::error::{ConfigError, QueryError};
    use crate::layout::TileLayout;

    fn unit_square() -> TileLayout {
        TileLayout::single_tile(Point::new(500.0, 500.0), 100.0, 100.0).unwrap()
    }

    #[test]
    fn unconfigured_converter_matches_nothing() {
        let conv = PatternConverter::new("margin");
        let pt = Point::new(0.0, 0.0);

        assert!(!conv.is_configured());
        assert!(!conv.contains(pt));
        assert_eq!(conv.tile_index(pt), None);
        assert_eq!(conv.area(), None);
        assert_eq!(
            conv.relative_position(pt),
            Err(QueryError::Unconfigured("margin".into()))
        );
    }

    #[test]
    fn configure_then_clear() {
        let conv = PatternConverter::new("canvas");
        conv.configure(unit_square());
        let pt = Point::new(525.0, 575.0);

        assert_eq!(conv.region_name(), "canvas");
        assert!(conv.contains(pt));
        assert_eq!(conv.tile_index(pt), Some(0));
        assert_eq!(conv.area(), Some(10_000.0));
        let pos = conv.relative_position(pt).unwrap();
        assert!((pos.x - 25.0).abs() < 1e-9 && (pos.y - 75.0).abs() < 1e-9);

        conv.clear();
        assert!(!conv.contains(pt));
    }

    #[test]
    fn reconfigure_keeps_old_layout_on_error() {
        let conv = PatternConverter::with_layout("canvas", unit_square());

        let err = conv
            .reconfigure(|builder| builder.total_size(0.0, 100.0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyExtent { .. }));
        assert_eq!(conv.layout().as_deref(), Some(&unit_square()));

        conv.reconfigure(|builder| builder.origin(0.0, 0.0).starting_tile(9))
            .unwrap();
        assert_eq!(conv.tile_index(Point::new(50.0, 50.0)), Some(9));
        assert!(!conv.contains(Point::new(550.0, 550.0)));
    }

    #[test]
    fn reconfigure_starts_from_defaults_when_unconfigured() {
        let conv = PatternConverter::new("late");
        conv.reconfigure(|builder| builder.tile_size(10.0, 10.0).total_size(10.0, 10.0))
            .unwrap();
        assert!(conv.contains(Point::new(5.0, 5.0)));
    }
}

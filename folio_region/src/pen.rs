// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// One position report from a streaming pen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenSample {
    /// Absolute position in pattern dots.
    pub position: Point,
    /// Time of the sample, in milliseconds since an arbitrary epoch.
    pub timestamp_ms: u64,
}

impl PenSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            position: Point::new(x, y),
            timestamp_ms,
        }
    }
}

/// Receives a pen's stroke lifecycle.
///
/// Every method defaults to doing nothing, so implementors only override
/// what they care about. A stroke is one `pen_down`, any number of `sample`
/// calls and one `pen_up`.
pub trait PenListener {
    /// The pen touched the paper.
    fn pen_down(&mut self, sample: &PenSample) {
        let _ = sample;
    }

    /// The pen moved while touching the paper.
    fn sample(&mut self, sample: &PenSample) {
        let _ = sample;
    }

    /// The pen left the paper.
    ///
    /// Pens typically report no meaningful position here.
    fn pen_up(&mut self, sample: &PenSample) {
        let _ = sample;
    }
}

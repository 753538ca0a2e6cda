use crate::aspects::types::{Aspect, AspectKind, AspectMode, ASPECT_TABLE};
use crate::ephemeris::types::Body;
use std::collections::BTreeMap;

/// Aspect calculator over the ten chart bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator {
    mode: AspectMode,
}

impl AspectCalculator {
    /// Create a calculator using the literal separation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: AspectMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> AspectMode {
        self.mode
    }

    /// Angular separation of two longitudes under the configured mode
    pub fn separation(&self, lon1: f64, lon2: f64) -> f64 {
        let raw_diff = (lon1 - lon2).abs();
        match self.mode {
            AspectMode::Literal => raw_diff,
            AspectMode::ShortestArc if raw_diff > 180.0 => 360.0 - raw_diff,
            AspectMode::ShortestArc => raw_diff,
        }
    }

    /// Every aspect kind whose tolerance window contains the separation, with its orb.
    ///
    /// Kinds are reported in table order and never deduplicated.
    pub fn matching_kinds(&self, lon1: f64, lon2: f64) -> Vec<(AspectKind, f64)> {
        let angle = self.separation(lon1, lon2);
        ASPECT_TABLE
            .iter()
            .filter_map(|def| {
                let orb = (angle - def.nominal_angle).abs();
                (orb <= def.tolerance).then_some((def.kind, orb))
            })
            .collect()
    }

    /// Scan every unordered body pair for aspects.
    ///
    /// Pairs are visited in body enumeration order (sun-moon, sun-mercury, ...),
    /// so the output order is stable for identical input.
    pub fn detect_aspects(&self, positions: &BTreeMap<Body, f64>) -> Vec<Aspect> {
        let entries: Vec<(Body, f64)> = positions.iter().map(|(b, lon)| (*b, *lon)).collect();

        let mut aspects = Vec::new();
        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let (body_a, lon_a) = entries[i];
                let (body_b, lon_b) = entries[j];
                for (kind, orb) in self.matching_kinds(lon_a, lon_b) {
                    aspects.push(Aspect {
                        body_a,
                        body_b,
                        kind,
                        orb,
                    });
                }
            }
        }

        log::trace!(
            "detected {} aspects over {} bodies ({:?})",
            aspects.len(),
            entries.len(),
            self.mode
        );
        aspects
    }
}

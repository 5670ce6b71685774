/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Point classification: which region of a binary system holds a point.
//!
//! # Invariants
//!
//! - **CLS-001**: Regions are tested in declaration order; the first container wins.
//!   Regions are closed, so a point on an edge shared by two regions goes to the one
//!   declared first.
//! - **CLS-002**: No clamping or range validation. Points off the diagram, or with
//!   non-finite coordinates, simply match nothing.
//! - **CLS-003**: A miss is the sentinel [`UNKNOWN_PHASE`], never an error.

use crate::geometry::PhasePoint;
use crate::system::{BinarySystem, PhaseRegion};

/// Label returned when no region contains the point.
pub const UNKNOWN_PHASE: &str = "Unknown Phase";

/// First region of `system` containing `point` (CLS-001).
pub fn locate(system: &BinarySystem, point: PhasePoint) -> Option<&PhaseRegion> {
    let hit = system.regions().iter().find(|region| region.contains(point));
    match hit {
        Some(region) => {
            tracing::trace!(
                temperature = point.temperature,
                composition = point.composition,
                label = region.label(),
                "point classified"
            );
        }
        None => {
            tracing::debug!(
                element_a = system.element_a(),
                element_b = system.element_b(),
                temperature = point.temperature,
                composition = point.composition,
                "point outside every region"
            );
        }
    }
    hit
}

/// Phase label at `(temperature, composition)`, or [`UNKNOWN_PHASE`].
///
/// ```rust
/// use alloy_phase_core::classifier::{classify, UNKNOWN_PHASE};
/// use alloy_phase_core::registry::SystemRegistry;
///
/// let registry = SystemRegistry::standard().unwrap();
/// let fe_c = registry.lookup("C", "Fe").unwrap();
/// assert_eq!(classify(fe_c, 600.0, 0.02), "Pearlite");
/// assert_eq!(classify(fe_c, 5000.0, 0.02), UNKNOWN_PHASE);
/// ```
pub fn classify(system: &BinarySystem, temperature: f64, composition: f64) -> &str {
    locate(system, PhasePoint::new(temperature, composition))
        .map_or(UNKNOWN_PHASE, PhaseRegion::label)
}

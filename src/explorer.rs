//! One-stop façade for the presentation layer: registry, catalog and predictor.

use crate::catalog::{PhaseCatalog, PhaseDescriptor};
use crate::classifier::{self, UNKNOWN_PHASE};
use crate::element::ElementSet;
use crate::error::CatalogError;
use crate::estimate::{estimate_properties, PropertyEstimate};
use crate::geometry::PhasePoint;
use crate::predictor::{PredictionResult, Predictor};
use crate::registry::SystemRegistry;
use crate::system::BinarySystem;

/// Everything the info panel shows for one diagram point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointReport<'a> {
    /// The system that was classified against.
    pub system: &'a BinarySystem,
    /// The queried point, unclamped.
    pub point: PhasePoint,
    /// Region label, or [`UNKNOWN_PHASE`].
    pub label: &'a str,
    /// Descriptor resolved from the label; the placeholder on a miss.
    pub descriptor: &'a PhaseDescriptor,
    /// Property estimate for the label at this point.
    pub estimate: PropertyEstimate,
}

impl PointReport<'_> {
    /// `true` when the point fell inside a region.
    pub fn is_known(&self) -> bool {
        self.label != UNKNOWN_PHASE
    }
}

/// Registry + predictor bundle.
///
/// ```rust
/// use alloy_phase_core::explorer::PhaseExplorer;
///
/// let explorer = PhaseExplorer::standard().unwrap();
/// let report = explorer.inspect("C", "Fe", 400.0, 0.001).unwrap();
/// assert_eq!(report.label, "Ferrite");
/// assert_eq!(report.descriptor.name, "Ferrite (α-Fe)");
/// assert!(explorer.inspect("Fe", "Ni", 400.0, 0.1).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PhaseExplorer<'a> {
    registry: SystemRegistry,
    predictor: Predictor<'a>,
}

impl<'a> PhaseExplorer<'a> {
    /// Bundle an existing registry and predictor.
    pub fn new(registry: SystemRegistry, predictor: Predictor<'a>) -> Self {
        Self { registry, predictor }
    }

    /// Binary systems known to this explorer.
    pub fn registry(&self) -> &SystemRegistry {
        &self.registry
    }

    /// Descriptor catalog shared by `inspect` and `predict`.
    pub fn phases(&self) -> PhaseCatalog<'a> {
        self.predictor.phases()
    }

    /// The underlying predictor.
    pub fn predictor(&self) -> &Predictor<'a> {
        &self.predictor
    }

    /// Classify a point on the `(element_a, element_b)` diagram.
    ///
    /// `None` when no system exists for the pair; classification is skipped.
    pub fn inspect(
        &self,
        element_a: &str,
        element_b: &str,
        temperature: f64,
        composition: f64,
    ) -> Option<PointReport<'_>> {
        let system = self.registry.lookup(element_a, element_b)?;
        let label = classifier::classify(system, temperature, composition);
        Some(PointReport {
            system,
            point: PhasePoint::new(temperature, composition),
            label,
            descriptor: self.phases().describe(label),
            estimate: estimate_properties(label, temperature, composition),
        })
    }

    /// Run the multi-element predictor.
    pub fn predict<I, S>(&self, elements: I, temperature: f64, composition_note: &str) -> PredictionResult<'a>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predictor.predict_set(ElementSet::new(elements), temperature, composition_note)
    }
}

impl PhaseExplorer<'static> {
    /// Compiled-in diagrams, phases and alloy systems.
    pub fn standard() -> Result<Self, CatalogError> {
        Ok(Self::new(SystemRegistry::standard()?, Predictor::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PhaseId;

    #[test]
    fn test_inspect_resolves_descriptor_and_estimate() {
        let explorer = PhaseExplorer::standard().expect("standard data");
        let report = explorer.inspect("Fe", "C", 1000.0, 0.02).expect("Fe-C exists");
        assert_eq!(report.label, "Austenite");
        assert_eq!(report.descriptor.id, PhaseId::Austenite);
        assert_eq!(report.estimate, PropertyEstimate::Solid { hardness: 202.0, strength: 404.0 });
        assert!(report.is_known());
    }

    #[test]
    fn test_inspect_outside_diagram() {
        let explorer = PhaseExplorer::standard().expect("standard data");
        let report = explorer.inspect("Fe", "C", 2000.0, 0.5).expect("Fe-C exists");
        assert_eq!(report.label, UNKNOWN_PHASE);
        assert_eq!(report.descriptor.id, PhaseId::Unknown);
        assert_eq!(report.estimate, PropertyEstimate::None);
        assert!(!report.is_known());
    }

    #[test]
    fn test_inspect_missing_pair_skips_classification() {
        let explorer = PhaseExplorer::standard().expect("standard data");
        assert!(explorer.inspect("Cu", "Ni", 500.0, 0.5).is_none());
    }

    #[test]
    fn test_predict_delegates() {
        let explorer = PhaseExplorer::standard().expect("standard data");
        let r = explorer.predict(["Ti", "V"], 900.0, "");
        assert_eq!(r.primary_phases.len(), 1);
        assert_eq!(r.primary_phases[0].id, PhaseId::Beta);
    }
}

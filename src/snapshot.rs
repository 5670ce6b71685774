//! Owned, serialisable records for transport to a presentation layer.
//!
//! - [`SystemSnapshot`]: full geometry of a [`BinarySystem`]. Converting back with
//!   [`SystemSnapshot::into_system`] re-runs builder validation, so a snapshot from an
//!   untrusted source can never produce an invalid system.
//! - [`PredictionRecord`]: a [`PredictionResult`] flattened to names and strings.
//!
//! Requires the `serde` feature. no_std + alloc compatible.
//!
//! ```rust
//! use alloy_phase_core::registry::SystemRegistry;
//! use alloy_phase_core::snapshot::SystemSnapshot;
//!
//! let registry = SystemRegistry::standard().unwrap();
//! let snapshot = SystemSnapshot::from_system(registry.lookup("Mg", "Zn").unwrap());
//! let json = serde_json::to_string(&snapshot).unwrap();
//! let restored: SystemSnapshot = serde_json::from_str(&json).unwrap();
//! assert_eq!(restored.into_system().unwrap().regions().len(), 3);
//! ```

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::CatalogError;
use crate::geometry::PhasePoint;
use crate::predictor::{PredictionResult, TemperatureBand};
use crate::system::BinarySystem;

/// One region of a [`SystemSnapshot`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct RegionRecord {
    /// Phase label.
    pub label: String,
    /// Polygon vertices in authored order.
    pub boundary: Vec<PhasePoint>,
    /// Label anchor.
    pub label_anchor: PhasePoint,
}

/// One boundary curve of a [`SystemSnapshot`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CurveRecord {
    /// Curve name.
    pub name: String,
    /// Polyline points.
    pub points: Vec<PhasePoint>,
}

/// Serialisable copy of a [`BinarySystem`].
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct SystemSnapshot {
    /// Solvent element.
    pub element_a: String,
    /// Solute element.
    pub element_b: String,
    /// Transformation family.
    pub system_type: String,
    /// Free-text description.
    pub description: String,
    /// Lower temperature bound, °C.
    pub min_temp: f64,
    /// Upper temperature bound, °C.
    pub max_temp: f64,
    /// Regions in classification order.
    pub regions: Vec<RegionRecord>,
    /// Display-only curves.
    pub boundary_curves: Vec<CurveRecord>,
}

impl SystemSnapshot {
    /// Capture a system's geometry and metadata.
    pub fn from_system(system: &BinarySystem) -> Self {
        Self {
            element_a: system.element_a().to_owned(),
            element_b: system.element_b().to_owned(),
            system_type: system.system_type().to_owned(),
            description: system.description().to_owned(),
            min_temp: system.min_temp(),
            max_temp: system.max_temp(),
            regions: system
                .regions()
                .iter()
                .map(|r| RegionRecord {
                    label: r.label().to_owned(),
                    boundary: r.boundary().to_vec(),
                    label_anchor: r.label_anchor(),
                })
                .collect(),
            boundary_curves: system
                .boundary_curves()
                .iter()
                .map(|c| CurveRecord { name: c.name().to_owned(), points: c.points().to_vec() })
                .collect(),
        }
    }

    /// Rebuild a validated [`BinarySystem`].
    pub fn into_system(self) -> Result<BinarySystem, CatalogError> {
        let mut builder = BinarySystem::builder(&self.element_a, &self.element_b)
            .system_type(self.system_type)
            .description(self.description)
            .temperature_range(self.min_temp, self.max_temp);
        for region in self.regions {
            builder = builder.region(region.label, region.boundary, region.label_anchor);
        }
        for curve in self.boundary_curves {
            builder = builder.curve(curve.name, curve.points);
        }
        builder.build()
    }
}

/// Serialisable copy of a [`PredictionResult`]. Phases are recorded by display name.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionRecord {
    /// Normalised element symbols.
    pub elements: Vec<String>,
    /// Primary phase names.
    pub primary_phases: Vec<String>,
    /// Secondary phase names.
    pub secondary_phases: Vec<String>,
    /// `"{T}°C"`.
    pub temperature_label: String,
    /// Caller note or generated label.
    pub composition_label: String,
    /// Temperature band.
    pub band: TemperatureBand,
    /// Microstructure sentence.
    pub microstructure: String,
    /// Aggregated properties.
    pub properties: Vec<String>,
    /// Aggregated applications.
    pub applications: Vec<String>,
    /// Description of the matched alloy system, if any.
    pub matched_system: Option<String>,
}

impl From<&PredictionResult<'_>> for PredictionRecord {
    fn from(r: &PredictionResult<'_>) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
        Self {
            elements: r.elements.symbols().map(str::to_owned).collect(),
            primary_phases: r.primary_phases.iter().map(|p| p.name.to_owned()).collect(),
            secondary_phases: r.secondary_phases.iter().map(|p| p.name.to_owned()).collect(),
            temperature_label: r.temperature_label.clone(),
            composition_label: r.composition_label.clone(),
            band: r.band,
            microstructure: r.microstructure_description.to_owned(),
            properties: owned(&r.properties),
            applications: owned(&r.applications),
            matched_system: r.matched_system.map(|a| a.description.to_owned()),
        }
    }
}

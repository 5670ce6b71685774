/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Binary systems: the authored geometry of a two-element phase diagram.
//!
//! A [`BinarySystem`] holds an ordered list of [`PhaseRegion`] polygons and a set
//! of display-only [`PhaseBoundaryCurve`]s. Systems are validated once by
//! [`BinarySystemBuilder::build`] and are immutable afterwards.
//!
//! # Invariants
//! - **SYS-001**: `min_temp < max_temp`, both finite.
//! - **SYS-002**: Every region has ≥ 3 vertices; every curve has ≥ 1 point.
//! - **SYS-003**: Every vertex, label anchor and curve point has composition in
//!   [0, 1] and temperature in `[min_temp, max_temp]`.
//! - **SYS-004**: Region order is preserved exactly as authored; it is the
//!   classifier's tie-break for overlapping regions.
//! - **SYS-005**: Overlap between regions is *not* validated.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use crate::element::element;
use crate::error::CatalogError;
use crate::geometry::{contains_point, on_boundary, PhasePoint};

/// A labelled polygon in (composition, temperature) space.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseRegion {
    label: String,
    boundary: Vec<PhasePoint>,
    label_anchor: PhasePoint,
}

impl PhaseRegion {
    /// Phase label shown on the diagram and returned by the classifier.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Polygon vertices in authored order; the last vertex connects to the first.
    pub fn boundary(&self) -> &[PhasePoint] {
        &self.boundary
    }

    /// Where the renderer should draw the label. Not guaranteed to lie inside the
    /// polygon.
    pub fn label_anchor(&self) -> PhasePoint {
        self.label_anchor
    }

    /// Closed containment: the ray-casting interior plus the polygon's own edges.
    ///
    /// A point on an edge shared by two regions is contained by both, so the
    /// classifier's declaration order decides it.
    pub fn contains(&self, point: PhasePoint) -> bool {
        contains_point(&self.boundary, point) || on_boundary(&self.boundary, point)
    }
}

/// A named reference line (liquidus, eutectoid, ...). Display only.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseBoundaryCurve {
    name: String,
    points: Vec<PhasePoint>,
}

impl PhaseBoundaryCurve {
    /// Curve name, e.g. `"Liquidus"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Polyline points in drawing order.
    pub fn points(&self) -> &[PhasePoint] {
        &self.points
    }
}

/// A two-element phase diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct BinarySystem {
    element_a: String,
    element_b: String,
    system_type: String,
    description: String,
    min_temp: f64,
    max_temp: f64,
    regions: Vec<PhaseRegion>,
    boundary_curves: Vec<PhaseBoundaryCurve>,
}

impl BinarySystem {
    /// Start building a system for `element_a`–`element_b`. Composition is the
    /// fraction of `element_b`.
    pub fn builder(element_a: &str, element_b: &str) -> BinarySystemBuilder {
        BinarySystemBuilder::new(element_a, element_b)
    }

    /// Solvent element symbol (composition 0).
    pub fn element_a(&self) -> &str {
        &self.element_a
    }

    /// Solute element symbol (composition 1).
    pub fn element_b(&self) -> &str {
        &self.element_b
    }

    /// Transformation family, e.g. `"Eutectic-Eutectoid"`.
    pub fn system_type(&self) -> &str {
        &self.system_type
    }

    /// Free-text description for the info panel.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lower temperature bound of the diagram, °C.
    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    /// Upper temperature bound of the diagram, °C.
    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    /// Regions in declaration order (SYS-004).
    pub fn regions(&self) -> &[PhaseRegion] {
        &self.regions
    }

    /// Display-only boundary curves.
    pub fn boundary_curves(&self) -> &[PhaseBoundaryCurve] {
        &self.boundary_curves
    }

    /// Clamp a user-supplied point into the diagram's axes:
    /// temperature to `[min_temp, max_temp]`, composition to [0, 1].
    ///
    /// For callers mapping slider or pointer input to a point. The classifier
    /// itself never clamps.
    pub fn clamp_point(&self, temperature: f64, composition: f64) -> PhasePoint {
        PhasePoint::new(
            temperature.clamp(self.min_temp, self.max_temp),
            composition.clamp(0.0, 1.0),
        )
    }

    fn in_bounds(&self, p: PhasePoint) -> bool {
        p.is_finite()
            && (0.0..=1.0).contains(&p.composition)
            && (self.min_temp..=self.max_temp).contains(&p.temperature)
    }
}

/// Builder for [`BinarySystem`]; [`build`](Self::build) validates SYS-001..003.
///
/// The temperature range defaults to 0–2000 °C.
///
/// ```rust
/// use alloy_phase_core::system::BinarySystem;
///
/// let system = BinarySystem::builder("Cu", "Ni")
///     .system_type("Isomorphous")
///     .temperature_range(0.0, 1500.0)
///     .region("Alpha", [(0.0, 0.0), (0.0, 1.0), (1000.0, 1.0), (1000.0, 0.0)], (500.0, 0.5))
///     .build()
///     .unwrap();
/// assert_eq!(system.regions().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct BinarySystemBuilder {
    system: BinarySystem,
}

impl BinarySystemBuilder {
    fn new(element_a: &str, element_b: &str) -> Self {
        Self {
            system: BinarySystem {
                element_a: element_a.to_owned(),
                element_b: element_b.to_owned(),
                system_type: String::new(),
                description: String::new(),
                min_temp: 0.0,
                max_temp: 2000.0,
                regions: Vec::new(),
                boundary_curves: Vec::new(),
            },
        }
    }

    /// Set the transformation family label.
    pub fn system_type(mut self, system_type: impl Into<String>) -> Self {
        self.system.system_type = system_type.into();
        self
    }

    /// Set the free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.system.description = description.into();
        self
    }

    /// Set the diagram's temperature axis, °C.
    pub fn temperature_range(mut self, min_temp: f64, max_temp: f64) -> Self {
        self.system.min_temp = min_temp;
        self.system.max_temp = max_temp;
        self
    }

    /// Append a region. Points are `(temperature, composition)` tuples or
    /// [`PhasePoint`]s. Declaration order is classification order.
    pub fn region<I, P>(mut self, label: impl Into<String>, boundary: I, anchor: impl Into<PhasePoint>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PhasePoint>,
    {
        self.system.regions.push(PhaseRegion {
            label: label.into(),
            boundary: boundary.into_iter().map(Into::into).collect(),
            label_anchor: anchor.into(),
        });
        self
    }

    /// Append a display-only boundary curve.
    pub fn curve<I, P>(mut self, name: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PhasePoint>,
    {
        self.system.boundary_curves.push(PhaseBoundaryCurve {
            name: name.into(),
            points: points.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Validate and freeze the system.
    pub fn build(self) -> Result<BinarySystem, CatalogError> {
        let s = self.system;

        for symbol in [&s.element_a, &s.element_b] {
            if element(symbol).is_none() {
                return Err(CatalogError::UnknownElement(symbol.clone()));
            }
        }
        if s.element_a == s.element_b {
            return Err(CatalogError::IdenticalElements(s.element_a.clone()));
        }

        // SYS-001
        if !(s.min_temp.is_finite() && s.max_temp.is_finite() && s.min_temp < s.max_temp) {
            return Err(CatalogError::InvalidTemperatureRange { min: s.min_temp, max: s.max_temp });
        }

        for region in &s.regions {
            // SYS-002
            if region.boundary.len() < 3 {
                return Err(CatalogError::TooFewVertices {
                    label: region.label.clone(),
                    count: region.boundary.len(),
                });
            }
            // SYS-003
            let stray = region
                .boundary
                .iter()
                .chain(core::iter::once(&region.label_anchor))
                .find(|p| !s.in_bounds(**p));
            if let Some(p) = stray {
                return Err(out_of_bounds(&region.label, *p));
            }
        }

        for curve in &s.boundary_curves {
            if curve.points.is_empty() {
                return Err(CatalogError::EmptyCurve { name: curve.name.clone() });
            }
            if let Some(p) = curve.points.iter().find(|p| !s.in_bounds(**p)) {
                return Err(out_of_bounds(&curve.name, *p));
            }
        }

        Ok(s)
    }
}

fn out_of_bounds(owner: &str, p: PhasePoint) -> CatalogError {
    CatalogError::PointOutOfBounds {
        owner: owner.to_owned(),
        temperature: p.temperature,
        composition: p.composition,
    }
}

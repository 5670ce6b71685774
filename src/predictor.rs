//! Multi-element phase prediction.
//!
//! ```text
//!   elements ──► ElementSet ──┬─► exact alloy-system match ──┐
//!                             └─► heuristic rules (fold) ────┤
//!                                                            ▼
//!                                            temperature-band filter
//!                                                            │
//!                          σ window ──► secondary      Mg+Zn ──► Laves
//!                                                            ▼
//!                                    properties / applications / labels
//! ```
//!
//! # Invariants
//! - **PRD-001**: `predict` is a pure function of its inputs and the injected
//!   catalogs. Equal inputs yield equal results.
//! - **PRD-002**: Every output list is in first-seen order and duplicate-free.
//! - **PRD-003**: An empty result is still well formed: labels and microstructure
//!   text are always filled.
//! - **PRD-004**: Band matching on temperature-window text is case-sensitive
//!   (`"high"`, `"Below"`).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{PhaseCatalog, PhaseDescriptor, PhaseId};
use crate::data;
use crate::element::ElementSet;
use crate::rules::{ApplicationHint, PhaseRule, APPLICATION_HINTS, HEURISTIC_RULES};

/// Temperature used when the caller does not supply one, °C.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;

// ─── Alloy systems ───────────────────────────────────────────────────────────

/// A known multi-element system and the phases it typically shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlloySystem {
    /// Member element symbols. Matching ignores order.
    pub elements: &'static [&'static str],
    /// Seed phases for the primary list.
    pub phases: &'static [PhaseId],
    /// One-line description.
    pub description: &'static str,
}

// ─── Configuration ───────────────────────────────────────────────────────────

/// Thresholds for the temperature bands and the σ window.
///
/// Defaults:
/// - high band: above 1000 °C
/// - intermediate band: above 500 °C up to and including 1000 °C
/// - σ forms strictly between 600 °C and 1000 °C
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictorConfig {
    /// Temperatures strictly above this are [`TemperatureBand::High`].
    pub high_band_above: f64,
    /// Temperatures strictly above this (and not high) are [`TemperatureBand::Intermediate`].
    pub intermediate_band_above: f64,
    /// Open interval `(lo, hi)` in which Fe+Cr gains a σ secondary phase.
    pub sigma_window: (f64, f64),
}

impl PredictorConfig {
    /// Construct the default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            high_band_above: 1000.0,
            intermediate_band_above: 500.0,
            sigma_window: (600.0, 1000.0),
        }
    }
}

// ─── Temperature band ────────────────────────────────────────────────────────

/// Coarse temperature classification driving the primary-phase filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TemperatureBand {
    /// Above the high threshold: only high-temperature phases survive.
    High,
    /// Between the thresholds: martensite and low-temperature phases are dropped.
    Intermediate,
    /// At or below the intermediate threshold: no filtering.
    Ambient,
}

impl TemperatureBand {
    /// Band for `temperature` under `config`. NaN falls into `Ambient`.
    pub fn from_temperature(temperature: f64, config: &PredictorConfig) -> Self {
        if temperature > config.high_band_above {
            TemperatureBand::High
        } else if temperature > config.intermediate_band_above {
            TemperatureBand::Intermediate
        } else {
            TemperatureBand::Ambient
        }
    }

    /// Microstructure sentence shown with a prediction.
    pub fn microstructure(&self) -> &'static str {
        match self {
            TemperatureBand::High => "High-temperature phases with coarse grain structure",
            TemperatureBand::Intermediate => {
                "Mixed phase structure with intermediate temperature phases"
            }
            TemperatureBand::Ambient => "Fine-grained structure with room temperature stable phases",
        }
    }

    /// Whether a primary phase survives this band's filter (PRD-004).
    pub fn admits(&self, phase: &PhaseDescriptor) -> bool {
        let window = phase.temperature_window.unwrap_or("");
        match self {
            TemperatureBand::High => {
                ["Austenite", "Beta", "Gamma Prime"].iter().any(|n| phase.name.contains(n))
                    || window.contains("high")
            }
            TemperatureBand::Intermediate => {
                !phase.name.contains("Martensite") && !window.contains("Below")
            }
            TemperatureBand::Ambient => true,
        }
    }

    /// Kebab-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::High => "high",
            TemperatureBand::Intermediate => "intermediate",
            TemperatureBand::Ambient => "ambient",
        }
    }
}

// ─── Prediction result ───────────────────────────────────────────────────────

/// Structured outcome of [`Predictor::predict`]. Borrows descriptors from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult<'a> {
    /// Normalised query.
    pub elements: ElementSet,
    /// Phases expected to dominate, after band filtering.
    pub primary_phases: Vec<&'a PhaseDescriptor>,
    /// Minor phases, currently σ only.
    pub secondary_phases: Vec<&'a PhaseDescriptor>,
    /// `"{T}°C"`.
    pub temperature_label: String,
    /// Caller note, or a generated label such as `"C-Fe binary alloy"`.
    pub composition_label: String,
    /// Band the temperature fell into.
    pub band: TemperatureBand,
    /// Sentence matching [`band`](Self::band).
    pub microstructure_description: &'static str,
    /// Union of primary and secondary phase properties, first-seen order.
    pub properties: Vec<&'a str>,
    /// Element hints followed by primary phases' `common_in`, first-seen order.
    pub applications: Vec<&'a str>,
    /// The alloy system that seeded the primary list, if any.
    pub matched_system: Option<&'a AlloySystem>,
}

// ─── Predictor ───────────────────────────────────────────────────────────────

/// Rule-based predictor over injected catalogs.
///
/// ```rust
/// use alloy_phase_core::predictor::{Predictor, TemperatureBand};
///
/// let predictor = Predictor::standard();
/// let result = predictor.predict(["Fe"], 1100.0, "");
/// assert_eq!(result.band, TemperatureBand::High);
/// assert_eq!(result.primary_phases[0].name, "Austenite (γ-Fe)");
/// ```
#[derive(Clone, Debug)]
pub struct Predictor<'a> {
    phases: PhaseCatalog<'a>,
    alloys: &'a [AlloySystem],
    rules: &'a [PhaseRule],
    hints: &'a [ApplicationHint],
    config: PredictorConfig,
}

impl<'a> Predictor<'a> {
    /// Predictor over the given catalogs with the standard rules and hints.
    pub fn new(phases: PhaseCatalog<'a>, alloys: &'a [AlloySystem], config: PredictorConfig) -> Self {
        Self {
            phases,
            alloys,
            rules: HEURISTIC_RULES,
            hints: APPLICATION_HINTS,
            config,
        }
    }

    /// Replace the heuristic rule table.
    pub fn with_rules(mut self, rules: &'a [PhaseRule]) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the application hint table.
    pub fn with_hints(mut self, hints: &'a [ApplicationHint]) -> Self {
        self.hints = hints;
        self
    }

    /// The phase catalog this predictor resolves ids against.
    pub fn phases(&self) -> PhaseCatalog<'a> {
        self.phases
    }

    /// Active configuration.
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Alloy system whose element set equals `elements` exactly.
    pub fn matching_system(&self, elements: &ElementSet) -> Option<&'a AlloySystem> {
        self.alloys.iter().find(|a| elements.matches(a.elements))
    }

    /// Predict phases for an unordered element collection.
    ///
    /// `composition_note` replaces the generated composition label when non-empty.
    pub fn predict<I, S>(&self, elements: I, temperature: f64, composition_note: &str) -> PredictionResult<'a>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predict_set(ElementSet::new(elements), temperature, composition_note)
    }

    /// [`predict`](Self::predict) for an already normalised set.
    ///
    /// Phase lists never repeat a phase (PRD-002). In particular Mg + Zn with a
    /// matched Mg-Zn system yields a single Laves entry, not the system's Laves
    /// followed by the Mg + Zn augmentation's copy.
    pub fn predict_set(&self, elements: ElementSet, temperature: f64, composition_note: &str) -> PredictionResult<'a> {
        let matched_system = self.matching_system(&elements);

        let mut primary: Vec<&'a PhaseDescriptor> = Vec::new();
        match matched_system {
            Some(system) => extend_ids(&mut primary, &self.phases, system.phases),
            None => {
                for rule in self.rules {
                    extend_ids(&mut primary, &self.phases, rule.evaluate(&elements, temperature));
                }
            }
        }

        let band = TemperatureBand::from_temperature(temperature, &self.config);
        primary.retain(|p| band.admits(p));

        let mut secondary: Vec<&'a PhaseDescriptor> = Vec::new();
        let (sigma_lo, sigma_hi) = self.config.sigma_window;
        if elements.contains_all(&["Cr", "Fe"]) && temperature > sigma_lo && temperature < sigma_hi {
            extend_ids(&mut secondary, &self.phases, &[PhaseId::Sigma]);
        }
        if elements.contains_all(&["Mg", "Zn"]) {
            extend_ids(&mut primary, &self.phases, &[PhaseId::Laves]);
        }

        let mut properties: Vec<&'a str> = Vec::new();
        for phase in primary.iter().chain(secondary.iter()) {
            push_unique(&mut properties, phase.properties);
        }

        let mut applications: Vec<&'a str> = Vec::new();
        for hint in self.hints.iter().filter(|h| (h.applies)(&elements)) {
            push_unique(&mut applications, hint.applications);
        }
        for phase in &primary {
            push_unique(&mut applications, phase.common_in);
        }

        let composition_label = if composition_note.is_empty() {
            composition_label(&elements)
        } else {
            String::from(composition_note)
        };

        tracing::debug!(
            elements = elements.len(),
            temperature,
            band = band.as_str(),
            matched = matched_system.is_some(),
            primary = primary.len(),
            secondary = secondary.len(),
            "phase prediction"
        );

        PredictionResult {
            elements,
            primary_phases: primary,
            secondary_phases: secondary,
            temperature_label: format!("{}°C", temperature),
            composition_label,
            band,
            microstructure_description: band.microstructure(),
            properties,
            applications,
            matched_system,
        }
    }
}

impl Predictor<'static> {
    /// Predictor over the compiled-in phases, alloy systems, rules and hints.
    pub fn standard() -> Self {
        Predictor::new(PhaseCatalog::standard(), data::ALLOY_SYSTEMS, PredictorConfig::default())
    }
}

/// Generated composition label for a normalised element set.
///
/// Two elements give `"A-B binary alloy"`, three give `"A-B-C ternary alloy"`,
/// anything else `"Multi-component alloy with N elements"`.
pub fn composition_label(elements: &ElementSet) -> String {
    let s: Vec<&str> = elements.symbols().collect();
    match s.as_slice() {
        [a, b] => format!("{}-{} binary alloy", a, b),
        [a, b, c] => format!("{}-{}-{} ternary alloy", a, b, c),
        _ => format!("Multi-component alloy with {} elements", s.len()),
    }
}

/// Append catalog descriptors for `ids`, skipping ids the catalog lacks and
/// phases already present (PRD-002).
fn extend_ids<'a>(out: &mut Vec<&'a PhaseDescriptor>, catalog: &PhaseCatalog<'a>, ids: &[PhaseId]) {
    for &id in ids {
        match catalog.get(id) {
            Some(d) if !out.iter().any(|p| p.id == id) => out.push(d),
            Some(_) => {}
            None => tracing::debug!(?id, "phase id missing from catalog"),
        }
    }
}

fn push_unique<'a>(out: &mut Vec<&'a str>, items: &'a [&'a str]) {
    for &item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(phases: &[&'a PhaseDescriptor]) -> Vec<&'a str> {
        phases.iter().map(|p| p.name).collect()
    }

    // ─── Bands ───────────────────────────────────────────────────────────────

    #[test]
    fn test_band_thresholds_are_exclusive() {
        let cfg = PredictorConfig::default();
        assert_eq!(TemperatureBand::from_temperature(1000.5, &cfg), TemperatureBand::High);
        assert_eq!(TemperatureBand::from_temperature(1000.0, &cfg), TemperatureBand::Intermediate);
        assert_eq!(TemperatureBand::from_temperature(500.0, &cfg), TemperatureBand::Ambient);
        assert_eq!(TemperatureBand::from_temperature(f64::NAN, &cfg), TemperatureBand::Ambient);
    }

    #[test]
    fn test_custom_band_thresholds() {
        let cfg = PredictorConfig { high_band_above: 800.0, ..PredictorConfig::default() };
        assert_eq!(TemperatureBand::from_temperature(900.0, &cfg), TemperatureBand::High);
    }

    #[test]
    fn test_window_text_match_is_case_sensitive() {
        let catalog = PhaseCatalog::standard();
        let laves = catalog.get(PhaseId::Laves).expect("laves");
        let cementite = catalog.get(PhaseId::Cementite).expect("cementite");
        // "High temperature stable" has no lower-case "high".
        assert!(!TemperatureBand::High.admits(laves));
        // "Stable below 727°C" has no capitalised "Below".
        assert!(TemperatureBand::Intermediate.admits(cementite));
    }

    // ─── Predictions ─────────────────────────────────────────────────────────

    #[test]
    fn test_pure_iron_high_band() {
        let r = Predictor::standard().predict(["Fe"], 1100.0, "");
        assert_eq!(names(&r.primary_phases), ["Austenite (γ-Fe)"]);
        assert_eq!(r.microstructure_description, "High-temperature phases with coarse grain structure");
        assert_eq!(r.composition_label, "Multi-component alloy with 1 elements");
        assert_eq!(r.temperature_label, "1100°C");
        assert!(r.matched_system.is_none());
    }

    #[test]
    fn test_iron_carbon_ambient_keeps_system_order() {
        let r = Predictor::standard().predict(["Fe", "C"], DEFAULT_TEMPERATURE, "");
        assert_eq!(
            names(&r.primary_phases),
            ["Austenite (γ-Fe)", "Ferrite (α-Fe)", "Martensite", "Cementite (Fe₃C)", "Pearlite", "Bainite"]
        );
        assert_eq!(r.composition_label, "C-Fe binary alloy");
        assert_eq!(r.temperature_label, "25°C");
        assert_eq!(r.band, TemperatureBand::Ambient);
        assert_eq!(r.microstructure_description, "Fine-grained structure with room temperature stable phases");
        assert_eq!(
            &r.applications[..3],
            ["Structural steel", "Automotive components", "Construction materials"]
        );
    }

    #[test]
    fn test_iron_carbon_intermediate_drops_martensite_and_ferrite() {
        let r = Predictor::standard().predict(["C", "Fe"], 800.0, "");
        assert_eq!(
            names(&r.primary_phases),
            ["Austenite (γ-Fe)", "Cementite (Fe₃C)", "Pearlite", "Bainite"]
        );
        assert_eq!(r.band, TemperatureBand::Intermediate);
        assert_eq!(r.microstructure_description, "Mixed phase structure with intermediate temperature phases");
    }

    #[test]
    fn test_sigma_window_is_open() {
        let p = Predictor::standard();
        assert_eq!(names(&p.predict(["Fe", "Cr"], 800.0, "").secondary_phases), ["Sigma Phase (σ)"]);
        assert!(p.predict(["Fe", "Cr"], 600.0, "").secondary_phases.is_empty());
        assert!(p.predict(["Fe", "Cr"], 1000.0, "").secondary_phases.is_empty());
        assert!(p.predict(["Fe", "Cr"], 1100.0, "").secondary_phases.is_empty());
    }

    #[test]
    fn test_laves_not_duplicated() {
        let p = Predictor::standard();
        for t in [25.0, 1100.0] {
            assert_eq!(names(&p.predict(["Mg", "Zn"], t, "").primary_phases), ["Laves Phase"]);
        }
    }

    #[test]
    fn test_properties_are_deduplicated() {
        let r = Predictor::standard().predict(["Fe", "Cr", "Ni"], 800.0, "");
        assert_eq!(names(&r.primary_phases), ["Austenite (γ-Fe)", "Sigma Phase (σ)"]);
        assert_eq!(names(&r.secondary_phases), ["Sigma Phase (σ)"]);
        let count = r.properties.iter().filter(|p| **p == "Extremely brittle").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_note_overrides_composition_label() {
        let r = Predictor::standard().predict(["Fe", "C"], 25.0, "Fe-0.4C");
        assert_eq!(r.composition_label, "Fe-0.4C");
    }

    #[test]
    fn test_composition_label_shapes() {
        assert_eq!(composition_label(&ElementSet::new(["Ti", "Al", "Ni"])), "Al-Ni-Ti ternary alloy");
        assert_eq!(composition_label(&ElementSet::default()), "Multi-component alloy with 0 elements");
        assert_eq!(
            composition_label(&ElementSet::new(["Fe", "Cr", "Ni", "Mo"])),
            "Multi-component alloy with 4 elements"
        );
    }

    #[test]
    fn test_no_match_no_rule_is_well_formed() {
        let r = Predictor::standard().predict(["Cu", "Zn"], 300.0, "");
        assert!(r.primary_phases.is_empty());
        assert!(r.secondary_phases.is_empty());
        assert!(r.properties.is_empty());
        assert!(r.applications.is_empty());
        assert_eq!(r.composition_label, "Cu-Zn binary alloy");
        assert_eq!(r.band, TemperatureBand::Ambient);
    }

    #[test]
    fn test_injected_empty_catalogs() {
        let phases = PhaseCatalog::new(&[], &[]);
        let p = Predictor::new(phases, &[], PredictorConfig::default()).with_rules(&[]).with_hints(&[]);
        let r = p.predict(["Fe", "C"], 25.0, "");
        assert!(r.primary_phases.is_empty());
        assert!(r.applications.is_empty());
    }

    #[test]
    fn test_predict_is_idempotent() {
        let p = Predictor::standard();
        assert_eq!(p.predict(["Ni", "Ti"], 25.0, ""), p.predict(["Ti", "Ni"], 25.0, ""));
    }
}

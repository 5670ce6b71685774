//! Heuristic phase rules and per-element application hints.
//!
//! Each rule is a pure predicate over `(elements, temperature)` paired with the
//! phases it contributes. Rules are independent; the predictor folds every rule that
//! fires, in table order, into the primary phase list.
//!
//! # Invariants
//! - **RUL-001**: Rules never observe each other's output.
//! - **RUL-002**: Table order is output order.

use core::cmp::Ordering;

use crate::catalog::PhaseId;
use crate::element::ElementSet;

/// α → γ transformation temperature of pure iron, °C.
pub const IRON_A3: f64 = 912.0;

/// α → β transus of pure titanium, °C.
pub const TITANIUM_BETA_TRANSUS: f64 = 882.0;

/// `true` when `t` is strictly above `threshold`. NaN is never above.
fn above(t: f64, threshold: f64) -> bool {
    matches!(t.partial_cmp(&threshold), Some(Ordering::Greater))
}

/// One heuristic: a predicate and the phases it yields when it fires.
#[derive(Clone, Copy, Debug)]
pub struct PhaseRule {
    /// Short identifier used in logs and tests.
    pub name: &'static str,
    /// Fires when this returns `true`.
    pub applies: fn(&ElementSet, f64) -> bool,
    /// Phases contributed, in order.
    pub phases: &'static [PhaseId],
}

impl PhaseRule {
    /// Phases this rule contributes for the query; empty when it does not fire.
    pub fn evaluate(&self, elements: &ElementSet, temperature: f64) -> &'static [PhaseId] {
        if (self.applies)(elements, temperature) {
            tracing::trace!(rule = self.name, temperature, "heuristic rule fired");
            self.phases
        } else {
            &[]
        }
    }
}

/// The standard heuristic cascade for element sets with no matching alloy system.
pub static HEURISTIC_RULES: &[PhaseRule] = &[
    PhaseRule {
        name: "iron-austenite",
        applies: |e, t| e.contains("Fe") && above(t, IRON_A3),
        phases: &[PhaseId::Austenite],
    },
    PhaseRule {
        name: "iron-ferrite",
        applies: |e, t| e.contains("Fe") && !above(t, IRON_A3),
        phases: &[PhaseId::Ferrite],
    },
    PhaseRule {
        name: "iron-carbon-cementite",
        applies: |e, _| e.contains_all(&["Fe", "C"]),
        phases: &[PhaseId::Cementite],
    },
    PhaseRule {
        name: "titanium-beta",
        applies: |e, t| e.contains("Ti") && above(t, TITANIUM_BETA_TRANSUS),
        phases: &[PhaseId::Beta],
    },
    PhaseRule {
        name: "titanium-alpha",
        applies: |e, t| e.contains("Ti") && !above(t, TITANIUM_BETA_TRANSUS),
        phases: &[PhaseId::Alpha],
    },
    PhaseRule {
        name: "nickel-gamma-prime",
        applies: |e, _| e.contains("Ni") && e.contains_any(&["Al", "Ti"]),
        phases: &[PhaseId::GammaPrime],
    },
];

/// Application strings contributed by element presence alone.
#[derive(Clone, Copy, Debug)]
pub struct ApplicationHint {
    /// Short identifier used in tests.
    pub name: &'static str,
    /// Fires when this returns `true`.
    pub applies: fn(&ElementSet) -> bool,
    /// Applications contributed, in order.
    pub applications: &'static [&'static str],
}

/// Standard element hints, applied before any phase's own applications.
pub static APPLICATION_HINTS: &[ApplicationHint] = &[
    ApplicationHint {
        name: "titanium",
        applies: |e| e.contains("Ti"),
        applications: &["Aerospace components", "Biomedical implants", "Chemical processing equipment"],
    },
    ApplicationHint {
        name: "nickel-chromium",
        applies: |e| e.contains_all(&["Ni", "Cr"]),
        applications: &["Gas turbine engines", "Nuclear reactors", "High-temperature furnaces"],
    },
    ApplicationHint {
        name: "iron-carbon",
        applies: |e| e.contains_all(&["Fe", "C"]),
        applications: &["Structural steel", "Automotive components", "Construction materials"],
    },
    ApplicationHint {
        name: "aluminum",
        applies: |e| e.contains("Al"),
        applications: &["Lightweight structures", "Transportation industry", "Packaging materials"],
    },
];

//! # Fe-C Walkthrough
//!
//! Cools a 2 wt% carbon alloy from the melt down to room temperature on the
//! built-in Fe-C diagram, then asks the predictor what a few alloy families should
//! look like at service temperature.
//!
//! Run with: `cargo run --example fe_c_walkthrough`

use alloy_phase_core::estimate::PropertyEstimate;
use alloy_phase_core::explorer::PhaseExplorer;
use alloy_phase_core::CatalogError;

// ── Cooling path ─────────────────────────────────────────────────────────────

const CARBON: f64 = 0.02;
const COOLING_PATH: [f64; 8] = [1580.0, 1400.0, 1200.0, 1000.0, 800.0, 700.0, 400.0, 25.0];

fn cool(explorer: &PhaseExplorer<'_>) {
    println!("── Cooling Fe-{CARBON} C ──────────────────────────────────────────");
    let mut previous = "";
    for t in COOLING_PATH {
        let Some(report) = explorer.inspect("Fe", "C", t, CARBON) else {
            println!("no Fe-C diagram registered");
            return;
        };
        let marker = if report.label != previous { "→" } else { " " };
        previous = report.label;

        let estimate = match report.estimate {
            PropertyEstimate::Liquid { density, viscosity } => {
                format!("density {density:.3}, viscosity {viscosity:.4}")
            }
            PropertyEstimate::Solid { hardness, strength } => {
                format!("{hardness:.0} HV, {strength:.0} MPa")
            }
            PropertyEstimate::None => String::from("no model"),
        };
        println!(
            "{marker} {t:>6.0}°C  {:<12} {:<28} {}",
            report.label, report.descriptor.structure, estimate
        );
    }
    println!();
}

// ── Predictions ──────────────────────────────────────────────────────────────

fn predict(explorer: &PhaseExplorer<'_>) {
    let queries: [(&[&str], f64); 4] = [
        (&["Fe", "C"], 25.0),
        (&["Fe", "Cr", "Ni"], 800.0),
        (&["Ni", "Al", "Ti"], 1100.0),
        (&["Mg", "Zn"], 25.0),
    ];
    for (elements, t) in queries {
        let r = explorer.predict(elements.iter().copied(), t, "");
        println!("── {} at {} ──", r.composition_label, r.temperature_label);
        println!("   {}", r.microstructure_description);
        let primary: Vec<&str> = r.primary_phases.iter().map(|p| p.name).collect();
        println!("   primary:   {}", primary.join(", "));
        if !r.secondary_phases.is_empty() {
            let secondary: Vec<&str> = r.secondary_phases.iter().map(|p| p.name).collect();
            println!("   secondary: {}", secondary.join(", "));
        }
        println!("   uses:      {}", r.applications.iter().take(4).copied().collect::<Vec<_>>().join(", "));
        println!();
    }
}

fn main() -> Result<(), CatalogError> {
    let explorer = PhaseExplorer::standard()?;

    let pairs: Vec<String> = explorer.registry().pairs().map(|(a, b)| format!("{a}-{b}")).collect();
    println!("Diagrams: {}\n", pairs.join(", "));

    cool(&explorer);
    predict(&explorer);
    Ok(())
}

//! Integration tests for the built-in binary diagrams: registry lookup,
//! point classification and descriptor resolution working together.

use alloy_phase_core::catalog::{PhaseCatalog, PhaseId};
use alloy_phase_core::classifier::{classify, UNKNOWN_PHASE};
use alloy_phase_core::registry::SystemRegistry;
use alloy_phase_core::system::BinarySystem;

// ─── helpers ─────────────────────────────────────────────────────────────────

fn registry() -> SystemRegistry {
    SystemRegistry::standard().expect("built-in diagrams are valid")
}

fn system<'r>(registry: &'r SystemRegistry, a: &str, b: &str) -> &'r BinarySystem {
    registry.lookup(a, b).expect("pair is registered")
}

// ─── Fe-C ────────────────────────────────────────────────────────────────────

#[test]
fn test_fe_c_pearlite_point() {
    let r = registry();
    assert_eq!(classify(system(&r, "Fe", "C"), 600.0, 0.02), "Pearlite");
}

#[test]
fn test_fe_c_ferrite_point() {
    let r = registry();
    assert_eq!(classify(system(&r, "Fe", "C"), 400.0, 0.001), "Ferrite");
}

#[test]
fn test_fe_c_other_fields() {
    let r = registry();
    let fe_c = system(&r, "Fe", "C");
    assert_eq!(classify(fe_c, 1000.0, 0.02), "Austenite");
    assert_eq!(classify(fe_c, 1550.0, 0.03), "Liquid");
    assert_eq!(classify(fe_c, 400.0, 0.08), "Cementite");
}

#[test]
fn test_fe_c_off_diagram_is_unknown() {
    let r = registry();
    let fe_c = system(&r, "Fe", "C");
    assert_eq!(classify(fe_c, 2000.0, 0.5), UNKNOWN_PHASE);
    assert_eq!(classify(fe_c, -50.0, 0.02), UNKNOWN_PHASE);
}

// ─── Other systems ───────────────────────────────────────────────────────────

#[test]
fn test_ti_al_beta_transus() {
    let r = registry();
    let ti_al = system(&r, "Al", "Ti");
    assert_eq!(classify(ti_al, 400.0, 0.05), "Alpha");
    assert_eq!(classify(ti_al, 1200.0, 0.05), "Beta");
}

#[test]
fn test_brass_beta_field() {
    let r = registry();
    assert_eq!(classify(system(&r, "Cu", "Zn"), 500.0, 0.5), "Beta (β)");
}

#[test]
fn test_mg_zn_laves_field() {
    let r = registry();
    assert_eq!(classify(system(&r, "Zn", "Mg"), 150.0, 0.4), "Laves (MgZn₂)");
}

#[test]
fn test_ni_al_gamma_prime_and_its_anchor() {
    let r = registry();
    let ni_al = system(&r, "Ni", "Al");
    assert_eq!(classify(ni_al, 800.0, 0.45), "Gamma Prime (γ')");
    // The label anchor sits left of the slanted lower edge.
    assert_eq!(classify(ni_al, 800.0, 0.37), UNKNOWN_PHASE);
}

// ─── Registry ────────────────────────────────────────────────────────────────

#[test]
fn test_lookup_symmetry_returns_same_record() {
    let r = registry();
    let a = r.lookup("C", "Fe").expect("reverse");
    let b = r.lookup("Fe", "C").expect("forward");
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_missing_pair_skips_classification() {
    let r = registry();
    assert!(r.lookup("Fe", "Cr").is_none());
    assert!(r.lookup("Ti", "V").is_none());
}

// ─── Catalog coverage ────────────────────────────────────────────────────────

#[test]
fn test_every_builtin_label_has_a_descriptor() {
    let r = registry();
    let catalog = PhaseCatalog::standard();
    for system in r.iter() {
        for region in system.regions() {
            let d = catalog.describe(region.label());
            assert_ne!(
                d.id,
                PhaseId::Unknown,
                "{}-{} label {:?} has no descriptor",
                system.element_a(),
                system.element_b(),
                region.label()
            );
        }
    }
}

#[test]
fn test_builtin_labels_resolve_to_expected_ids() {
    let catalog = PhaseCatalog::standard();
    let cases = [
        ("Liquid", PhaseId::Liquid),
        ("TiAl", PhaseId::TitaniumAluminide),
        ("Alpha", PhaseId::GenericAlpha),
        ("Beta", PhaseId::GenericBeta),
        ("Alpha (α)", PhaseId::GenericAlpha),
        ("Beta (β)", PhaseId::GenericBeta),
        ("Gamma (γ)", PhaseId::Gamma),
        ("Gamma Prime (γ')", PhaseId::GammaPrime),
        ("Alpha (Mg)", PhaseId::GenericAlpha),
        ("Laves (MgZn₂)", PhaseId::Laves),
    ];
    for (label, id) in cases {
        assert_eq!(catalog.describe(label).id, id, "{label}");
    }
}

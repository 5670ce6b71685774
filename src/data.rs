//! Compiled-in reference data: phase descriptors, alias table, alloy systems and
//! the five built-in binary diagrams.
//!
//! Nothing here is loaded at runtime. The tables are read-only statics; binary
//! systems are assembled through [`BinarySystem::builder`] so that the reference
//! geometry is validated exactly like user-supplied geometry.
//!
//! Region order inside each diagram matters: the classifier returns the first
//! region that contains a point.

use alloc::vec;
use alloc::vec::Vec;

use crate::catalog::{PhaseAlias, PhaseDescriptor, PhaseId, PhaseKind};
use crate::error::CatalogError;
use crate::predictor::AlloySystem;
use crate::system::BinarySystem;

// ─── Phase descriptors ───────────────────────────────────────────────────────

/// Descriptor table behind [`PhaseCatalog::standard`](crate::catalog::PhaseCatalog::standard).
pub static PHASES: &[PhaseDescriptor] = &[
    PhaseDescriptor {
        id: PhaseId::Austenite,
        name: "Austenite (γ-Fe)",
        kind: PhaseKind::SolidSolution,
        structure: "Face-Centered Cubic (FCC)",
        description: "High-temperature phase of iron and iron-carbon alloys with excellent ductility and formability.",
        properties: &["High ductility", "Non-magnetic", "Good corrosion resistance", "High strength at elevated temperatures"],
        common_in: &["Stainless steels", "High-temperature alloys", "Austenitic steels"],
        temperature_window: Some("912-1394°C"),
        composition_window: Some("Fe-C, Fe-Ni-Cr"),
    },
    PhaseDescriptor {
        id: PhaseId::Ferrite,
        name: "Ferrite (α-Fe)",
        kind: PhaseKind::SolidSolution,
        structure: "Body-Centered Cubic (BCC)",
        description: "Low-temperature phase of iron with magnetic properties and limited carbon solubility.",
        properties: &["Magnetic", "Soft and ductile", "Low carbon solubility", "Good formability"],
        common_in: &["Low-carbon steels", "Ferritic stainless steels", "Pure iron"],
        temperature_window: Some("Below 912°C"),
        composition_window: Some("Fe with <0.02% C"),
    },
    PhaseDescriptor {
        id: PhaseId::Martensite,
        name: "Martensite",
        kind: PhaseKind::SolidSolution,
        structure: "Body-Centered Tetragonal (BCT)",
        description: "Supersaturated solid solution formed by rapid cooling, characterized by high hardness.",
        properties: &["Very high hardness", "High strength", "Brittle", "Magnetic"],
        common_in: &["Tool steels", "Hardened carbon steels", "Martensitic stainless steels"],
        temperature_window: Some("Formed by quenching"),
        composition_window: Some("Fe-C supersaturated"),
    },
    PhaseDescriptor {
        id: PhaseId::Sigma,
        name: "Sigma Phase (σ)",
        kind: PhaseKind::Sigma,
        structure: "Tetragonal",
        description: "Brittle intermetallic phase that forms in high-chromium alloys, reducing toughness.",
        properties: &["Extremely brittle", "High hardness", "Reduces toughness", "Non-magnetic"],
        common_in: &["Duplex stainless steels", "Super-duplex steels", "High-Cr ferritic steels"],
        temperature_window: Some("600-1000°C"),
        composition_window: Some("Fe-Cr (typically 45-50% Cr)"),
    },
    PhaseDescriptor {
        id: PhaseId::Laves,
        name: "Laves Phase",
        kind: PhaseKind::Laves,
        structure: "Hexagonal (C14, C15, C36)",
        description: "Topologically close-packed phase with AB₂ stoichiometry, often brittle.",
        properties: &["High melting point", "Brittle", "High hardness", "Ordered structure"],
        common_in: &["Ni-based superalloys", "Ti-based alloys", "Mg-based alloys"],
        temperature_window: Some("High temperature stable"),
        composition_window: Some("AB₂ (e.g., MgZn₂, TiCr₂)"),
    },
    PhaseDescriptor {
        id: PhaseId::GammaPrime,
        name: "Gamma Prime (γ')",
        kind: PhaseKind::Intermetallic,
        structure: "L1₂ (Ordered FCC)",
        description: "Ordered intermetallic phase that provides precipitation strengthening in superalloys.",
        properties: &["High-temperature strength", "Ordered structure", "Coherent with matrix", "Stable at high temperatures"],
        common_in: &["Ni-based superalloys", "Turbine blade alloys", "High-temperature applications"],
        temperature_window: Some("Stable up to 1200°C"),
        composition_window: Some("Ni₃(Al,Ti)"),
    },
    PhaseDescriptor {
        id: PhaseId::Beta,
        name: "Beta Phase (β)",
        kind: PhaseKind::SolidSolution,
        structure: "Body-Centered Cubic (BCC)",
        description: "High-temperature phase in titanium alloys with good formability.",
        properties: &["Good formability", "Lower density", "High-temperature stability", "Good weldability"],
        common_in: &["Ti-based alloys", "Beta titanium alloys", "Aerospace applications"],
        temperature_window: Some("Above 882°C for Ti"),
        composition_window: Some("Ti with β-stabilizers (V, Mo, Nb)"),
    },
    PhaseDescriptor {
        id: PhaseId::Alpha,
        name: "Alpha Phase (α)",
        kind: PhaseKind::SolidSolution,
        structure: "Hexagonal Close-Packed (HCP)",
        description: "Low-temperature phase in titanium alloys with high strength and corrosion resistance.",
        properties: &["High strength", "Excellent corrosion resistance", "Lower ductility", "Stable at room temperature"],
        common_in: &["Ti-based alloys", "Alpha titanium alloys", "Corrosive environments"],
        temperature_window: Some("Below 882°C for Ti"),
        composition_window: Some("Ti with α-stabilizers (Al, O, N)"),
    },
    PhaseDescriptor {
        id: PhaseId::Cementite,
        name: "Cementite (Fe₃C)",
        kind: PhaseKind::Carbide,
        structure: "Orthorhombic",
        description: "Iron carbide phase that provides hardness in carbon steels.",
        properties: &["Very hard", "Brittle", "Magnetic below 210°C", "High wear resistance"],
        common_in: &["Carbon steels", "Cast irons", "Tool steels"],
        temperature_window: Some("Stable below 727°C"),
        composition_window: Some("Fe₃C (6.67% C)"),
    },
    PhaseDescriptor {
        id: PhaseId::Pearlite,
        name: "Pearlite",
        kind: PhaseKind::SolidSolution,
        structure: "Lamellar (Ferrite + Cementite)",
        description: "Eutectoid structure consisting of alternating layers of ferrite and cementite.",
        properties: &["Good strength-ductility balance", "Lamellar structure", "Moderate hardness", "Good machinability"],
        common_in: &["Medium carbon steels", "Rail steels", "Wire applications"],
        temperature_window: Some("Forms at 727°C"),
        composition_window: Some("0.77% C in Fe-C system"),
    },
    PhaseDescriptor {
        id: PhaseId::Bainite,
        name: "Bainite",
        kind: PhaseKind::SolidSolution,
        structure: "Acicular (Needle-like)",
        description: "Intermediate transformation product with good toughness and strength.",
        properties: &["Good toughness", "High strength", "Acicular morphology", "Better than pearlite"],
        common_in: &["HSLA steels", "Pipeline steels", "Automotive steels"],
        temperature_window: Some("250-550°C transformation"),
        composition_window: Some("Fe-C with controlled cooling"),
    },
    PhaseDescriptor {
        id: PhaseId::WidmanstattenFerrite,
        name: "Widmanstätten Ferrite",
        kind: PhaseKind::SolidSolution,
        structure: "Plate-like BCC",
        description: "Plate-like ferrite that forms along austenite grain boundaries.",
        properties: &["Plate morphology", "Reduced toughness", "Directional properties", "Coarse structure"],
        common_in: &["Slowly cooled steels", "Thick sections", "Weld heat-affected zones"],
        temperature_window: Some("Slow cooling from austenite"),
        composition_window: Some("Low-carbon steels"),
    },
    // Diagram-only phases below; the predictor never produces these.
    PhaseDescriptor {
        id: PhaseId::Liquid,
        name: "Liquid",
        kind: PhaseKind::Liquid,
        structure: "Disordered liquid",
        description: "Molten state where atoms are randomly arranged with high mobility.",
        properties: &["High atomic mobility", "Random atomic arrangement", "High temperature stability"],
        common_in: &["Casting processes", "Welding", "Heat treatment"],
        temperature_window: Some("Above the liquidus"),
        composition_window: None,
    },
    PhaseDescriptor {
        id: PhaseId::Gamma,
        name: "Gamma (γ)",
        kind: PhaseKind::SolidSolution,
        structure: "Face-Centered Cubic (FCC)",
        description: "Disordered nickel-rich solid solution that forms the matrix of superalloys.",
        properties: &["High ductility", "Good oxidation resistance", "Solid-solution strengthened"],
        common_in: &["Ni-based superalloys", "Nickel alloys"],
        temperature_window: Some("Up to the solidus"),
        composition_window: Some("Ni with up to ~25% Al"),
    },
    PhaseDescriptor {
        id: PhaseId::TitaniumAluminide,
        name: "TiAl (γ-TiAl)",
        kind: PhaseKind::Intermetallic,
        structure: "L1₀ (Ordered tetragonal)",
        description: "Ordered titanium aluminide with low density and good high-temperature strength.",
        properties: &["Low density", "High-temperature strength", "Oxidation resistance", "Limited ductility"],
        common_in: &["Turbine blades", "Automotive valves", "Aerospace applications"],
        temperature_window: Some("Stable up to the peritectic"),
        composition_window: Some("Ti with 45-55% Al"),
    },
    PhaseDescriptor {
        id: PhaseId::GenericAlpha,
        name: "Alpha",
        kind: PhaseKind::SolidSolution,
        structure: "Hexagonal Close-Packed (HCP)",
        description: "Low-temperature stable phase, typically hexagonal close-packed.",
        properties: &["High strength", "Good corrosion resistance", "Lower ductility"],
        common_in: &["Structural components", "Corrosive environments"],
        temperature_window: None,
        composition_window: None,
    },
    PhaseDescriptor {
        id: PhaseId::GenericBeta,
        name: "Beta",
        kind: PhaseKind::SolidSolution,
        structure: "Body-Centered Cubic (BCC)",
        description: "High-temperature phase, typically body-centered cubic.",
        properties: &["Good formability", "High-temperature stability", "Good weldability"],
        common_in: &["High-temperature applications", "Aerospace components"],
        temperature_window: None,
        composition_window: None,
    },
    PhaseDescriptor {
        id: PhaseId::Intermetallic,
        name: "Intermetallic",
        kind: PhaseKind::Intermetallic,
        structure: "Various ordered structures",
        description: "Ordered compound with specific stoichiometry between elements.",
        properties: &["Ordered structure", "Often brittle", "High melting point", "Specific composition"],
        common_in: &["High-temperature alloys", "Specialized applications"],
        temperature_window: None,
        composition_window: None,
    },
    PhaseDescriptor {
        id: PhaseId::SolidSolution,
        name: "Solid Solution",
        kind: PhaseKind::SolidSolution,
        structure: "Based on solvent structure",
        description: "Homogeneous mixture where one element dissolves in another.",
        properties: &["Homogeneous structure", "Variable composition", "Intermediate properties"],
        common_in: &["Alloy strengthening", "Property modification"],
        temperature_window: None,
        composition_window: None,
    },
];

/// Alias table behind [`PhaseCatalog::standard`](crate::catalog::PhaseCatalog::standard).
///
/// Order is significant: longer, more specific patterns first.
pub static PHASE_ALIASES: &[PhaseAlias] = &[
    PhaseAlias::new("gamma prime", PhaseId::GammaPrime),
    PhaseAlias::new("γ'", PhaseId::GammaPrime),
    PhaseAlias::new("γ′", PhaseId::GammaPrime),
    PhaseAlias::new("widmanstätten", PhaseId::WidmanstattenFerrite),
    PhaseAlias::new("austenite", PhaseId::Austenite),
    PhaseAlias::new("ferrite", PhaseId::Ferrite),
    PhaseAlias::new("martensite", PhaseId::Martensite),
    PhaseAlias::new("bainite", PhaseId::Bainite),
    PhaseAlias::new("pearlite", PhaseId::Pearlite),
    PhaseAlias::new("cementite", PhaseId::Cementite),
    PhaseAlias::new("sigma", PhaseId::Sigma),
    PhaseAlias::new("laves", PhaseId::Laves),
    PhaseAlias::new("liquid", PhaseId::Liquid),
    PhaseAlias::new("tial", PhaseId::TitaniumAluminide),
    PhaseAlias::new("gamma", PhaseId::Gamma),
    PhaseAlias::new("beta phase", PhaseId::Beta),
    PhaseAlias::new("alpha phase", PhaseId::Alpha),
    PhaseAlias::new("beta", PhaseId::GenericBeta),
    PhaseAlias::new("alpha", PhaseId::GenericAlpha),
    PhaseAlias::new("intermetallic", PhaseId::Intermetallic),
    PhaseAlias::new("solid solution", PhaseId::SolidSolution),
];

// ─── Alloy systems ───────────────────────────────────────────────────────────

/// Multi-element systems matched by exact element-set equality.
pub static ALLOY_SYSTEMS: &[AlloySystem] = &[
    AlloySystem {
        elements: &["Fe", "C"],
        phases: &[
            PhaseId::Austenite,
            PhaseId::Ferrite,
            PhaseId::Martensite,
            PhaseId::Cementite,
            PhaseId::Pearlite,
            PhaseId::Bainite,
        ],
        description: "Iron-Carbon system forms the basis of all carbon and alloy steels",
    },
    AlloySystem {
        elements: &["Fe", "Cr", "Ni"],
        phases: &[PhaseId::Austenite, PhaseId::Ferrite, PhaseId::Sigma],
        description: "Stainless steel system with excellent corrosion resistance",
    },
    AlloySystem {
        elements: &["Ni", "Al", "Ti"],
        phases: &[PhaseId::Austenite, PhaseId::GammaPrime],
        description: "Superalloy system for high-temperature applications",
    },
    AlloySystem {
        elements: &["Ti", "Al"],
        phases: &[PhaseId::Beta, PhaseId::Alpha],
        description: "Titanium-aluminum system for aerospace applications",
    },
    AlloySystem {
        elements: &["Ti", "V"],
        phases: &[PhaseId::Beta, PhaseId::Alpha],
        description: "Beta titanium alloy system with good formability",
    },
    AlloySystem {
        elements: &["Mg", "Zn"],
        phases: &[PhaseId::Laves],
        description: "Magnesium-zinc system forming Laves phases",
    },
];

// ─── Binary systems ──────────────────────────────────────────────────────────

/// The five built-in diagrams in registration order: Fe-C, Ti-Al, Cu-Zn, Ni-Al, Mg-Zn.
///
/// Points are `(temperature °C, composition fraction)`.
pub fn binary_systems() -> Result<Vec<BinarySystem>, CatalogError> {
    Ok(vec![
        iron_carbon()?,
        titanium_aluminum()?,
        copper_zinc()?,
        nickel_aluminum()?,
        magnesium_zinc()?,
    ])
}

fn iron_carbon() -> Result<BinarySystem, CatalogError> {
    BinarySystem::builder("Fe", "C")
        .system_type("Eutectic-Eutectoid")
        .description(
            "Iron-Carbon system forms the basis of all carbon and alloy steels. \
             Shows eutectic and eutectoid transformations.",
        )
        .temperature_range(0.0, 1600.0)
        .region(
            "Liquid",
            [(1538.0, 0.0), (1495.0, 0.043), (1147.0, 0.043), (1147.0, 0.067), (1600.0, 0.067), (1600.0, 0.0)],
            (1400.0, 0.03),
        )
        .region(
            "Austenite",
            [(1495.0, 0.043), (1147.0, 0.043), (1147.0, 0.067), (727.0, 0.0077), (912.0, 0.0), (1495.0, 0.0)],
            (1000.0, 0.025),
        )
        .region(
            "Ferrite",
            [(912.0, 0.0), (727.0, 0.0077), (0.0, 0.0077), (0.0, 0.0)],
            (400.0, 0.003),
        )
        .region(
            "Cementite",
            [(1147.0, 0.067), (1600.0, 0.067), (1600.0, 0.1), (0.0, 0.1), (0.0, 0.067), (727.0, 0.067)],
            (400.0, 0.08),
        )
        .region(
            "Pearlite",
            [(727.0, 0.0077), (727.0, 0.067), (0.0, 0.067), (0.0, 0.0077)],
            (350.0, 0.037),
        )
        .curve("Liquidus", [(1538.0, 0.0), (1495.0, 0.043), (1147.0, 0.043)])
        .curve("Solidus", [(1495.0, 0.0), (1147.0, 0.043)])
        .curve("A3 Line", [(912.0, 0.0), (727.0, 0.0077)])
        .curve("Eutectoid Line", [(727.0, 0.0), (727.0, 0.1)])
        .build()
}

fn titanium_aluminum() -> Result<BinarySystem, CatalogError> {
    BinarySystem::builder("Ti", "Al")
        .system_type("Peritectic")
        .description(
            "Titanium-Aluminum system important for aerospace applications. \
             Forms various intermetallic phases.",
        )
        .temperature_range(0.0, 1800.0)
        .region(
            "Liquid",
            [(1668.0, 0.0), (1665.0, 0.1), (1460.0, 0.5), (1800.0, 0.5), (1800.0, 0.0)],
            (1700.0, 0.25),
        )
        .region(
            "Beta",
            [(1668.0, 0.0), (1665.0, 0.1), (882.0, 0.1), (882.0, 0.0)],
            (1200.0, 0.05),
        )
        .region(
            "Alpha",
            [(882.0, 0.0), (882.0, 0.1), (0.0, 0.1), (0.0, 0.0)],
            (400.0, 0.05),
        )
        .region(
            "TiAl",
            [(1460.0, 0.5), (1800.0, 0.5), (1800.0, 0.7), (0.0, 0.7), (0.0, 0.5)],
            (800.0, 0.6),
        )
        .curve("Beta Transus", [(882.0, 0.0), (882.0, 0.1)])
        .curve("Peritectic", [(1460.0, 0.5)])
        .build()
}

fn copper_zinc() -> Result<BinarySystem, CatalogError> {
    BinarySystem::builder("Cu", "Zn")
        .system_type("Substitutional Solid Solution")
        .description(
            "Copper-Zinc system forms brass alloys with various phases including alpha and beta brass.",
        )
        .temperature_range(0.0, 1200.0)
        .region(
            "Liquid",
            [(1085.0, 0.0), (900.0, 0.4), (1200.0, 0.4), (1200.0, 0.0)],
            (1100.0, 0.2),
        )
        .region(
            "Alpha (α)",
            [(1085.0, 0.0), (900.0, 0.4), (0.0, 0.4), (0.0, 0.0)],
            (500.0, 0.2),
        )
        .region(
            "Beta (β)",
            [(900.0, 0.4), (1200.0, 0.4), (1200.0, 0.6), (0.0, 0.6)],
            (500.0, 0.5),
        )
        .curve("Alpha-Beta Boundary", [(900.0, 0.4), (0.0, 0.4)])
        .build()
}

fn nickel_aluminum() -> Result<BinarySystem, CatalogError> {
    BinarySystem::builder("Ni", "Al")
        .system_type("Intermetallic")
        .description(
            "Nickel-Aluminum system forms important superalloy phases including gamma prime \
             for high-temperature applications.",
        )
        .temperature_range(0.0, 1700.0)
        .region(
            "Liquid",
            [(1455.0, 0.0), (1640.0, 0.25), (1700.0, 0.25), (1700.0, 0.0)],
            (1600.0, 0.12),
        )
        .region(
            "Gamma (γ)",
            [(1455.0, 0.0), (1640.0, 0.25), (0.0, 0.25), (0.0, 0.0)],
            (700.0, 0.12),
        )
        .region(
            "Gamma Prime (γ')",
            [(1640.0, 0.25), (1700.0, 0.25), (1700.0, 0.5), (0.0, 0.5)],
            (800.0, 0.37),
        )
        .curve("Gamma-Gamma Prime", [(1640.0, 0.25), (0.0, 0.25)])
        .build()
}

fn magnesium_zinc() -> Result<BinarySystem, CatalogError> {
    BinarySystem::builder("Mg", "Zn")
        .system_type("Eutectic with Laves Phase")
        .description(
            "Magnesium-Zinc system forms Laves phases important for lightweight structural applications.",
        )
        .temperature_range(0.0, 700.0)
        .region(
            "Liquid",
            [(650.0, 0.0), (340.0, 0.5), (700.0, 0.5), (700.0, 0.0)],
            (600.0, 0.25),
        )
        .region(
            "Alpha (Mg)",
            [(650.0, 0.0), (340.0, 0.1), (0.0, 0.1), (0.0, 0.0)],
            (300.0, 0.05),
        )
        .region(
            "Laves (MgZn₂)",
            [(340.0, 0.1), (340.0, 0.67), (0.0, 0.67), (0.0, 0.1)],
            (150.0, 0.4),
        )
        .curve("Eutectic", [(340.0, 0.1), (340.0, 0.67)])
        .build()
}

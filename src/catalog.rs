//! Phase descriptors and the alias-driven name lookup.
//!
//! Every phase the crate knows about has a stable [`PhaseId`]. Display names are an
//! attribute of the [`PhaseDescriptor`], not its key. Diagram labels such as
//! `"Austenite"` or `"Gamma Prime (γ')"` are resolved through an explicit, ordered
//! alias table: the first alias contained (case-insensitively) in the label wins.
//!
//! # Invariants
//! - **CAT-001**: Alias patterns are stored lower-case and checked in declaration
//!   order. More specific patterns (`"gamma prime"`) must precede their prefixes
//!   (`"gamma"`).
//! - **CAT-002**: [`PhaseCatalog::describe`] never fails; a miss returns
//!   [`UNKNOWN_DESCRIPTOR`].
//! - **CAT-003**: Catalogs are borrowed, read-only views. Nothing mutates after
//!   construction.

use alloc::string::String;

use crate::data;

/// Broad family of a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PhaseKind {
    /// Substitutional or interstitial solid solution.
    SolidSolution,
    /// Ordered compound with fixed stoichiometry.
    Intermetallic,
    /// Tetragonal σ phase.
    Sigma,
    /// AB₂ topologically close-packed phase.
    Laves,
    /// Metal carbide.
    Carbide,
    /// Metal nitride.
    Nitride,
    /// Metal oxide.
    Oxide,
    /// Metal boride.
    Boride,
    /// Molten alloy.
    Liquid,
    /// Placeholder for unresolved names.
    Unknown,
}

impl PhaseKind {
    /// Kebab-case tag, e.g. `"solid-solution"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseKind::SolidSolution => "solid-solution",
            PhaseKind::Intermetallic => "intermetallic",
            PhaseKind::Sigma => "sigma",
            PhaseKind::Laves => "laves",
            PhaseKind::Carbide => "carbide",
            PhaseKind::Nitride => "nitride",
            PhaseKind::Oxide => "oxide",
            PhaseKind::Boride => "boride",
            PhaseKind::Liquid => "liquid",
            PhaseKind::Unknown => "unknown",
        }
    }
}

/// Canonical phase identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseId {
    /// γ-Fe, FCC iron.
    Austenite,
    /// α-Fe, BCC iron.
    Ferrite,
    /// Quenched BCT iron-carbon.
    Martensite,
    /// σ phase of high-Cr alloys.
    Sigma,
    /// AB₂ Laves phase.
    Laves,
    /// γ′ Ni₃(Al,Ti).
    GammaPrime,
    /// β (BCC) titanium.
    Beta,
    /// α (HCP) titanium.
    Alpha,
    /// Fe₃C.
    Cementite,
    /// Ferrite + cementite lamellae.
    Pearlite,
    /// Acicular ferrite + carbide.
    Bainite,
    /// Plate ferrite from slow cooling.
    WidmanstattenFerrite,
    /// Molten alloy.
    Liquid,
    /// γ, FCC nickel matrix.
    Gamma,
    /// γ-TiAl.
    TitaniumAluminide,
    /// Generic low-temperature α field of a binary diagram.
    GenericAlpha,
    /// Generic high-temperature β field of a binary diagram.
    GenericBeta,
    /// Generic ordered compound.
    Intermetallic,
    /// Generic solid solution.
    SolidSolution,
    /// The placeholder returned for unresolved names.
    Unknown,
}

/// Static metadata for one phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseDescriptor {
    /// Stable identifier.
    pub id: PhaseId,
    /// Display name, e.g. `"Austenite (γ-Fe)"`.
    pub name: &'static str,
    /// Broad family.
    pub kind: PhaseKind,
    /// Crystal structure, e.g. `"Face-Centered Cubic (FCC)"`.
    pub structure: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Characteristic properties.
    pub properties: &'static [&'static str],
    /// Alloys and applications where the phase is common.
    pub common_in: &'static [&'static str],
    /// Typical temperature window, free text (e.g. `"Below 912°C"`).
    pub temperature_window: Option<&'static str>,
    /// Typical composition window, free text.
    pub composition_window: Option<&'static str>,
}

/// Returned by [`PhaseCatalog::describe`] when no alias matches (CAT-002).
pub static UNKNOWN_DESCRIPTOR: PhaseDescriptor = PhaseDescriptor {
    id: PhaseId::Unknown,
    name: "Unknown Phase",
    kind: PhaseKind::Unknown,
    structure: "Structure varies with composition",
    description: "Phase information not available for this combination.",
    properties: &["Properties depend on specific composition and temperature"],
    common_in: &["Applications depend on specific properties"],
    temperature_window: None,
    composition_window: None,
};

/// One row of the alias table: a lower-case pattern and the phase it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseAlias {
    /// Lower-case substring to look for in a label.
    pub pattern: &'static str,
    /// Phase the pattern resolves to.
    pub id: PhaseId,
}

impl PhaseAlias {
    /// Construct an alias row.
    pub const fn new(pattern: &'static str, id: PhaseId) -> Self {
        Self { pattern, id }
    }
}

/// Read-only view over a descriptor table and its alias table.
///
/// The standard catalog is compiled in; tests and embedders can build their own
/// from any slices.
#[derive(Clone, Copy, Debug)]
pub struct PhaseCatalog<'a> {
    descriptors: &'a [PhaseDescriptor],
    aliases: &'a [PhaseAlias],
}

impl<'a> PhaseCatalog<'a> {
    /// Wrap a descriptor table and an ordered alias table.
    pub const fn new(descriptors: &'a [PhaseDescriptor], aliases: &'a [PhaseAlias]) -> Self {
        Self { descriptors, aliases }
    }

    /// Descriptor for `id`, if this catalog carries it.
    pub fn get(&self, id: PhaseId) -> Option<&'a PhaseDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Resolve a display label through the alias table (CAT-001).
    ///
    /// Returns `None` when no alias matches or the matching alias names a phase
    /// this catalog does not carry.
    pub fn resolve(&self, label: &str) -> Option<&'a PhaseDescriptor> {
        let needle: String = label.to_lowercase();
        self.aliases
            .iter()
            .filter(|alias| needle.contains(alias.pattern))
            .find_map(|alias| self.get(alias.id))
    }

    /// Like [`resolve`](Self::resolve) but falls back to [`UNKNOWN_DESCRIPTOR`].
    pub fn describe(&self, label: &str) -> &'a PhaseDescriptor {
        match self.resolve(label) {
            Some(descriptor) => descriptor,
            None => {
                tracing::debug!(label, "no phase descriptor for label");
                &UNKNOWN_DESCRIPTOR
            }
        }
    }

    /// All descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a PhaseDescriptor> {
        self.descriptors.iter()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// `true` when the catalog carries no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl PhaseCatalog<'static> {
    /// The compiled-in catalog: predictor phases plus diagram-only phases.
    pub fn standard() -> Self {
        PhaseCatalog::new(data::PHASES, data::PHASE_ALIASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: PhaseDescriptor = PhaseDescriptor {
        id: PhaseId::Intermetallic,
        name: "Widget Phase",
        kind: PhaseKind::Intermetallic,
        structure: "Cubic",
        description: "Synthetic test phase.",
        properties: &["Shiny"],
        common_in: &["Test rigs"],
        temperature_window: None,
        composition_window: None,
    };

    #[test]
    fn test_short_label_resolves_to_annotated_name() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.describe("Austenite").name, "Austenite (γ-Fe)");
        assert_eq!(catalog.describe("Ferrite").name, "Ferrite (α-Fe)");
        assert_eq!(catalog.describe("Cementite").name, "Cementite (Fe₃C)");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.describe("PEARLITE").id, PhaseId::Pearlite);
        assert_eq!(catalog.describe("liquid").id, PhaseId::Liquid);
    }

    #[test]
    fn test_gamma_prime_wins_over_gamma() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.describe("Gamma Prime (γ')").id, PhaseId::GammaPrime);
        assert_eq!(catalog.describe("Gamma (γ)").id, PhaseId::Gamma);
    }

    #[test]
    fn test_titanium_phases_win_over_generic_fields() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.describe("Alpha Phase (α)").id, PhaseId::Alpha);
        assert_eq!(catalog.describe("Beta Phase (β)").id, PhaseId::Beta);

        let brass_alpha = catalog.describe("Alpha (α)");
        assert_eq!(brass_alpha.id, PhaseId::GenericAlpha);
        assert_eq!(brass_alpha.structure, "Hexagonal Close-Packed (HCP)");
        assert!(!brass_alpha.common_in.contains(&"Ti-based alloys"));
        assert_eq!(catalog.describe("Beta (β)").id, PhaseId::GenericBeta);
    }

    #[test]
    fn test_widmanstatten_wins_over_ferrite() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.describe("Widmanstätten Ferrite").id, PhaseId::WidmanstattenFerrite);
    }

    #[test]
    fn test_miss_returns_placeholder() {
        let catalog = PhaseCatalog::standard();
        let d = catalog.describe("Unobtainium Glass");
        assert_eq!(d.id, PhaseId::Unknown);
        assert_eq!(d.description, "Phase information not available for this combination.");
        assert!(catalog.resolve("Unobtainium Glass").is_none());
    }

    #[test]
    fn test_every_standard_descriptor_resolves_by_its_own_name() {
        let catalog = PhaseCatalog::standard();
        for d in catalog.iter() {
            assert_eq!(catalog.describe(d.name).id, d.id, "{} did not resolve to itself", d.name);
        }
    }

    #[test]
    fn test_standard_ids_are_unique() {
        let catalog = PhaseCatalog::standard();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate descriptor for {:?}", a.id);
            }
        }
    }

    #[test]
    fn test_alias_to_missing_phase_falls_through() {
        let descriptors = [WIDGET];
        let aliases = [
            PhaseAlias::new("widget", PhaseId::Laves),
            PhaseAlias::new("widget", PhaseId::Intermetallic),
        ];
        let catalog = PhaseCatalog::new(&descriptors, &aliases);
        assert_eq!(catalog.describe("Widget Phase").name, "Widget Phase");
        assert_eq!(catalog.describe("Gizmo").id, PhaseId::Unknown);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(PhaseKind::SolidSolution.as_str(), "solid-solution");
        assert_eq!(PhaseKind::Laves.as_str(), "laves");
    }
}

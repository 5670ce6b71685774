//! Chemical elements: the reference table and normalised element sets.
//!
//! [`ElementInfo`] rows back the element pickers and validate the symbols used by
//! binary systems. [`ElementSet`] is the predictor's view of a query: an unordered
//! collection of symbols, normalised to a sorted, duplicate-free sequence so that
//! comparisons and generated labels are deterministic.
//!
//! # Invariants
//! - **EL-001**: `ElementSet` is always sorted and duplicate-free.
//! - **EL-002**: Unknown symbols are kept in an `ElementSet`; they simply never
//!   trigger a rule. Only catalog construction rejects them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Periodic-table family, used to colour element pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementCategory {
    /// Group 1 metals.
    Alkali,
    /// Group 2 metals.
    AlkalineEarth,
    /// d-block metals.
    Transition,
    /// Metals to the right of the d-block.
    PostTransition,
    /// B, Si, Ge and friends.
    Metalloid,
    /// C, N, O and friends.
    Nonmetal,
    /// Group 18.
    NobleGas,
    /// 4f series.
    Lanthanide,
    /// 5f series.
    Actinide,
}

/// One row of the element table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementInfo {
    /// Chemical symbol, e.g. `"Fe"`.
    pub symbol: &'static str,
    /// English name, e.g. `"Iron"`.
    pub name: &'static str,
    /// Atomic number Z.
    pub atomic_number: u8,
    /// Periodic-table family.
    pub category: ElementCategory,
}

const fn row(
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    category: ElementCategory,
) -> ElementInfo {
    ElementInfo { symbol, name, atomic_number, category }
}

/// Elements offered by the explorer, ordered by atomic number.
pub static ELEMENTS: &[ElementInfo] = &[
    row("Li", "Lithium", 3, ElementCategory::Alkali),
    row("B", "Boron", 5, ElementCategory::Metalloid),
    row("C", "Carbon", 6, ElementCategory::Nonmetal),
    row("N", "Nitrogen", 7, ElementCategory::Nonmetal),
    row("O", "Oxygen", 8, ElementCategory::Nonmetal),
    row("Mg", "Magnesium", 12, ElementCategory::AlkalineEarth),
    row("Al", "Aluminum", 13, ElementCategory::PostTransition),
    row("Si", "Silicon", 14, ElementCategory::Metalloid),
    row("Ti", "Titanium", 22, ElementCategory::Transition),
    row("V", "Vanadium", 23, ElementCategory::Transition),
    row("Cr", "Chromium", 24, ElementCategory::Transition),
    row("Mn", "Manganese", 25, ElementCategory::Transition),
    row("Fe", "Iron", 26, ElementCategory::Transition),
    row("Co", "Cobalt", 27, ElementCategory::Transition),
    row("Ni", "Nickel", 28, ElementCategory::Transition),
    row("Cu", "Copper", 29, ElementCategory::Transition),
    row("Zn", "Zinc", 30, ElementCategory::Transition),
    row("Zr", "Zirconium", 40, ElementCategory::Transition),
    row("Nb", "Niobium", 41, ElementCategory::Transition),
    row("Mo", "Molybdenum", 42, ElementCategory::Transition),
    row("Sn", "Tin", 50, ElementCategory::PostTransition),
    row("W", "Tungsten", 74, ElementCategory::Transition),
];

/// Look up an element by its exact (case-sensitive) symbol.
pub fn element(symbol: &str) -> Option<&'static ElementInfo> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}

/// An unordered set of element symbols, normalised for comparison (EL-001).
///
/// ```rust
/// use alloy_phase_core::element::ElementSet;
///
/// let set = ElementSet::new(["Fe", "C", "Fe"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.matches(&["C", "Fe"]));
/// assert_eq!(set.symbols().collect::<Vec<_>>(), ["C", "Fe"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ElementSet {
    symbols: Vec<String>,
}

impl ElementSet {
    /// Build a set from any collection of symbols. Empty strings are ignored.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        symbols.sort();
        symbols.dedup();
        Self { symbols }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// `true` when the set holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// `true` if `symbol` is a member.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.binary_search_by(|s| s.as_str().cmp(symbol)).is_ok()
    }

    /// `true` if every symbol in `symbols` is a member.
    pub fn contains_all(&self, symbols: &[&str]) -> bool {
        symbols.iter().all(|s| self.contains(s))
    }

    /// `true` if at least one symbol in `symbols` is a member.
    pub fn contains_any(&self, symbols: &[&str]) -> bool {
        symbols.iter().any(|s| self.contains(s))
    }

    /// Exact set equality against a catalog's symbol list: same size, same members,
    /// order irrelevant.
    pub fn matches(&self, symbols: &[&str]) -> bool {
        symbols.len() == self.len() && self.contains_all(symbols)
    }

    /// Members in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl<'s> FromIterator<&'s str> for ElementSet {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

//! Binary system registry keyed by element pair.
//!
//! # Invariants
//! - **REG-001**: Lookup is symmetric: `(A, B)` is tried first, then `(B, A)`.
//!   Both orientations return the same stored system.
//! - **REG-002**: At most one system per unordered pair; a second registration in
//!   either orientation is rejected.
//! - **REG-003**: Registration order is preserved by [`SystemRegistry::pairs`] and
//!   [`SystemRegistry::iter`].
//! - **REG-004**: Lookups never allocate; the key is borrowed through
//!   [`hashbrown::Equivalent`].

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{Equivalent, HashMap};

use crate::data;
use crate::error::CatalogError;
use crate::system::BinarySystem;

/// Borrowed form of a registry key. Hashes identically to `(String, String)`.
#[derive(Hash)]
struct PairRef<'a>(&'a str, &'a str);

impl Equivalent<(String, String)> for PairRef<'_> {
    fn equivalent(&self, key: &(String, String)) -> bool {
        self.0 == key.0 && self.1 == key.1
    }
}

/// Read-only map from `(element_a, element_b)` to a [`BinarySystem`].
#[derive(Clone, Debug, Default)]
pub struct SystemRegistry {
    systems: Vec<BinarySystem>,
    index: HashMap<(String, String), usize>,
}

impl SystemRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five compiled-in diagrams (Fe-C, Ti-Al, Cu-Zn, Ni-Al, Mg-Zn).
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_systems(data::binary_systems()?)
    }

    /// Register every system in order, failing on the first duplicate pair.
    pub fn from_systems<I>(systems: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = BinarySystem>,
    {
        let mut registry = Self::new();
        for system in systems {
            registry.register(system)?;
        }
        Ok(registry)
    }

    /// Add a system under its own `(element_a, element_b)` key (REG-002).
    pub fn register(&mut self, system: BinarySystem) -> Result<(), CatalogError> {
        let (a, b) = (system.element_a(), system.element_b());
        if self.index.contains_key(&PairRef(a, b)) || self.index.contains_key(&PairRef(b, a)) {
            return Err(CatalogError::DuplicateSystem {
                element_a: a.to_owned(),
                element_b: b.to_owned(),
            });
        }
        tracing::trace!(element_a = a, element_b = b, regions = system.regions().len(), "registered binary system");
        self.index.insert((a.to_owned(), b.to_owned()), self.systems.len());
        self.systems.push(system);
        Ok(())
    }

    /// Find the system for an unordered element pair (REG-001).
    ///
    /// `None` means no diagram is available; callers skip classification.
    pub fn lookup(&self, element_a: &str, element_b: &str) -> Option<&BinarySystem> {
        let slot = self
            .index
            .get(&PairRef(element_a, element_b))
            .or_else(|| self.index.get(&PairRef(element_b, element_a)));
        match slot {
            Some(&i) => self.systems.get(i),
            None => {
                tracing::debug!(element_a, element_b, "no binary system for pair");
                None
            }
        }
    }

    /// Registered pairs in registration order, as `(element_a, element_b)`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.systems.iter().map(|s| (s.element_a(), s.element_b()))
    }

    /// Registered systems in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BinarySystem> {
        self.systems.iter()
    }

    /// Number of registered systems.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

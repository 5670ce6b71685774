//! # alloy-phase-core
//!
//! Binary-alloy phase diagrams and rule-based multi-element phase prediction.
//!
//! ---
//!
//! Two independent questions are answered here.
//!
//! **Where does this point fall?** A binary system is a set of labelled polygons in
//! (composition, temperature) space. Given a temperature and the fraction of the
//! second element, the classifier walks the regions in their authored order and
//! returns the first label whose polygon contains the point.
//!
//! **What phases should this combination show?** For an arbitrary set of elements,
//! the predictor seeds a phase list from a known alloy system (or from per-element
//! heuristics when none matches), filters it by temperature band, adds σ and Laves
//! where the chemistry calls for them, and aggregates properties and applications.
//!
//! Both read from immutable, injected catalogs. Nothing is mutated after
//! construction and no query can fail; misses degrade to `"Unknown Phase"`, a
//! placeholder descriptor, or an empty list.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! (A, B) ──► SystemRegistry ──► BinarySystem ──► classify(T, x) ──► label
//!                                                                    │
//!                                          PhaseCatalog::describe ◄──┘
//!
//! {elements}, T, note ──► Predictor ──► PredictionResult
//!                            ↑
//!           AlloySystem[] · PhaseRule[] · ApplicationHint[] · PredictorConfig
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`geometry`] | [`PhasePoint`], [`contains_point`], [`on_boundary`] | Ray casting and edge tests |
//! | [`element`] | [`ElementInfo`], [`ElementSet`] | Element table and normalised element sets |
//! | [`system`] | [`BinarySystem`], [`PhaseRegion`] | Validated two-element diagram geometry |
//! | [`registry`] | [`SystemRegistry`] | Symmetric lookup by element pair |
//! | [`classifier`] | [`classify`], [`UNKNOWN_PHASE`] | First-match region classification |
//! | [`catalog`] | [`PhaseCatalog`], [`PhaseDescriptor`], [`PhaseId`] | Descriptors and alias lookup |
//! | [`rules`] | [`PhaseRule`], [`ApplicationHint`] | Heuristic rules as data |
//! | [`predictor`] | [`Predictor`], [`PredictionResult`] | Multi-element phase prediction |
//! | [`estimate`] | [`PropertyEstimate`] | Point property models per label |
//! | [`explorer`] | [`PhaseExplorer`] | Façade bundling all of the above |
//! | [`data`] | [`data::PHASES`], [`data::binary_systems`] | Compiled-in reference tables |
//! | `snapshot` | `SystemSnapshot`, `PredictionRecord` | Serialisable records (requires `serde` feature) |
//! | `ffi` | `PhaseExplorer` (Python) | PyO3 bindings (requires `python-ffi` feature) |
//!
//! ## Quick start
//!
//! ```rust
//! use alloy_phase_core::explorer::PhaseExplorer;
//!
//! let explorer = PhaseExplorer::standard().unwrap();
//!
//! let report = explorer.inspect("Fe", "C", 600.0, 0.02).unwrap();
//! assert_eq!(report.label, "Pearlite");
//!
//! let prediction = explorer.predict(["Fe", "Cr"], 800.0, "");
//! assert_eq!(prediction.secondary_phases[0].name, "Sigma Phase (σ)");
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs only `alloc`. Enable the `std`
//! feature to link the standard library, `serde` for serialisation support, and
//! `python-ffi` for the Python extension module.
//!
//! ## Logging
//!
//! Diagnostic events are emitted through `tracing` at `debug` and `trace` level.
//! The crate never installs a subscriber.
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod geometry;
pub mod element;
pub mod error;
pub mod system;
pub mod registry;
pub mod classifier;
pub mod catalog;
pub mod rules;
pub mod predictor;
pub mod estimate;
pub mod explorer;
pub mod data;
#[cfg(feature = "serde")]
pub mod snapshot;

#[cfg(feature = "python-ffi")]
pub mod ffi;

// ─── Re-exports ──────────────────────────────────────────────────────────────

pub use catalog::{PhaseCatalog, PhaseDescriptor, PhaseId, PhaseKind, UNKNOWN_DESCRIPTOR};
pub use classifier::{classify, locate, UNKNOWN_PHASE};
pub use element::{ElementInfo, ElementSet};
pub use error::CatalogError;
pub use estimate::{estimate_properties, PropertyEstimate};
pub use explorer::{PhaseExplorer, PointReport};
pub use geometry::{contains_point, on_boundary, PhasePoint};
pub use predictor::{AlloySystem, PredictionResult, Predictor, PredictorConfig, TemperatureBand};
pub use registry::SystemRegistry;
pub use rules::{ApplicationHint, PhaseRule};
pub use system::{BinarySystem, PhaseBoundaryCurve, PhaseRegion};

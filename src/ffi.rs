//! Python FFI bindings via PyO3.
//!
//! Exposes diagram lookup, point classification, descriptor lookup and the
//! multi-element predictor over the compiled-in data.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from alloy_phase_core import PhaseExplorer, UNKNOWN_PHASE
//!
//! explorer = PhaseExplorer()
//! print(explorer.pairs())                       # [("Fe", "C"), ("Ti", "Al"), ...]
//! label = explorer.classify("C", "Fe", 600.0, 0.02)
//! print(label)                                  # "Pearlite"
//! print(explorer.describe(label).structure)     # "Lamellar (Ferrite + Cementite)"
//!
//! p = explorer.predict(["Fe", "Cr"], temperature=800.0)
//! print([ph.name for ph in p.secondary_phases])  # ["Sigma Phase (σ)"]
//! print(p.microstructure)
//! ```

#![allow(non_snake_case)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog::PhaseDescriptor;
use crate::classifier::{self, UNKNOWN_PHASE};
use crate::explorer::PhaseExplorer;
use crate::predictor::{PredictionResult, DEFAULT_TEMPERATURE};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Read-only phase descriptor.
#[pyclass(name = "Phase", frozen)]
#[derive(Clone)]
pub struct PyPhase {
    inner: &'static PhaseDescriptor,
}

#[pymethods]
impl PyPhase {
    /// Display name, e.g. "Austenite (γ-Fe)".
    #[getter]
    pub fn name(&self) -> &'static str {
        self.inner.name
    }
    /// Phase family, e.g. "solid-solution".
    #[getter]
    pub fn kind(&self) -> &'static str {
        self.inner.kind.as_str()
    }
    /// Crystal structure.
    #[getter]
    pub fn structure(&self) -> &'static str {
        self.inner.structure
    }
    /// One-sentence description.
    #[getter]
    pub fn description(&self) -> &'static str {
        self.inner.description
    }
    /// Characteristic properties.
    #[getter]
    pub fn properties(&self) -> Vec<&'static str> {
        self.inner.properties.to_vec()
    }
    /// Alloys and applications where the phase is common.
    #[getter]
    pub fn common_in(&self) -> Vec<&'static str> {
        self.inner.common_in.to_vec()
    }
    /// Typical temperature window, or None.
    #[getter]
    pub fn temperature_window(&self) -> Option<&'static str> {
        self.inner.temperature_window
    }
    /// Typical composition window, or None.
    #[getter]
    pub fn composition_window(&self) -> Option<&'static str> {
        self.inner.composition_window
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Phase({:?})", self.inner.name)
    }
}

fn wrap(phases: &[&'static PhaseDescriptor]) -> Vec<PyPhase> {
    phases.iter().map(|&inner| PyPhase { inner }).collect()
}

// ── Prediction ────────────────────────────────────────────────────────────────

/// Result of `PhaseExplorer.predict`.
#[pyclass(name = "Prediction", frozen)]
pub struct PyPrediction {
    inner: PredictionResult<'static>,
}

#[pymethods]
impl PyPrediction {
    /// Sorted, de-duplicated element symbols.
    #[getter]
    pub fn elements(&self) -> Vec<String> {
        self.inner.elements.symbols().map(String::from).collect()
    }
    /// Dominant phases.
    #[getter]
    pub fn primary_phases(&self) -> Vec<PyPhase> {
        wrap(&self.inner.primary_phases)
    }
    /// Minor phases.
    #[getter]
    pub fn secondary_phases(&self) -> Vec<PyPhase> {
        wrap(&self.inner.secondary_phases)
    }
    /// Temperature label, e.g. "800°C".
    #[getter]
    pub fn temperature(&self) -> &str {
        &self.inner.temperature_label
    }
    /// Composition label or the caller's note.
    #[getter]
    pub fn composition(&self) -> &str {
        &self.inner.composition_label
    }
    /// "high", "intermediate" or "ambient".
    #[getter]
    pub fn band(&self) -> &'static str {
        self.inner.band.as_str()
    }
    /// Microstructure sentence.
    #[getter]
    pub fn microstructure(&self) -> &'static str {
        self.inner.microstructure_description
    }
    /// Aggregated properties.
    #[getter]
    pub fn properties(&self) -> Vec<&'static str> {
        self.inner.properties.clone()
    }
    /// Aggregated applications.
    #[getter]
    pub fn applications(&self) -> Vec<&'static str> {
        self.inner.applications.clone()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "Prediction(composition={:?}, temperature={:?}, primary={}, secondary={})",
            self.inner.composition_label,
            self.inner.temperature_label,
            self.inner.primary_phases.len(),
            self.inner.secondary_phases.len(),
        )
    }
}

// ── PhaseExplorer ─────────────────────────────────────────────────────────────

/// Binary diagrams, phase catalog and predictor over the built-in data.
#[pyclass(name = "PhaseExplorer", frozen)]
pub struct PyPhaseExplorer {
    inner: PhaseExplorer<'static>,
}

#[pymethods]
impl PyPhaseExplorer {
    /// Load the built-in catalogs.
    #[new]
    pub fn new() -> PyResult<Self> {
        let inner = PhaseExplorer::standard().map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Registered element pairs in registration order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.inner
            .registry()
            .pairs()
            .map(|(a, b)| (a.to_owned(), b.to_owned()))
            .collect()
    }

    /// Phase label at (temperature, composition) on the element_a–element_b diagram.
    ///
    /// Returns None when no diagram exists for the pair, and UNKNOWN_PHASE when the
    /// point lies outside every region.
    pub fn classify(
        &self,
        element_a: &str,
        element_b: &str,
        temperature: f64,
        composition: f64,
    ) -> Option<String> {
        let system = self.inner.registry().lookup(element_a, element_b)?;
        Some(classifier::classify(system, temperature, composition).to_owned())
    }

    /// Descriptor for a phase name or diagram label; never raises.
    pub fn describe(&self, name: &str) -> PyPhase {
        PyPhase { inner: self.inner.phases().describe(name) }
    }

    /// Predict phases for an element combination.
    ///
    /// Args:
    ///     elements:    element symbols, any order, duplicates ignored
    ///     temperature: °C (default 25)
    ///     composition: free-text note used as the composition label when non-empty
    #[pyo3(signature = (elements, temperature=DEFAULT_TEMPERATURE, composition=""))]
    pub fn predict(&self, elements: Vec<String>, temperature: f64, composition: &str) -> PyPrediction {
        PyPrediction { inner: self.inner.predict(elements, temperature, composition) }
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("PhaseExplorer(systems={})", self.inner.registry().len())
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Binary-alloy phase classification and multi-element phase prediction.
#[pymodule]
pub fn alloy_phase_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPhaseExplorer>()?;
    m.add_class::<PyPhase>()?;
    m.add_class::<PyPrediction>()?;
    m.add("UNKNOWN_PHASE", UNKNOWN_PHASE)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

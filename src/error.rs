//! Catalog construction errors.
//!
//! Only building a catalog can fail. Every query (lookup, classify, describe,
//! predict) degrades to a sentinel or an empty result instead.

use alloc::string::String;

/// Reasons a [`BinarySystem`] or [`SystemRegistry`] refused to be built.
///
/// [`BinarySystem`]: crate::system::BinarySystem
/// [`SystemRegistry`]: crate::registry::SystemRegistry
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The symbol is not in the element table.
    #[error("unknown element symbol `{0}`")]
    UnknownElement(String),

    /// Both sides of the pair name the same element.
    #[error("a binary system needs two distinct elements, got `{0}` twice")]
    IdenticalElements(String),

    /// `min_temp` is not strictly below `max_temp`, or either bound is not finite.
    #[error("invalid temperature range: {min} must be below {max}")]
    InvalidTemperatureRange {
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },

    /// A region polygon with fewer than three vertices.
    #[error("region `{label}` has {count} vertices, at least 3 are required")]
    TooFewVertices {
        /// Phase label of the offending region.
        label: String,
        /// Number of vertices supplied.
        count: usize,
    },

    /// A boundary curve with no points.
    #[error("boundary curve `{name}` has no points")]
    EmptyCurve {
        /// Curve name.
        name: String,
    },

    /// A vertex, label anchor or curve point outside the diagram bounds,
    /// or with a non-finite coordinate.
    #[error("`{owner}` has a point outside the diagram: T = {temperature}, x = {composition}")]
    PointOutOfBounds {
        /// Region label or curve name owning the point.
        owner: String,
        /// Offending temperature.
        temperature: f64,
        /// Offending composition.
        composition: f64,
    },

    /// A system for this unordered pair is already registered.
    #[error("a system for {element_a}-{element_b} is already registered")]
    DuplicateSystem {
        /// First element of the rejected system.
        element_a: String,
        /// Second element of the rejected system.
        element_b: String,
    },
}

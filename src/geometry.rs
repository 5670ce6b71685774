//! Geometry primitives for phase diagrams.
//!
//! A phase diagram lives in (composition, temperature) space. Composition is the
//! x-axis, temperature the y-axis. Regions are simple polygons given as an ordered
//! vertex list that closes implicitly (last vertex connects back to the first).
//!
//! # Invariants
//! - **GEO-001**: [`contains_point`] is pure and total for any finite point.
//! - **GEO-002**: Horizontal edges never register a crossing (no division by zero,
//!   no double counting at shared horizontal boundaries).
//! - **GEO-003**: Edges are half-open: a point on a vertical edge belongs to the
//!   polygon to its right, a point on a horizontal edge to the polygon above it.
//!   Two polygons that abut along an edge therefore never both claim that edge.
//! - **GEO-004**: [`on_boundary`] is closed: vertices and every point of every edge,
//!   including the closing edge, are on the boundary.

/// A point in a binary phase diagram.
///
/// `composition` is the fraction of the second element of the pair, in [0.0, 1.0].
/// Temperatures are in °C throughout the crate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhasePoint {
    /// Temperature in °C (y-axis).
    pub temperature: f64,
    /// Fraction of the second element, 0.0 to 1.0 (x-axis).
    pub composition: f64,
}

impl PhasePoint {
    /// Construct a point from a temperature and a composition fraction.
    pub const fn new(temperature: f64, composition: f64) -> Self {
        Self { temperature, composition }
    }

    /// `true` when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.temperature.is_finite() && self.composition.is_finite()
    }
}

/// `(temperature, composition)` tuples, the form used by the reference data tables.
impl From<(f64, f64)> for PhasePoint {
    fn from((temperature, composition): (f64, f64)) -> Self {
        Self::new(temperature, composition)
    }
}

/// Even-odd ray casting test.
///
/// Casts a horizontal ray from `p` toward increasing composition and counts the
/// polygon edges it crosses. An edge counts when exactly one endpoint lies strictly
/// above `p.temperature` and the interpolated crossing lies strictly to the right of
/// `p.composition`. Odd count means inside.
///
/// Polygons with fewer than three vertices enclose nothing and always return `false`.
pub fn contains_point(boundary: &[PhasePoint], p: PhasePoint) -> bool {
    if boundary.len() < 3 {
        return false;
    }

    let x = p.composition;
    let y = p.temperature;
    let mut inside = false;

    let mut j = boundary.len() - 1;
    for i in 0..boundary.len() {
        let (xi, yi) = (boundary[i].composition, boundary[i].temperature);
        let (xj, yj) = (boundary[j].composition, boundary[j].temperature);
        j = i;

        if (yi > y) == (yj > y) {
            continue;
        }
        let dy = yj - yi;
        if dy == 0.0 {
            continue; // GEO-002
        }
        let x_cross = (xj - xi) * (y - yi) / dy + xi;
        if x < x_cross {
            inside = !inside;
        }
    }

    inside
}

/// Collinearity slack, relative to the edge's extent.
const EDGE_TOLERANCE: f64 = 1e-9;

/// `true` when `p` lies on an edge of the polygon (GEO-004).
///
/// Complements [`contains_point`], whose half-open edges leave the right and top
/// sides unclaimed. Non-finite points are never on a boundary.
pub fn on_boundary(boundary: &[PhasePoint], p: PhasePoint) -> bool {
    if boundary.len() < 3 || !p.is_finite() {
        return false;
    }

    let mut j = boundary.len() - 1;
    for i in 0..boundary.len() {
        let (a, b) = (boundary[j], boundary[i]);
        j = i;

        let dx = b.composition - a.composition;
        let dy = b.temperature - a.temperature;
        let cross = dx * (p.temperature - a.temperature) - dy * (p.composition - a.composition);
        if cross.abs() > EDGE_TOLERANCE * (dx.abs() + dy.abs()) {
            continue;
        }
        let within_x = p.composition >= a.composition.min(b.composition)
            && p.composition <= a.composition.max(b.composition);
        let within_y = p.temperature >= a.temperature.min(b.temperature)
            && p.temperature <= a.temperature.max(b.temperature);
        if within_x && within_y {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> [PhasePoint; 4] {
        [
            PhasePoint::new(0.0, 0.0),
            PhasePoint::new(0.0, 1.0),
            PhasePoint::new(1.0, 1.0),
            PhasePoint::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_unit_square_centre_is_inside() {
        assert!(contains_point(&unit_square(), PhasePoint::new(0.5, 0.5)));
    }

    #[test]
    fn test_unit_square_outside_points() {
        let square = unit_square();
        assert!(!contains_point(&square, PhasePoint::new(1.5, 1.5)));
        assert!(!contains_point(&square, PhasePoint::new(0.5, -0.1)));
        assert!(!contains_point(&square, PhasePoint::new(-0.5, 0.5)));
    }

    #[test]
    fn test_half_open_edges() {
        let square = unit_square();
        // Left edge (composition = 0) is claimed, right edge (composition = 1) is not.
        assert!(contains_point(&square, PhasePoint::new(0.5, 0.0)));
        assert!(!contains_point(&square, PhasePoint::new(0.5, 1.0)));
        // Bottom edge (temperature = 0) is claimed, top edge (temperature = 1) is not.
        assert!(contains_point(&square, PhasePoint::new(0.0, 0.5)));
        assert!(!contains_point(&square, PhasePoint::new(1.0, 0.5)));
    }

    #[test]
    fn test_horizontal_edges_do_not_double_count() {
        // L-shape: full width up to T = 0.5, left half only up to T = 1.0.
        let stair = [
            PhasePoint::new(0.0, 0.0),
            PhasePoint::new(0.0, 2.0),
            PhasePoint::new(0.5, 2.0),
            PhasePoint::new(0.5, 1.0),
            PhasePoint::new(1.0, 1.0),
            PhasePoint::new(1.0, 0.0),
        ];
        assert!(contains_point(&stair, PhasePoint::new(0.25, 0.5)));
        assert!(contains_point(&stair, PhasePoint::new(0.25, 1.5)));
        assert!(!contains_point(&stair, PhasePoint::new(0.75, 1.5)));
        // Ray exactly along the horizontal step at T = 0.5.
        assert!(contains_point(&stair, PhasePoint::new(0.5, 0.25)));
    }

    #[test]
    fn test_slanted_edge_interpolation() {
        // Triangle with hypotenuse from (T=0, x=1) to (T=1, x=0).
        let tri = [
            PhasePoint::new(0.0, 0.0),
            PhasePoint::new(0.0, 1.0),
            PhasePoint::new(1.0, 0.0),
        ];
        assert!(contains_point(&tri, PhasePoint::new(0.25, 0.5)));
        assert!(!contains_point(&tri, PhasePoint::new(0.75, 0.5)));
    }

    #[test]
    fn test_degenerate_polygons_enclose_nothing() {
        let line = [PhasePoint::new(0.0, 0.0), PhasePoint::new(1.0, 1.0)];
        assert!(!contains_point(&line, PhasePoint::new(0.5, 0.5)));
        assert!(!contains_point(&[], PhasePoint::new(0.0, 0.0)));
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let mut square = unit_square();
        square.reverse();
        assert!(contains_point(&square, PhasePoint::new(0.5, 0.5)));
        assert!(!contains_point(&square, PhasePoint::new(1.5, 0.5)));
    }

    #[test]
    fn test_on_boundary_covers_every_side() {
        let square = unit_square();
        for p in [(0.5, 0.0), (0.5, 1.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 0.0)] {
            assert!(on_boundary(&square, PhasePoint::from(p)), "{p:?}");
        }
        assert!(!on_boundary(&square, PhasePoint::new(0.5, 0.5)));
        assert!(!on_boundary(&square, PhasePoint::new(0.5, 1.5)));
        assert!(!on_boundary(&square, PhasePoint::new(f64::NAN, 0.0)));
    }

    #[test]
    fn test_on_boundary_slanted_edge() {
        let tri = [
            PhasePoint::new(0.0, 0.0),
            PhasePoint::new(0.0, 1.0),
            PhasePoint::new(1.0, 0.0),
        ];
        assert!(on_boundary(&tri, PhasePoint::new(0.5, 0.5)));
        assert!(!on_boundary(&tri, PhasePoint::new(0.5, 0.25)));
        // Collinear with the hypotenuse but past its end.
        assert!(!on_boundary(&tri, PhasePoint::new(1.5, -0.5)));
    }

    #[test]
    fn test_from_tuple_is_temperature_then_composition() {
        let p = PhasePoint::from((727.0, 0.0077));
        assert_eq!(p.temperature, 727.0);
        assert_eq!(p.composition, 0.0077);
        assert!(p.is_finite());
        assert!(!PhasePoint::new(f64::NAN, 0.0).is_finite());
    }
}

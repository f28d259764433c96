//! Straight-line distance estimate for A*.

use crate::models::Node;

/// Meters per degree used to turn coordinate deltas into edge-distance units.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Planar straight-line distance between two nodes, in meters.
///
/// Treats latitude and longitude degrees as the same length. This ignores
/// the shrinking of longitude degrees away from the equator and the Earth's
/// curvature, so it is only an approximation: it is admissible when edge
/// distances are at least the planar-degree distance scaled by
/// [`METERS_PER_DEGREE`], which real road data at high latitudes may not
/// satisfy. A* can then return a slightly suboptimal path.
///
/// # Examples
///
/// ```
/// use u_routesim::models::Node;
/// use u_routesim::distance::heuristic_distance;
///
/// let a = Node::new("a", 0.0, 0.0);
/// let b = Node::new("b", 0.003, 0.004);
/// assert!((heuristic_distance(&a, &b) - 555.0).abs() < 1e-6);
/// ```
pub fn heuristic_distance(from: &Node, to: &Node) -> f64 {
    let dlat = from.lat() - to.lat();
    let dlng = from.lng() - to.lng();
    (dlat * dlat + dlng * dlng).sqrt() * METERS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_for_same_point() {
        let a = Node::new("a", 10.0, 20.0);
        assert_eq!(heuristic_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Node::new("a", 1.0, 2.0);
        let b = Node::new("b", 1.5, 2.5);
        assert!((heuristic_distance(&a, &b) - heuristic_distance(&b, &a)).abs() < 1e-10);
    }

    #[test]
    fn test_one_degree() {
        let a = Node::new("a", 0.0, 0.0);
        let b = Node::new("b", 1.0, 0.0);
        assert!((heuristic_distance(&a, &b) - METERS_PER_DEGREE).abs() < 1e-10);
    }
}

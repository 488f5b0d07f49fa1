//! Geographic distance approximation.
//!
//! Detour pruning only needs a rough straight-line distance between
//! two stops, so this uses an equirectangular projection rather than a
//! full geodesic: accurate enough at transit-network ranges and cheap
//! to evaluate in the inner search loop.

use crate::domain::Node;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate great-circle distance between two stops in kilometres,
/// via an equirectangular projection.
///
/// Pure and deterministic; symmetric in its arguments.
pub fn equirectangular_km(a: &Node, b: &Node) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let lon1 = a.lon.to_radians();
    let lon2 = b.lon.to_radians();

    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;

    (x * x + y * y).sqrt() * EARTH_RADIUS_KM
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeCode;

    fn node(code: &str, lat: f64, lon: f64) -> Node {
        Node::new(NodeCode::parse(code).unwrap(), code, lat, lon).unwrap()
    }

    #[test]
    fn coincident_stops_are_zero_apart() {
        let a = node("A", 17.3850, 78.4867);
        let b = node("B", 17.3850, 78.4867);
        assert_eq!(equirectangular_km(&a, &b), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree of latitude is ~111.2 km everywhere.
        let a = node("A", 0.0, 0.0);
        let b = node("B", 1.0, 0.0);
        let d = equirectangular_km(&a, &b);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = node("A", 0.0, 10.0);
        let b = node("B", 0.0, 11.0);
        let d = equirectangular_km(&a, &b);
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn longitude_shrinks_away_from_equator() {
        let a = node("A", 60.0, 10.0);
        let b = node("B", 60.0, 11.0);
        let d = equirectangular_km(&a, &b);
        // cos(60°) = 0.5
        assert!((d - 55.6).abs() < 0.5, "got {d}");
    }

    #[test]
    fn hyderabad_to_chennai() {
        let hyd = node("HYB", 17.3850, 78.4867);
        let mas = node("MAS", 13.0827, 80.2707);
        let d = equirectangular_km(&hyd, &mas);
        // Roughly 515 km as the crow flies.
        assert!((500.0..530.0).contains(&d), "got {d}");
    }
}

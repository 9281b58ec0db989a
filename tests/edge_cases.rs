use georange::{
    Coordinate, GeoRangeError, QueryPlan, bounding_box_bits, bounding_box_coordinates, encode,
    geohash_queries, haversine_km, query_for_geohash,
};

fn assert_covered(center: Coordinate, radius_m: f64, point: Coordinate) {
    let distance_km = haversine_km(&center, &point).unwrap();
    assert!(
        distance_km * 1000.0 <= radius_m,
        "{point} is {distance_km}km from {center}, outside the test radius"
    );

    let plan = QueryPlan::new(center, radius_m).unwrap();
    for precision in [plan.precision, 10, 12] {
        let hash = encode(&point, precision).unwrap();
        assert!(
            plan.covers(&hash),
            "{point} ({hash}) not covered by {:?} around {center}",
            plan.ranges
        );
    }
}

/// Test 1: circle containing the north pole reaches across it
#[test]
fn test_north_pole_crossing() {
    let center = Coordinate::new(89.95, 0.0);
    assert_covered(center, 20_000.0, Coordinate::new(89.95, 180.0));
    assert_covered(center, 20_000.0, Coordinate::new(89.99, -90.0));
    assert_covered(center, 20_000.0, Coordinate::new(90.0, 0.0));
}

/// Test 2: same at the south pole
#[test]
fn test_south_pole_crossing() {
    let center = Coordinate::new(-89.9, 45.0);
    assert_covered(center, 30_000.0, Coordinate::new(-89.9, -135.0));
    assert_covered(center, 30_000.0, Coordinate::new(-90.0, 0.0));
}

/// Test 3: circles straddling the antimeridian
#[test]
fn test_antimeridian() {
    let center = Coordinate::new(0.0, 180.0);
    assert_covered(center, 10_000.0, Coordinate::new(0.0, -179.95));
    assert_covered(center, 10_000.0, Coordinate::new(0.03, 179.95));

    let fiji = Coordinate::new(-17.7134, -179.99);
    assert_covered(fiji, 15_000.0, Coordinate::new(-17.70, 179.95));
}

/// Test 4: equator and prime meridian, where encoding ties at the first split
#[test]
fn test_origin_quadrants() {
    let center = Coordinate::new(0.0, 0.0);
    for point in [
        Coordinate::new(0.001, 0.001),
        Coordinate::new(-0.001, 0.001),
        Coordinate::new(0.001, -0.001),
        Coordinate::new(-0.001, -0.001),
        Coordinate::new(0.0, 0.0),
    ] {
        assert_covered(center, 1_000.0, point);
    }
}

/// Test 5: zero radius still covers the center itself
#[test]
fn test_zero_radius() {
    let center = Coordinate::new(37.7749, -122.4194);
    let ranges = geohash_queries(&center, 0.0).unwrap();
    assert_eq!(ranges.len(), 1);
    assert_covered(center, 0.0, center);
}

/// Test 6: radii too small to resolve in longitude fall back to one bit
#[test]
fn test_sub_decimeter_radius() {
    let center = Coordinate::new(37.7749, -122.4194);
    assert_eq!(bounding_box_bits(&center, 0.05).unwrap(), 1);
    assert_covered(center, 0.05, Coordinate::new(37.7749, -122.4194));
}

/// Test 7: a radius larger than half the circumference covers everything
#[test]
fn test_whole_earth_radius() {
    let center = Coordinate::new(12.0, 34.0);
    let plan = QueryPlan::new(center, 25_000_000.0).unwrap();
    assert_eq!(plan.bits, 1);
    for point in [
        Coordinate::new(-12.0, -146.0),
        Coordinate::new(90.0, 0.0),
        Coordinate::new(-90.0, 180.0),
        Coordinate::new(0.0, -180.0),
    ] {
        assert!(plan.covers(&encode(&point, 10).unwrap()), "{point} missed");
    }
}

/// Test 8: extreme but valid inputs
#[test]
fn test_boundary_coordinates_are_accepted() {
    for corner in [
        Coordinate::new(90.0, 180.0),
        Coordinate::new(90.0, -180.0),
        Coordinate::new(-90.0, 180.0),
        Coordinate::new(-90.0, -180.0),
    ] {
        let plan = QueryPlan::new(corner, 1_000.0).unwrap();
        assert!(!plan.is_empty());
        assert!(plan.covers(&encode(&corner, 10).unwrap()));
    }
}

/// Test 9: invalid inputs surface as typed errors
#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        geohash_queries(&Coordinate::new(f64::NAN, 0.0), 10.0),
        Err(GeoRangeError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        geohash_queries(&Coordinate::new(0.0, 0.0), f64::INFINITY),
        Err(GeoRangeError::InvalidRadius(_))
    ));
    assert!(matches!(
        query_for_geohash("dr5o", 20),
        Err(GeoRangeError::InvalidGeohash(_))
    ));
    assert!(matches!(
        query_for_geohash("DR5", 10),
        Err(GeoRangeError::InvalidGeohash(_))
    ));
}

/// Test 10: very long geohashes are truncated to the planned precision
#[test]
fn test_long_geohash_truncated() {
    let hash = "u4pruydqqvjxxxxxxxxxxx";
    assert_eq!(hash.len(), 22);
    let range = query_for_geohash(hash, 110).unwrap();
    assert_eq!(range.start, hash);
    assert!(range.contains(hash));
}

/// Test 11: a point just inside the radius due east, where the cell boundary
/// falls between the ellipsoidal and the spherical longitude extent
#[test]
fn test_rim_due_east_across_cell_boundary() {
    let center = Coordinate::new(13.04388, 166.65351445);
    let point = Coordinate::new(13.04388, 166.6536713);
    assert_covered(center, 17.0, point);
}

/// Test 12: a point just inside the radius due north, where the cell
/// boundary falls between the spherical latitude extent and the sample row
#[test]
fn test_rim_due_north_across_cell_boundary() {
    let center = Coordinate::new(-0.0083, -48.5439);
    let point = Coordinate::new(5.5936, -48.5439);
    assert_covered(center, 622_910.0, point);
}

/// Test 13: sample rows and columns reach the full radius on the sphere
#[test]
fn test_bounding_box_reaches_radius() {
    let center = Coordinate::new(13.04388, 166.65351445);
    let points = bounding_box_coordinates(&center, 17.0).unwrap();
    let east_m = haversine_km(&center, &points[2]).unwrap() * 1000.0;
    assert!(east_m >= 17.0 * (1.0 - 1e-9), "east sample only {east_m}m out");
}

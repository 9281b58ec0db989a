use georange::prelude::*;
use georange::{DistanceUnit, bounding_box_bits, query_for_geohash};
use std::collections::BTreeMap;

/// A toy document store: one ordered index on the geohash field, the only
/// query it supports is a range scan over that field.
struct OrderedStore {
    by_geohash: BTreeMap<String, Vec<(String, Coordinate)>>,
}

impl OrderedStore {
    fn new(engine: &GeoQueryEngine, records: &[(&str, Coordinate)]) -> Self {
        let mut by_geohash: BTreeMap<String, Vec<(String, Coordinate)>> = BTreeMap::new();
        for (key, location) in records {
            let geohash = engine.index_key(location).expect("valid record location");
            by_geohash
                .entry(geohash)
                .or_default()
                .push((key.to_string(), *location));
        }
        Self { by_geohash }
    }

    fn range_scan(&self, range: &QueryRange) -> Vec<(String, Coordinate)> {
        self.by_geohash
            .range(range.start.clone()..range.end.clone())
            .flat_map(|(_, records)| records.iter().cloned())
            .collect()
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn manhattan_records() -> Vec<(&'static str, Coordinate)> {
    vec![
        ("city-hall", Coordinate::new(40.7127, -74.0059)),
        ("wall-street", Coordinate::new(40.7060, -74.0088)),
        ("empire-state", Coordinate::new(40.7484, -73.9857)),
        ("statue-of-liberty", Coordinate::new(40.6892, -74.0445)),
        ("central-park", Coordinate::new(40.7829, -73.9654)),
        ("jfk-airport", Coordinate::new(40.6413, -73.7781)),
        ("newark-airport", Coordinate::new(40.6895, -74.1745)),
        ("philadelphia", Coordinate::new(39.9526, -75.1652)),
    ]
}

#[test]
fn test_end_to_end_search_nyc() {
    init_logger();

    let engine = GeoQueryEngine::default();
    let store = OrderedStore::new(&engine, &manhattan_records());

    let center = Coordinate::new(40.7128, -74.0060);
    let radius_m = 5_000.0;

    let plan = engine.plan(center, radius_m).expect("plan");
    assert!((1..=110).contains(&plan.bits));
    assert!((1..=9).contains(&plan.len()));

    let candidates: Vec<_> = plan.iter().flat_map(|r| store.range_scan(r)).collect();
    let results = engine.filter(&center, radius_m, candidates).expect("filter");

    let keys: Vec<_> = results.neighbors.iter().map(|n| n.item.0.as_str()).collect();
    assert_eq!(
        keys,
        ["city-hall", "wall-street", "statue-of-liberty", "empire-state"]
    );
    for neighbor in &results.neighbors {
        assert!(neighbor.distance_km <= 5.0);
    }
}

#[test]
fn test_ranges_find_every_record_brute_force_finds() {
    let engine = GeoQueryEngine::default();
    let records = manhattan_records();
    let store = OrderedStore::new(&engine, &records);

    let center = Coordinate::new(40.7300, -73.9950);
    for radius_m in [500.0, 2_000.0, 8_000.0, 25_000.0, 150_000.0] {
        let plan = engine.plan(center, radius_m).unwrap();
        let candidates: Vec<_> = plan.iter().flat_map(|r| store.range_scan(r)).collect();
        let found = engine.filter(&center, radius_m, candidates).unwrap().into_items();

        let expected = filter_candidates(
            &center,
            radius_m,
            records.iter().map(|(k, c)| (k.to_string(), *c)),
        )
        .unwrap()
        .into_items();

        assert_eq!(found, expected, "radius {radius_m}");
    }
}

#[test]
fn test_new_york_5km_ranges() {
    let center = Coordinate::new(40.7128, -74.0060);

    let bits = bounding_box_bits(&center, 5_000.0).unwrap();
    assert!((1..=110).contains(&bits));

    let ranges = geohash_queries(&center, 5_000.0).unwrap();
    assert!((1..=9).contains(&ranges.len()));
    for range in &ranges {
        assert!(range.start <= range.end || range.end == format!("{}~", range.start));
    }
}

#[test]
fn test_single_symbol_range_is_half_open() {
    let range = query_for_geohash("s", 5).unwrap();
    assert_eq!(range.start, "s");
    assert!(range.contains("s"));
    for symbol in "0123456789bcdefghjkmnpqrtuvwxyz".chars() {
        assert!(!range.contains(&symbol.to_string()), "{symbol} should be outside");
    }
}

#[test]
fn test_distances_presented_in_miles() {
    let engine = GeoQueryEngine::new(
        Config::default()
            .with_distance_unit(DistanceUnit::Miles)
            .with_distance_decimals(1),
    )
    .unwrap();

    let center = Coordinate::new(0.0, 0.0);
    let results = engine
        .filter(&center, 200_000.0, vec![("east", Coordinate::new(0.0, 1.0))])
        .unwrap();

    let km = results.neighbors[0].distance_km;
    assert!((km - 111.19).abs() < 0.5);
    assert_eq!(engine.display_distance(km), 69.1);
}

#[test]
fn test_config_from_json_drives_key_length() {
    let config = Config::from_json(r#"{ "storage_precision": 12 }"#).unwrap();
    let engine = GeoQueryEngine::new(config).unwrap();
    let key = engine.index_key(&Coordinate::new(-33.8688, 151.2093)).unwrap();
    assert_eq!(key.len(), 12);
    assert_eq!(&key[..10], encode(&Coordinate::new(-33.8688, 151.2093), 10).unwrap());
}

#[test]
fn test_errors_do_not_abort() {
    let engine = GeoQueryEngine::default();

    let err = engine.plan(Coordinate::new(91.0, 0.0), 1_000.0).unwrap_err();
    assert!(matches!(err, GeoRangeError::InvalidCoordinate { .. }));
    assert!(err.to_string().contains("latitude"));

    let err = engine.plan(Coordinate::new(0.0, 181.0), 1_000.0).unwrap_err();
    assert!(err.to_string().contains("longitude"));

    // The engine keeps working after rejecting input.
    assert!(engine.plan(Coordinate::new(90.0, 180.0), 1_000.0).is_ok());
    assert!(engine.plan(Coordinate::new(-90.0, -180.0), 1_000.0).is_ok());
}

#[test]
fn test_sub_meter_search_finds_stored_record() {
    let engine = GeoQueryEngine::default();
    let here = Coordinate::new(0.5, 0.5);
    let store = OrderedStore::new(&engine, &[("here", here)]);

    let plan = engine.plan(here, 0.25).unwrap();
    let candidates: Vec<_> = plan.iter().flat_map(|r| store.range_scan(r)).collect();
    let found = engine.filter(&here, 0.25, candidates).unwrap().into_items();

    assert_eq!(found, [("here".to_string(), here)]);
}

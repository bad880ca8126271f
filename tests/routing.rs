mod graph;

use railway_routes::{Conditions, Distance, Railway, RouteRecord, Trip};
use test_log::test;

use crate::graph::RAILWAY;

#[test]
fn routes_count_001() {
    let railway: &Railway = &RAILWAY;
    let conditions = Conditions::default().with_max_stops(3);

    assert_eq!(railway.routes_count("C", "C", &conditions), Ok(2));
}

#[test]
fn routes_count_002() {
    let railway: &Railway = &RAILWAY;
    let conditions = Conditions::default().with_exact_stops(2);

    assert_eq!(railway.routes_count("A", "C", &conditions), Ok(2));
}

#[test]
fn routes_count_003() {
    let railway: &Railway = &RAILWAY;
    let conditions = Conditions::default().with_max_distance(Distance::from_units(30));

    assert_eq!(railway.routes_count("C", "C", &conditions), Ok(2));
}

#[test]
fn routes_count_004() {
    let railway: &Railway = &RAILWAY;

    // C -> D -> C (16) and C -> E -> B -> C (9) are both made of at most 3 stops
    let conditions = Conditions::default().with_max_stops(2);
    assert_eq!(railway.routes_count("C", "C", &conditions), Ok(1));

    let conditions = Conditions::default().with_exact_stops(3);
    assert_eq!(railway.routes_count("C", "C", &conditions), Ok(1));

    let conditions = Conditions::default()
        .with_max_stops(3)
        .with_max_distance(Distance::from_units(20));
    assert_eq!(railway.routes_count("C", "C", &conditions), Ok(1));
}

#[test]
fn routes_count_005() {
    let railway: &Railway = &RAILWAY;
    let conditions = Conditions::default().with_max_stops(10);

    assert_eq!(railway.routes_count("C", "A", &conditions), Ok(0));
}

#[test]
fn routes_count_006() {
    let railway: &Railway = &RAILWAY;
    let conditions = Conditions::from_pairs([("maxStops", "3")]).unwrap();

    let first = railway.routes_count("C", "C", &conditions);
    let second = railway.routes_count("C", "C", &conditions);
    assert_eq!(first, second);
}

#[test]
fn shortest_path_001() {
    let railway: &Railway = &RAILWAY;

    assert_eq!(
        railway.shortest_path("A", "C"),
        Trip::Found(Distance::from_units(9))
    );
}

#[test]
fn shortest_path_002() {
    let railway: &Railway = &RAILWAY;

    assert_eq!(
        railway.shortest_path("B", "B"),
        Trip::Found(Distance::from_units(9))
    );
}

#[test]
fn shortest_path_003() {
    let railway: &Railway = &RAILWAY;

    assert_eq!(railway.shortest_path("C", "A"), Trip::NoSuchRoute);
    assert_eq!(railway.shortest_path("A", "A"), Trip::NoSuchRoute);
}

#[test]
fn shortest_path_004() {
    let railway: &Railway = &RAILWAY;

    assert_eq!(
        railway.shortest_path("E", "C"),
        Trip::Found(Distance::from_units(7))
    );
    assert_eq!(
        railway.shortest_path("A", "E"),
        Trip::Found(Distance::from_units(7))
    );
    assert_eq!(railway.shortest_path("A", "E"), railway.shortest_path("A", "E"));
}

#[test]
fn routes_from_001() {
    let railway: &Railway = &RAILWAY;
    let network = railway.network();

    let table = railway.routes_from("C").unwrap();
    let c = network.town_id("C").unwrap();

    assert_eq!(table.origin(), c);
    assert_eq!(
        table.routes_to(c),
        [
            RouteRecord {
                stops: 3,
                distance: Distance::from_units(9)
            },
            RouteRecord {
                stops: 2,
                distance: Distance::from_units(16)
            }
        ]
    );

    // every record is a genuine walk: at least one stop, at least one edge long
    for (town, _) in network.towns() {
        assert!(table.routes_to(town).iter().all(|r| r.stops > 0 && r.distance > Distance::ZERO));
    }
}

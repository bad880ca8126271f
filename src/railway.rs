use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::routing::enumerate_routes;
use crate::routing::filter::filter_routes;
use crate::{
    Conditions, ConditionsError, NetworkError, RailNetwork, RouteTable, Summary, TownId, Trip,
};

/// Railway network answering distance, route counting and shortest path queries.
///
/// Routes are enumerated the first time a query starts from a given origin and memoized for the
/// lifetime of the railway. Each origin has its own slot, initialized at most once even when the
/// railway is shared between threads.
#[derive(Debug)]
pub struct Railway {
    network: RailNetwork,
    routes: Vec<OnceLock<RouteTable>>,
}

impl Railway {
    /// Builds the railway from typed `(origin, destination, distance)` connections.
    pub fn new<I, T>(edges: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (T, T, i64)>,
        T: Into<String>,
    {
        RailNetwork::new(edges).map(Self::from)
    }

    /// Builds the railway from raw `[origin, destination, distance]` sections.
    pub fn from_sections<I, S, F>(sections: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[F]>,
        F: AsRef<str>,
    {
        RailNetwork::from_sections(sections).map(Self::from)
    }

    pub const fn network(&self) -> &RailNetwork {
        &self.network
    }

    /// Total distance when travelling through the given sequence of towns.
    pub fn distance<T: AsRef<str>>(&self, route: &[T]) -> Trip {
        self.network.distance(route)
    }

    /// Counts the routes from origin to target that fulfill the conditions.
    ///
    /// The conditions are validated before any route is enumerated.
    /// Unknown towns have no routes.
    pub fn routes_count(
        &self,
        origin: &str,
        target: &str,
        conditions: &Conditions,
    ) -> Result<usize, ConditionsError> {
        conditions.validate()?;

        let Some(target) = self.network.town_id(target) else {
            return Ok(0);
        };
        let Some(table) = self.routes_from(origin) else {
            return Ok(0);
        };

        let count = filter_routes(table.routes_to(target), conditions).len();
        debug!("Counted {count} routes {origin} -> {target:?} with {conditions:?}");

        Ok(count)
    }

    /// Shortest distance from origin to target.
    ///
    /// When origin and target are the same town this is the shortest cycle through it.
    pub fn shortest_path(&self, origin: &str, target: &str) -> Trip {
        let Some(target) = self.network.town_id(target) else {
            return Trip::NoSuchRoute;
        };

        self.routes_from(origin)
            .and_then(|table| table.shortest(target))
            .into()
    }

    /// Gets all the routes starting from the origin, enumerating them on first access.
    /// Returns None if the origin doesn't belong to the network.
    pub fn routes_from(&self, origin: &str) -> Option<&RouteTable> {
        self.network
            .town_id(origin)
            .and_then(|origin| self.routes_from_town(origin))
    }

    fn routes_from_town(&self, origin: TownId) -> Option<&RouteTable> {
        let slot = self.routes.get(origin.index())?;
        Some(slot.get_or_init(|| enumerate_routes(&self.network, origin)))
    }

    pub fn summary(&self) -> Summary {
        self.network.summary()
    }
}

impl From<RailNetwork> for Railway {
    fn from(network: RailNetwork) -> Self {
        let routes = (0..network.town_count()).map(|_| OnceLock::new()).collect();
        Self { network, routes }
    }
}

impl fmt::Display for Railway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.network, f)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::Distance;

    fn railway() -> Railway {
        Railway::new([("A", "B", 5), ("B", "C", 4), ("C", "A", 3), ("C", "D", 2)]).unwrap()
    }

    #[test]
    fn railway_memo_001() {
        let railway = railway();
        assert!(railway.routes.iter().all(|slot| slot.get().is_none()));

        assert_eq!(
            railway.shortest_path("A", "D"),
            Trip::Found(Distance::from_units(11))
        );

        let a = railway.network().town_id("A").unwrap();
        let initialized: Vec<_> = railway
            .routes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(initialized, [a.index()]);

        let first = railway.routes_from("A").unwrap() as *const RouteTable;
        let second = railway.routes_from("A").unwrap() as *const RouteTable;
        assert_eq!(first, second);
    }

    #[test]
    fn railway_unknown_town_001() {
        let railway = railway();
        let conditions = Conditions::default().with_max_stops(3);

        assert_eq!(railway.routes_count("Z", "A", &conditions), Ok(0));
        assert_eq!(railway.routes_count("A", "Z", &conditions), Ok(0));
        assert_eq!(railway.shortest_path("Z", "A"), Trip::NoSuchRoute);
        assert_eq!(railway.shortest_path("A", "Z"), Trip::NoSuchRoute);
        assert!(railway.routes_from("Z").is_none());
    }

    #[test]
    fn railway_conditions_first_001() {
        let railway = railway();

        assert_eq!(
            railway.routes_count("A", "C", &Conditions::default()),
            Err(ConditionsError::Missing)
        );
        assert!(railway.routes.iter().all(|slot| slot.get().is_none()));
    }

    #[test]
    fn railway_shared_001() {
        let railway = &railway();

        let counts: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        railway.routes_count("A", "A", &Conditions::default().with_max_stops(3))
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(counts, [Ok(1), Ok(1), Ok(1), Ok(1)]);
    }

    #[test]
    fn railway_display_001() {
        assert_eq!(
            railway().to_string(),
            "towns: [A, B, C, D]\ntotal distance: 14"
        );
    }
}

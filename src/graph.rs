//! Immutable store of the railway network: the town registry and the directed edge distances.

mod matrix;

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::graph::matrix::Matrix;
use crate::{Distance, NetworkError, TownId, Trip};

/// A town of the network and the towns reachable from it through a single direct edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Town {
    pub name: String,
    /// Destinations in the order their edges were first given.
    pub destinations: Vec<TownId>,
}

/// Directed, positively weighted railway network.
///
/// Built once from a list of `(origin, destination, distance)` connections and never mutated
/// afterwards. Towns are registered the first time they appear, either as origin or destination,
/// and every town gets a dense [`TownId`] in registration order.
#[derive(Debug, Clone)]
pub struct RailNetwork {
    towns: Vec<Town>,
    index: FxHashMap<String, TownId>,
    distances: Matrix<Option<Distance>>,
}

/// Diagnostic overview of a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Town names sorted alphabetically.
    pub towns: Vec<String>,
    /// Sum of all the edge distances.
    pub total_distance: Distance,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "towns: [{}]\ntotal distance: {}",
            self.towns.join(", "),
            self.total_distance
        )
    }
}

impl RailNetwork {
    /// Builds the network from typed connections.
    ///
    /// Fails without building anything if any distance is zero or negative.
    pub fn new<I, T>(edges: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (T, T, i64)>,
        T: Into<String>,
    {
        let edges = edges
            .into_iter()
            .map(|(origin, destination, distance)| {
                Ok((origin.into(), destination.into(), positive_distance(distance)?))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        Self::build(edges)
    }

    /// Builds the network from raw sections, each one a list of fields that must be exactly
    /// `[origin, destination, distance]` with the distance written as an integer.
    ///
    /// Every section is validated before any state is built.
    pub fn from_sections<I, S, F>(sections: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[F]>,
        F: AsRef<str>,
    {
        let edges = sections
            .into_iter()
            .map(|section| parse_section(section.as_ref()))
            .collect::<Result<Vec<_>, NetworkError>>()?;

        Self::build(edges)
    }

    fn build(edges: Vec<(String, String, Distance)>) -> Result<Self, NetworkError> {
        let mut registry = TownRegistry::default();

        let edges = edges
            .into_iter()
            .map(|(origin, destination, distance)| {
                let origin = registry.get_or_insert(origin)?;
                let destination = registry.get_or_insert(destination)?;
                Ok((origin, destination, distance))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        let TownRegistry { mut towns, index } = registry;
        let mut distances = Matrix::new(towns.len(), None);

        for (origin, destination, distance) in edges {
            let Some(slot) = distances.get_mut(origin.index(), destination.index()) else {
                continue;
            };

            if let Some(previous) = slot.replace(distance) {
                warn!(
                    "Duplicate connection {} -> {}: {previous} replaced by {distance}",
                    towns[origin.index()].name,
                    towns[destination.index()].name
                );
            } else {
                towns[origin.index()].destinations.push(destination);
            }
        }

        let network = Self {
            towns,
            index,
            distances,
        };

        debug!(
            "Built network with {} towns and {} connections",
            network.town_count(),
            network.edge_count()
        );

        Ok(network)
    }

    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    pub fn edge_count(&self) -> usize {
        self.towns.iter().map(|t| t.destinations.len()).sum()
    }

    /// Gets the ID of the town with the given name, if it belongs to the network.
    pub fn town_id(&self, name: &str) -> Option<TownId> {
        self.index.get(name).copied()
    }

    pub fn town(&self, town: TownId) -> Option<&Town> {
        self.towns.get(town.index())
    }

    pub fn town_name(&self, town: TownId) -> Option<&str> {
        self.town(town).map(|t| t.name.as_str())
    }

    /// Gets an iterator over all the towns in registration order.
    pub fn towns(&self) -> impl Iterator<Item = (TownId, &Town)> {
        self.towns
            .iter()
            .enumerate()
            .filter_map(|(i, town)| Some((TownId::try_from(i).ok()?, town)))
    }

    /// Gets the towns reachable from the given town through a single direct edge.
    /// Returns an empty slice if the town doesn't belong to the network.
    pub fn destinations(&self, town: TownId) -> &[TownId] {
        self.town(town)
            .map(|t| t.destinations.as_slice())
            .unwrap_or(&[])
    }

    /// Gets the distance of the direct edge between the two towns, if any.
    pub fn edge_distance(&self, origin: TownId, destination: TownId) -> Option<Distance> {
        self.distances
            .get(origin.index(), destination.index())
            .copied()
            .flatten()
    }

    /// Total distance when travelling through the given sequence of towns.
    ///
    /// Returns [`Trip::NoSuchRoute`] if the sequence has fewer than two towns, contains an
    /// unknown town, or two consecutive towns are not directly connected.
    pub fn distance<T: AsRef<str>>(&self, route: &[T]) -> Trip {
        if route.len() < 2 {
            return Trip::NoSuchRoute;
        }

        route
            .windows(2)
            .map(|window| {
                let origin = self.town_id(window[0].as_ref())?;
                let destination = self.town_id(window[1].as_ref())?;
                self.edge_distance(origin, destination)
            })
            .sum::<Option<Distance>>()
            .into()
    }

    pub fn summary(&self) -> Summary {
        let mut towns: Vec<String> = self.towns.iter().map(|t| t.name.clone()).collect();
        towns.sort_unstable();

        Summary {
            towns,
            total_distance: self.distances.values().flatten().copied().sum(),
        }
    }
}

impl fmt::Display for RailNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

#[derive(Debug, Default)]
struct TownRegistry {
    towns: Vec<Town>,
    index: FxHashMap<String, TownId>,
}

impl TownRegistry {
    /// Fails once the registry holds more towns than a [`TownId`] can index.
    fn get_or_insert(&mut self, name: String) -> Result<TownId, NetworkError> {
        if let Some(&id) = self.index.get(&name) {
            return Ok(id);
        }

        let count = self.towns.len();
        let id = TownId::try_from(count).map_err(|_| NetworkError::TooManyTowns(count + 1))?;
        self.towns.push(Town {
            name: name.clone(),
            destinations: vec![],
        });
        self.index.insert(name, id);
        Ok(id)
    }
}

fn parse_section<F: AsRef<str>>(
    fields: &[F],
) -> Result<(String, String, Distance), NetworkError> {
    let [origin, destination, distance] = fields else {
        return Err(NetworkError::InvalidFormat(fields.len()));
    };

    let distance = distance.as_ref().trim();
    let distance = distance
        .parse::<i64>()
        .map_err(|_| NetworkError::NonNumericDistance(distance.to_string()))?;

    Ok((
        origin.as_ref().to_string(),
        destination.as_ref().to_string(),
        positive_distance(distance)?,
    ))
}

fn positive_distance(distance: i64) -> Result<Distance, NetworkError> {
    u64::try_from(distance)
        .ok()
        .filter(|&d| d > 0)
        .map(Distance::from_units)
        .ok_or(NetworkError::NonPositiveDistance(distance))
}

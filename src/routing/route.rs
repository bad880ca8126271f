use std::ops::Deref;

use crate::{Distance, RouteRecord, TownId};

/// Distinct walks reaching one town from a fixed origin, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes(Vec<RouteRecord>);

impl From<Vec<RouteRecord>> for Routes {
    fn from(routes: Vec<RouteRecord>) -> Self {
        Self(routes)
    }
}

impl Deref for Routes {
    type Target = Vec<RouteRecord>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Routes {
    pub(crate) fn push(&mut self, route: RouteRecord) {
        self.0.push(route);
    }

    pub(crate) fn append(&mut self, routes: &mut Vec<RouteRecord>) {
        self.0.append(routes);
    }

    /// Shortest distance among all the walks.
    pub fn shortest(&self) -> Option<Distance> {
        self.iter().map(|r| r.distance).min()
    }
}

/// All the walks discovered from one origin, for every town of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    origin: TownId,
    routes: Vec<Routes>,
}

impl RouteTable {
    pub(crate) fn new(origin: TownId, town_count: usize) -> Self {
        Self {
            origin,
            routes: vec![Routes::default(); town_count],
        }
    }

    pub const fn origin(&self) -> TownId {
        self.origin
    }

    /// Gets the walks from the origin to the given town.
    /// Returns an empty slice if the town doesn't belong to the network.
    pub fn routes_to(&self, town: TownId) -> &[RouteRecord] {
        self.routes
            .get(town.index())
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Shortest distance from the origin to the given town, if any walk reaches it.
    pub fn shortest(&self, town: TownId) -> Option<Distance> {
        self.routes.get(town.index()).and_then(Routes::shortest)
    }

    /// Total number of walks recorded for all the towns.
    pub fn len(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.iter().all(|r| r.is_empty())
    }

    pub(crate) fn routes_mut(&mut self, town: TownId) -> Option<&mut Routes> {
        self.routes.get_mut(town.index())
    }
}

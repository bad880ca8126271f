use std::fmt;
use std::iter::Sum;
use std::num::TryFromIntError;
use std::ops::{Add, AddAssign};

/// Distance between towns, measured in the (unitless) integer units of the network edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, distance| total + distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units())
    }
}

/// Index of a town in the network registry.
/// Towns are numbered in the order they are first seen while the network is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TownId(u32);

impl TownId {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for TownId {
    type Error = TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(Self)
    }
}

/// One distinct walk from a fixed origin to a fixed town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteRecord {
    /// Number of edges traversed by the walk.
    pub stops: u32,
    /// Sum of the edge distances along the walk.
    pub distance: Distance,
}

impl RouteRecord {
    /// Record of a walk made of a single direct edge.
    pub const fn direct(distance: Distance) -> Self {
        Self { stops: 1, distance }
    }

    /// Extends the walk by one more edge.
    pub fn extend(&self, distance: Distance) -> Self {
        Self {
            stops: self.stops + 1,
            distance: self.distance + distance,
        }
    }
}

/// Outcome of a distance query: either the total distance or the absence of any route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trip {
    Found(Distance),
    NoSuchRoute,
}

impl Trip {
    pub const NO_SUCH_ROUTE: &'static str = "NO SUCH ROUTE";

    pub const fn distance(&self) -> Option<Distance> {
        match self {
            Self::Found(distance) => Some(*distance),
            Self::NoSuchRoute => None,
        }
    }
}

impl From<Option<Distance>> for Trip {
    fn from(distance: Option<Distance>) -> Self {
        distance.map_or(Self::NoSuchRoute, Self::Found)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(distance) => write!(f, "{distance}"),
            Self::NoSuchRoute => f.write_str(Self::NO_SUCH_ROUTE),
        }
    }
}

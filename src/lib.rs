#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod railway;
mod routing;

pub use error::{ConditionsError, NetworkError};
pub use graph::{RailNetwork, Summary, Town};
pub use model::{Distance, RouteRecord, TownId, Trip};
pub use railway::Railway;
pub use routing::conditions::{ConditionKey, Conditions};
pub use routing::enumerate_routes;
pub use routing::filter::filter_routes;
pub use routing::route::{RouteTable, Routes};

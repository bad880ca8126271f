use crate::{Conditions, Distance, RouteRecord};

/// Applies the conditions to the routes, keeping their original order.
///
/// Stop conditions select routes individually. The distance condition then keeps the leading
/// routes whose running total distance stays within the limit, and drops everything from the
/// first route that exceeds it.
pub fn filter_routes(routes: &[RouteRecord], conditions: &Conditions) -> Vec<RouteRecord> {
    let Conditions {
        exact_stops,
        max_stops,
        max_distance,
    } = *conditions;

    let routes = routes.iter().copied().filter(move |route| {
        exact_stops.is_none_or(|stops| route.stops == stops)
            && max_stops.is_none_or(|stops| route.stops <= stops)
    });

    match max_distance {
        Some(max_distance) => within_distance(routes, max_distance).collect(),
        None => routes.collect(),
    }
}

fn within_distance(
    routes: impl Iterator<Item = RouteRecord>,
    max_distance: Distance,
) -> impl Iterator<Item = RouteRecord> {
    routes.scan(Distance::ZERO, move |total, route| {
        *total += route.distance;
        (*total <= max_distance).then_some(route)
    })
}

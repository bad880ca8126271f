use std::sync::LazyLock;

use railway_routes::Railway;

/// Reference network: AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7.
pub const CONNECTIONS: [(&str, &str, i64); 9] = [
    ("A", "B", 5),
    ("B", "C", 4),
    ("C", "D", 8),
    ("D", "C", 8),
    ("D", "E", 6),
    ("A", "D", 5),
    ("C", "E", 2),
    ("E", "B", 3),
    ("A", "E", 7),
];

pub static RAILWAY: LazyLock<Railway> = LazyLock::new(|| match Railway::new(CONNECTIONS) {
    Ok(railway) => railway,
    Err(e) => panic!("Cannot build reference railway: {e}"),
});

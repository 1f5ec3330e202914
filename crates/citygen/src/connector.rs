//! Connection metadata a prefab variant declares for its neighbors.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionSide {
    #[default]
    None,
    North,
    East,
    South,
    West,
    All,
}

impl ConnectionSide {
    pub fn covers(self, side: Self) -> bool {
        self == Self::All || self == side
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub side: ConnectionSide,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default)]
    pub is_exit: bool,
}

/// True when some connection on `side` offers the complementary direction:
/// an exit for a neighbor entering through it, an entry otherwise.
pub fn is_matching_connection(
    connections: &[Connection],
    side: ConnectionSide,
    is_entry: bool,
) -> bool {
    connections.iter().any(|connection| {
        connection.side.covers(side)
            && ((is_entry && connection.is_exit) || (!is_entry && connection.is_entry))
    })
}

//! Catalog collections counted by the admin dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five countable catalog collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Listener accounts.
    Users,
    /// Artist accounts.
    Artists,
    /// Published albums.
    Albums,
    /// Individual songs.
    Songs,
    /// User playlists.
    Playlists,
}

impl Collection {
    /// All collections, in dashboard order.
    pub const ALL: [Collection; 5] = [
        Self::Users,
        Self::Artists,
        Self::Albums,
        Self::Songs,
        Self::Playlists,
    ];

    /// Backing table name. Also used as the entity name in error messages.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Artists => "artists",
            Self::Albums => "albums",
            Self::Songs => "songs",
            Self::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

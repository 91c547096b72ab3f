use serde::{Deserialize, Serialize};

/// Franchise code, e.g. `NYY`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// League id of the franchise if the code is one of the current 30.
    pub fn league_id(&self) -> Option<u32> {
        FRANCHISES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, id)| *id)
    }

    pub fn is_current_franchise(&self) -> bool {
        self.league_id().is_some()
    }
}

impl From<&str> for TeamId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The puzzle's franchise codes and their league ids. Relocated clubs use the
/// puzzle's historical code (`ANA`, `FLA`, `TBD`).
pub const FRANCHISES: [(&str, u32); 30] = [
    ("BAL", 110),
    ("NYY", 147),
    ("TBD", 139),
    ("BOS", 111),
    ("TOR", 141),
    ("MIN", 142),
    ("CLE", 114),
    ("DET", 116),
    ("CHW", 145),
    ("KCR", 118),
    ("ANA", 108),
    ("TEX", 140),
    ("HOU", 117),
    ("SEA", 136),
    ("OAK", 133),
    ("ATL", 144),
    ("FLA", 146),
    ("PHI", 143),
    ("NYM", 121),
    ("WSN", 120),
    ("CIN", 113),
    ("MIL", 158),
    ("CHC", 112),
    ("PIT", 134),
    ("STL", 138),
    ("LAD", 119),
    ("SFG", 137),
    ("ARI", 109),
    ("SDP", 135),
    ("COL", 115),
];

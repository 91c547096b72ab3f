//! Player career records and the dataset loader.
//!
//! The dataset is the flat JSON produced by the scraper: award flags sit as
//! plain keys next to `id` on each team object and next to `name` on the
//! player. Loading types every flag against the award catalog once, so the
//! rest of the engine never probes raw keys.

use crate::award::{is_award_shaped, AwardId, AwardTimespan, CareerAward, SeasonAward};
use crate::team::TeamId;
use crate::{GridError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;

/// How firmly a held award's underlying statistic meets the league minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifiedStatus {
    Qualified,
    Unqualified,
}

impl QualifiedStatus {
    pub fn is_qualified(self) -> bool {
        self == QualifiedStatus::Qualified
    }

    /// The stronger of two statuses.
    pub fn best(self, other: QualifiedStatus) -> QualifiedStatus {
        if self.is_qualified() || other.is_qualified() {
            QualifiedStatus::Qualified
        } else {
            QualifiedStatus::Unqualified
        }
    }
}

/// One stretch with one franchise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStint {
    pub team: TeamId,
    pub season_awards: BTreeMap<SeasonAward, QualifiedStatus>,
}

impl TeamStint {
    pub fn new(team: impl Into<TeamId>) -> Self {
        Self {
            team: team.into(),
            season_awards: BTreeMap::new(),
        }
    }

    pub fn with_award(mut self, award: SeasonAward, status: QualifiedStatus) -> Self {
        self.season_awards.insert(award, status);
        self
    }
}

/// A player's career as far as the puzzle cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    /// `"startYear-endYear"`
    pub years: String,
    /// Stints in the order supplied by the dataset; not deduplicated
    pub teams: Vec<TeamStint>,
    pub career_awards: BTreeMap<CareerAward, QualifiedStatus>,
}

#[derive(Deserialize)]
struct RawStint {
    id: String,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawPlayer {
    id: String,
    name: String,
    #[serde(default)]
    years: String,
    #[serde(default)]
    teams: Vec<RawStint>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl PlayerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            years: String::new(),
            teams: Vec::new(),
            career_awards: BTreeMap::new(),
        }
    }

    pub fn with_stint(mut self, stint: TeamStint) -> Self {
        self.teams.push(stint);
        self
    }

    pub fn with_career_award(mut self, award: CareerAward, status: QualifiedStatus) -> Self {
        self.career_awards.insert(award, status);
        self
    }

    /// Parse and validate one record in scraper format.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawPlayer = serde_json::from_value(value)?;

        let mut teams = Vec::with_capacity(raw.teams.len());
        for stint in raw.teams {
            let mut season_awards = BTreeMap::new();
            for (key, value) in &stint.extra {
                match classify_key(key)? {
                    Some(AwardId::Season(award)) => {
                        if let Some(status) = parse_flag(key, value)? {
                            season_awards.insert(award, status);
                        }
                    }
                    Some(AwardId::Career(_)) => {
                        return Err(GridError::MisplacedAward {
                            award: key.clone(),
                            expected: AwardTimespan::Season,
                        })
                    }
                    None => {}
                }
            }
            teams.push(TeamStint {
                team: TeamId::new(stint.id),
                season_awards,
            });
        }

        let mut career_awards = BTreeMap::new();
        for (key, value) in &raw.extra {
            match classify_key(key)? {
                Some(AwardId::Career(award)) => {
                    if let Some(status) = parse_flag(key, value)? {
                        career_awards.insert(award, status);
                    }
                }
                Some(AwardId::Season(_)) => {
                    return Err(GridError::MisplacedAward {
                        award: key.clone(),
                        expected: AwardTimespan::Career,
                    })
                }
                None => {}
            }
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            years: raw.years,
            teams,
            career_awards,
        })
    }

    /// Distinct team ids in first-seen order.
    pub fn distinct_teams(&self) -> Vec<&TeamId> {
        let mut seen: Vec<&TeamId> = Vec::new();
        for stint in &self.teams {
            if !seen.contains(&&stint.team) {
                seen.push(&stint.team);
            }
        }
        seen
    }

    pub fn played_for(&self, team: &TeamId) -> bool {
        self.teams.iter().any(|s| &s.team == team)
    }

    /// Strongest status of `award` across every stint with `team`.
    pub fn season_award_at(&self, team: &TeamId, award: SeasonAward) -> Option<QualifiedStatus> {
        self.teams
            .iter()
            .filter(|s| &s.team == team)
            .filter_map(|s| s.season_awards.get(&award).copied())
            .reduce(QualifiedStatus::best)
    }

    /// Whether any stint anywhere carries `award`.
    pub fn has_season_award(&self, award: SeasonAward) -> bool {
        self.teams.iter().any(|s| s.season_awards.contains_key(&award))
    }

    pub fn career_award(&self, award: CareerAward) -> Option<QualifiedStatus> {
        self.career_awards.get(&award).copied()
    }

    /// Held career awards in catalog order.
    pub fn held_career_awards(&self) -> Vec<CareerAward> {
        self.career_awards.keys().copied().collect()
    }

    /// Drop stints with clubs outside the current franchise table.
    pub fn retain_current_franchises(&mut self) {
        let before = self.teams.len();
        self.teams.retain(|s| s.team.is_current_franchise());
        if self.teams.len() != before {
            tracing::debug!(
                player = %self.id,
                dropped = before - self.teams.len(),
                "dropped stints with non-current franchises"
            );
        }
    }
}

/// Load a JSON array of scraper-format player records.
pub fn load_players<R: Read>(reader: R) -> Result<Vec<PlayerRecord>> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    let players = values
        .into_iter()
        .map(PlayerRecord::from_json_value)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = players.len(), "loaded player records");
    Ok(players)
}

/// Find a player by id.
pub fn find_player<'a>(players: &'a [PlayerRecord], id: &str) -> Result<&'a PlayerRecord> {
    players
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| GridError::UnknownPlayer(id.to_string()))
}

fn classify_key(key: &str) -> Result<Option<AwardId>> {
    match key.parse::<AwardId>() {
        Ok(id) => Ok(Some(id)),
        Err(err) if is_award_shaped(key) => Err(err),
        Err(_) => Ok(None),
    }
}

fn parse_flag(key: &str, value: &Value) -> Result<Option<QualifiedStatus>> {
    let held = match value {
        Value::Null => None,
        Value::Bool(b) => b.then_some(QualifiedStatus::Qualified),
        Value::Number(n) => {
            (n.as_f64().unwrap_or(0.0) != 0.0).then_some(QualifiedStatus::Qualified)
        }
        Value::String(s) => match s.as_str() {
            "" => None,
            "qualified" => Some(QualifiedStatus::Qualified),
            "unqualified" => Some(QualifiedStatus::Unqualified),
            _ => {
                return Err(GridError::InvalidFlag {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            }
        },
        Value::Array(_) | Value::Object(_) => {
            return Err(GridError::InvalidFlag {
                key: key.to_string(),
                value: value.to_string(),
            })
        }
    };
    Ok(held)
}

//! Award catalog.
//!
//! Two fixed registries: awards earned in a single team-season and awards
//! earned over a whole career. Ids are typed so a season id can never be
//! confused with a career id, and every id maps back to its catalog string.

use crate::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether an award belongs to one team-season or to the whole career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardTimespan {
    Season,
    Career,
}

impl std::fmt::Display for AwardTimespan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AwardTimespan::Season => write!(f, "season"),
            AwardTimespan::Career => write!(f, "career"),
        }
    }
}

/// Counting or rate statistic an award is tied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardStatistic {
    BattingAverage,
    StolenBases,
    Saves,
    Wins,
    Strikeouts,
    RunsBattedIn,
    HomeRuns,
    Hits,
}

/// Awards attributable to a single team-season (declaration order is catalog order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeasonAward {
    #[serde(rename = "ws_champ")]
    WorldSeries,
    #[serde(rename = "season_allstar")]
    AllStar,
    #[serde(rename = "season_award_gold_glove")]
    GoldGlove,
    #[serde(rename = "season_award_silver_slugger")]
    SilverSlugger,
    #[serde(rename = "season_award_cy_young")]
    CyYoung,
    #[serde(rename = "season_b_avg_300")]
    Average300,
    #[serde(rename = "season_b_rbi_100")]
    RunsBattedIn100,
    #[serde(rename = "season_b_h_200")]
    Hits200,
    #[serde(rename = "season_b_hr_40")]
    HomeRuns40,
    #[serde(rename = "season_p_sv_40")]
    Saves40,
    #[serde(rename = "season_p_w_20")]
    Wins20,
    #[serde(rename = "season_p_so_200")]
    Strikeouts200,
    #[serde(rename = "season_b_sb_30")]
    Steals30,
    #[serde(rename = "season_award_mvp")]
    Mvp,
}

/// Awards attributable to a whole career
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CareerAward {
    #[serde(rename = "career_p_sv_300")]
    Saves300,
    #[serde(rename = "career_p_so_3000")]
    Strikeouts3000,
    #[serde(rename = "career_p_w_300")]
    Wins300,
    #[serde(rename = "career_b_avg_300")]
    Average300,
    #[serde(rename = "career_b_h_3000")]
    Hits3000,
    #[serde(rename = "career_b_hr_500")]
    HomeRuns500,
    #[serde(rename = "career_award_hof")]
    HallOfFame,
}

/// Id of any catalog award
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AwardId {
    Season(SeasonAward),
    Career(CareerAward),
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub id: AwardId,
    pub name: &'static str,
    pub timespan: AwardTimespan,
    pub statistic: Option<AwardStatistic>,
}

const fn season(
    award: SeasonAward,
    name: &'static str,
    statistic: Option<AwardStatistic>,
) -> Award {
    Award {
        id: AwardId::Season(award),
        name,
        timespan: AwardTimespan::Season,
        statistic,
    }
}

const fn career(
    award: CareerAward,
    name: &'static str,
    statistic: Option<AwardStatistic>,
) -> Award {
    Award {
        id: AwardId::Career(award),
        name,
        timespan: AwardTimespan::Career,
        statistic,
    }
}

/// Season catalog, indexed by `SeasonAward as usize`
pub static SEASON_AWARDS: [Award; 14] = [
    season(SeasonAward::WorldSeries, "World Series", None),
    season(SeasonAward::AllStar, "All-Star", None),
    season(SeasonAward::GoldGlove, "Gold Glove", None),
    season(SeasonAward::SilverSlugger, "Silver Slugger", None),
    season(SeasonAward::CyYoung, "Cy Young", None),
    season(SeasonAward::Average300, ".300+ Avg Season", Some(AwardStatistic::BattingAverage)),
    season(SeasonAward::RunsBattedIn100, "100+ RBI Season", Some(AwardStatistic::RunsBattedIn)),
    season(SeasonAward::Hits200, "200+ Hit Season", Some(AwardStatistic::Hits)),
    season(SeasonAward::HomeRuns40, "40+ Home Run Season", Some(AwardStatistic::HomeRuns)),
    season(SeasonAward::Saves40, "40+ Save Season", Some(AwardStatistic::Saves)),
    season(SeasonAward::Wins20, "20+ Win Season", Some(AwardStatistic::Wins)),
    season(SeasonAward::Strikeouts200, "200+ Strikeout Season", Some(AwardStatistic::Strikeouts)),
    season(SeasonAward::Steals30, "30+ Steal Season", Some(AwardStatistic::StolenBases)),
    season(SeasonAward::Mvp, "MVP", None),
];

/// Career catalog, indexed by `CareerAward as usize`
pub static CAREER_AWARDS: [Award; 7] = [
    career(CareerAward::Saves300, "300+ Saves Career", Some(AwardStatistic::Saves)),
    career(CareerAward::Strikeouts3000, "3000+ Strikeouts Career", Some(AwardStatistic::Strikeouts)),
    career(CareerAward::Wins300, "300+ Wins Career", Some(AwardStatistic::Wins)),
    career(CareerAward::Average300, ".300+ Career Avg", Some(AwardStatistic::BattingAverage)),
    career(CareerAward::Hits3000, "3000+ Hits Career", Some(AwardStatistic::Hits)),
    career(CareerAward::HomeRuns500, "500+ HR Career", Some(AwardStatistic::HomeRuns)),
    career(CareerAward::HallOfFame, "Hall of Fame", None),
];

impl SeasonAward {
    pub fn award(self) -> &'static Award {
        &SEASON_AWARDS[self as usize]
    }

    pub fn all() -> impl Iterator<Item = SeasonAward> {
        SEASON_AWARDS.iter().filter_map(|a| match a.id {
            AwardId::Season(s) => Some(s),
            AwardId::Career(_) => None,
        })
    }
}

impl CareerAward {
    pub fn award(self) -> &'static Award {
        &CAREER_AWARDS[self as usize]
    }

    pub fn all() -> impl Iterator<Item = CareerAward> {
        CAREER_AWARDS.iter().filter_map(|a| match a.id {
            AwardId::Career(c) => Some(c),
            AwardId::Season(_) => None,
        })
    }
}

impl AwardId {
    /// Catalog entry for this id
    pub fn award(self) -> &'static Award {
        match self {
            AwardId::Season(s) => s.award(),
            AwardId::Career(c) => c.award(),
        }
    }

    pub fn timespan(self) -> AwardTimespan {
        self.award().timespan
    }

    pub fn statistic(self) -> Option<AwardStatistic> {
        self.award().statistic
    }

    pub fn name(self) -> &'static str {
        self.award().name
    }

    /// Catalog string, e.g. `season_award_mvp`
    pub fn as_str(self) -> &'static str {
        match self {
            AwardId::Season(s) => match s {
                SeasonAward::WorldSeries => "ws_champ",
                SeasonAward::AllStar => "season_allstar",
                SeasonAward::GoldGlove => "season_award_gold_glove",
                SeasonAward::SilverSlugger => "season_award_silver_slugger",
                SeasonAward::CyYoung => "season_award_cy_young",
                SeasonAward::Average300 => "season_b_avg_300",
                SeasonAward::RunsBattedIn100 => "season_b_rbi_100",
                SeasonAward::Hits200 => "season_b_h_200",
                SeasonAward::HomeRuns40 => "season_b_hr_40",
                SeasonAward::Saves40 => "season_p_sv_40",
                SeasonAward::Wins20 => "season_p_w_20",
                SeasonAward::Strikeouts200 => "season_p_so_200",
                SeasonAward::Steals30 => "season_b_sb_30",
                SeasonAward::Mvp => "season_award_mvp",
            },
            AwardId::Career(c) => match c {
                CareerAward::Saves300 => "career_p_sv_300",
                CareerAward::Strikeouts3000 => "career_p_so_3000",
                CareerAward::Wins300 => "career_p_w_300",
                CareerAward::Average300 => "career_b_avg_300",
                CareerAward::Hits3000 => "career_b_h_3000",
                CareerAward::HomeRuns500 => "career_b_hr_500",
                CareerAward::HallOfFame => "career_award_hof",
            },
        }
    }
}

impl FromStr for AwardId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        SEASON_AWARDS
            .iter()
            .chain(CAREER_AWARDS.iter())
            .map(|a| a.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GridError::UnknownAwardId(s.to_string()))
    }
}

impl std::fmt::Display for AwardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up a catalog entry by its string id.
pub fn lookup_award(id: &str) -> Result<&'static Award> {
    id.parse::<AwardId>().map(AwardId::award)
}

/// True if `key` uses one of the reserved award prefixes.
pub(crate) fn is_award_shaped(key: &str) -> bool {
    key.starts_with("season_") || key.starts_with("career_") || key == "ws_champ"
}

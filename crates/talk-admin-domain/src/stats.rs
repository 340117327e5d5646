use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use talk_admin_core::{AdminError, AdminResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsRange {
    #[default]
    Daily,
    Weekly,
}

impl StatsRange {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsRange {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(AdminError::validation(format!(
                "Invalid stats range '{}'. Valid values: daily, weekly",
                s
            ))),
        }
    }
}

/// One bucket of the user activity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "Date", alias = "date")]
    pub date: String,
    #[serde(rename = "UserCount", alias = "userCount", default)]
    pub user_count: i64,
    #[serde(
        rename = "UniqueActionUserCount",
        alias = "uniqueActionUserCount",
        default
    )]
    pub unique_action_user_count: i64,
    #[serde(
        rename = "TalkSessionCount",
        alias = "talkSessionCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub talk_session_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatsTotal {
    #[serde(rename = "UserCount", alias = "userCount", default)]
    pub user_count: i64,
    #[serde(
        rename = "UniqueActionUserCount",
        alias = "uniqueActionUserCount",
        default
    )]
    pub unique_action_user_count: i64,
    #[serde(rename = "TalkSessionCount", alias = "talkSessionCount", default)]
    pub talk_session_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsQuery {
    pub range: StatsRange,
    pub offset: u32,
    pub limit: u32,
}

impl Default for StatsQuery {
    fn default() -> Self {
        Self {
            range: StatsRange::Daily,
            offset: 0,
            limit: 10,
        }
    }
}

impl StatsQuery {
    pub fn new(range: StatsRange, limit: u32) -> AdminResult<Self> {
        if limit == 0 {
            return Err(AdminError::validation("stats limit must be greater than 0"));
        }
        Ok(Self {
            range,
            limit,
            ..Default::default()
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("range", self.range.as_str().to_string()),
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// The backend returns newest first; charts read oldest first.
pub fn chronological(mut stats: Vec<UserStats>) -> Vec<UserStats> {
    stats.reverse();
    stats
}

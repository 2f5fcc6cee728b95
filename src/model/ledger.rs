use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

/// Kind of ledger mutation, recorded on every history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Add,
    Subtract,
    Set,
    Reset,
}

impl ActionType {
    /// String form stored in the `history.action_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Add => "add",
            ActionType::Subtract => "subtract",
            ActionType::Set => "set",
            ActionType::Reset => "reset",
        }
    }

    /// Parses the stored string form back into an action type.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "add" => Some(ActionType::Add),
            "subtract" => Some(ActionType::Subtract),
            "set" => Some(ActionType::Set),
            "reset" => Some(ActionType::Reset),
            _ => None,
        }
    }
}

/// Point balance for one (guild, user) pair.
///
/// Invariant maintained by the ledger service:
/// `total_earned - total_spent == points`. A pair with no recorded
/// mutations has the zero balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub guild_id: u64,
    pub user_id: u64,
    pub points: i64,
    pub total_earned: i64,
    pub total_spent: i64,
    pub last_updated: DateTime<Utc>,
}

impl Balance {
    /// Converts a SeaORM entity into the domain model.
    pub fn from_entity(entity: entity::balance::Model) -> Self {
        Self {
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            points: entity.points,
            total_earned: entity.total_earned,
            total_spent: entity.total_spent,
            last_updated: entity.last_updated,
        }
    }
}

/// One immutable ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    /// Actor who caused the change; 0 for system-caused changes.
    pub moderator_id: u64,
    pub points_change: i64,
    pub reason: Option<String>,
    pub action_type: ActionType,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Converts a SeaORM entity into the domain model.
    ///
    /// Fails on an unknown action-type string, which can only appear if
    /// the column was modified outside this crate; defaulting it would
    /// misreport the mutation kind.
    pub fn from_entity(entity: entity::history::Model) -> Result<Self, DbErr> {
        let action_type = ActionType::parse(&entity.action_type)
            .ok_or_else(|| DbErr::Custom(format!("Unknown action type: {}", entity.action_type)))?;

        Ok(Self {
            id: entity.id,
            guild_id: entity.guild_id as u64,
            user_id: entity.user_id as u64,
            moderator_id: entity.moderator_id as u64,
            points_change: entity.points_change,
            reason: entity.reason,
            action_type,
            timestamp: entity.timestamp,
        })
    }
}

/// One ranked row of a guild leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position within the full guild ranking.
    pub rank: u64,
    pub user_id: u64,
    pub points: i64,
}

/// One page of a guild leaderboard, ordered by points descending with
/// ties broken by ascending user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
    pub entries: Vec<LeaderboardEntry>,
}

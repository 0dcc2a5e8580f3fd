//! Student records and level math.

use serde::{Deserialize, Serialize};

/// Highest level a student can reach.
pub const MAX_LEVEL: i64 = 2;
/// Points needed to advance one level.
pub const POINTS_PER_LEVEL: i64 = 100;

/// A student tracked by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    /// Display name, unique case-insensitively at creation time
    pub name: String,
    /// Free-form classification label chosen at creation; never validated
    /// against a fixed set
    pub category: String,
    /// Cumulative points, changed only by the update endpoint or awards
    pub total_points: i64,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
    /// Stamped whenever `total_points` changes (RFC3339)
    pub updated_at: String,
}

impl Student {
    /// Current capped level for this student.
    pub fn level(&self) -> i64 {
        level_for(self.total_points)
    }
}

/// Capped level for a point total: 0-99 is level 0, 100-199 is level 1,
/// and anything from 200 up is level 2.
pub fn level_for(total_points: i64) -> i64 {
    (total_points / POINTS_PER_LEVEL).clamp(0, MAX_LEVEL)
}

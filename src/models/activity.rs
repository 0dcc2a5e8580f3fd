//! Activity templates and the award ledger entries that reference them.

use serde::{Deserialize, Serialize};

/// Smallest point value a template or award may carry.
pub const POINTS_MIN: i64 = 1;
/// Largest point value a template or award may carry.
pub const POINTS_MAX: i64 = 100;

/// A reusable activity template from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTemplate {
    pub id: u64,
    /// Template name, unique case-insensitively at creation time
    pub name: String,
    /// Suggested points, in [POINTS_MIN, POINTS_MAX]
    pub default_points: i64,
    /// Optional description, empty when not provided
    pub description: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
}

/// One entry of the append-only award ledger.
///
/// Deleting a student or template does not cascade here; `name` is a
/// snapshot of the template name at award time and does not track renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub id: u64,
    pub student_id: u64,
    pub activity_id: u64,
    /// Template name as it read when the award was made
    pub name: String,
    /// Points granted by this award; independent of the template's default
    pub points: i64,
    /// Day/month/year display date
    pub date: String,
    /// Creation timestamp (RFC3339)
    pub created_at: String,
}

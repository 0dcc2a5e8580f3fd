//! Summary statistics across the three collections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ActivityTemplate, AwardRecord, Student};

/// Aggregate numbers for the dashboard, computed on demand from the
/// stored documents (no pre-computed aggregates are kept on disk).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of registered students
    pub total_students: u32,
    /// Number of activity templates in the catalog
    pub total_activities: u32,
    /// Number of awards in the ledger
    pub total_activities_assigned: u32,
    /// Sum of points over all students
    pub total_points: i64,
    /// Rounded integer average of points per student, 0 when there are none
    pub average_points: i64,
    /// Student count per category value
    pub category_distribution: HashMap<String, u32>,
    /// Student count per capped level, keyed "0"/"1"/"2"
    pub level_distribution: HashMap<String, u32>,
}

impl Stats {
    /// Compute stats from the current contents of the three collections.
    pub fn collect(
        students: &[Student],
        templates: &[ActivityTemplate],
        awards: &[AwardRecord],
    ) -> Self {
        let total_points: i64 = students.iter().map(|s| s.total_points).sum();
        let average_points = if students.is_empty() {
            0
        } else {
            (total_points as f64 / students.len() as f64).round() as i64
        };

        let mut category_distribution: HashMap<String, u32> = HashMap::new();
        let mut level_distribution: HashMap<String, u32> = HashMap::new();
        for student in students {
            *category_distribution
                .entry(student.category.clone())
                .or_insert(0) += 1;
            *level_distribution
                .entry(student.level().to_string())
                .or_insert(0) += 1;
        }

        Self {
            total_students: students.len() as u32,
            total_activities: templates.len() as u32,
            total_activities_assigned: awards.len() as u32,
            total_points,
            average_points,
            category_distribution,
            level_distribution,
        }
    }
}

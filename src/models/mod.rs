// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod stats;
pub mod student;

pub use activity::{ActivityTemplate, AwardRecord, POINTS_MAX, POINTS_MIN};
pub use stats::Stats;
pub use student::{level_for, Student};

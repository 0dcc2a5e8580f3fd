// SPDX-License-Identifier: MIT

//! Classdex: classroom gamification tracker
//!
//! This crate provides the backend API for tracking students, reusable
//! activity templates, and point awards. Students collect points and level
//! up in steps of 100, capped at level 2.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::JsonStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: JsonStore,
}

//! Persistence layer (flat JSON documents).

pub mod store;

pub use store::{next_id, JsonStore};

/// Document file names inside the data directory.
pub mod documents {
    pub const STUDENTS: &str = "students.json";
    pub const TEMPLATES: &str = "created_activities.json";
    pub const AWARDS: &str = "activities.json";
}

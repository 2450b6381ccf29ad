//! Staff roster.

use serde::{Deserialize, Serialize};

/// Role group a staff member belongs to.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamCategory {
    #[default]
    Therapist,
    Teacher,
    Admin,
}

/// One staff member. `order` defines the display order within a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: TeamCategory,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub order: i64,
}

/// Team document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDoc {
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

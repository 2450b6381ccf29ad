//! Program catalog: nested categories of service programs.

use serde::{Deserialize, Serialize};

/// One service program inside a category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub order: i64,
}

/// Grouping of programs shown as one section of the programs page.
///
/// `order` is unique within the whole list; each program's `order` is unique
/// within its parent category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub programs: Vec<Program>,
}

/// Programs document: the full ordered category list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramsDoc {
    #[serde(default)]
    pub categories: Vec<ProgramCategory>,
}

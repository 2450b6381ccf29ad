//! Organization identity and contact details.

use serde::{Deserialize, Serialize};

/// Headcount entry for staff or client composition tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompositionEntry {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub count: u32,
}

/// Contact block shown in the site footer and contact page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub transportation: Vec<String>,
}

/// One entry in the ordered "main services" list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MainService {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub order: i64,
}

/// Organization identity document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub established: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub core_values: Vec<String>,
    #[serde(default)]
    pub staff_composition: Vec<CompositionEntry>,
    #[serde(default)]
    pub client_composition: Vec<CompositionEntry>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub main_services: Vec<MainService>,
}

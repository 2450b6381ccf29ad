//! Home page configuration: hero slides and section toggles.

use serde::{Deserialize, Serialize};

/// One slide in the home page hero carousel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Per-section visibility toggles for the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionToggles {
    #[serde(default = "default_true")]
    pub programs: bool,
    #[serde(default = "default_true")]
    pub experts: bool,
    #[serde(default = "default_true")]
    pub about: bool,
    #[serde(default = "default_true")]
    pub news: bool,
    #[serde(default = "default_true")]
    pub facilities: bool,
    #[serde(default = "default_true")]
    pub contact: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            programs: true,
            experts: true,
            about: true,
            news: true,
            facilities: true,
            contact: true,
        }
    }
}

/// Home configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeConfig {
    #[serde(default)]
    pub hero_slides: Vec<HeroSlide>,
    #[serde(default)]
    pub sections: SectionToggles,
}

fn default_true() -> bool {
    true
}

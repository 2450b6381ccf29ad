//! Closed set of content categories.
//!
//! Every place that dispatches on a category (resolver, seeder, API routes)
//! goes through this enum, so adding a category cannot be forgotten in one
//! of them.

use std::fmt;

/// Canonical id of the single document each collection holds.
pub const MAIN_DOC_ID: &str = "main";

/// One logical content domain, backed by exactly one document in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    SiteInfo,
    AboutInfo,
    Programs,
    Team,
    Community,
    HomeConfig,
    SiteAssets,
}

impl CategoryId {
    /// All categories in the fixed seeding order.
    pub const ALL: [CategoryId; 7] = [
        CategoryId::SiteInfo,
        CategoryId::AboutInfo,
        CategoryId::Programs,
        CategoryId::Team,
        CategoryId::Community,
        CategoryId::HomeConfig,
        CategoryId::SiteAssets,
    ];

    /// URL/identifier slug used by the admin API.
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryId::SiteInfo => "site-info",
            CategoryId::AboutInfo => "about-info",
            CategoryId::Programs => "programs",
            CategoryId::Team => "team",
            CategoryId::Community => "community",
            CategoryId::HomeConfig => "home-config",
            CategoryId::SiteAssets => "site-assets",
        }
    }

    /// Document-store collection name.
    pub fn collection(&self) -> &'static str {
        match self {
            CategoryId::SiteInfo => "siteInfo",
            CategoryId::AboutInfo => "aboutInfo",
            CategoryId::Programs => "programs",
            CategoryId::Team => "team",
            CategoryId::Community => "community",
            CategoryId::HomeConfig => "homeConfig",
            CategoryId::SiteAssets => "siteAssets",
        }
    }

    /// Human label for progress reporting and logs.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::SiteInfo => "Site information",
            CategoryId::AboutInfo => "About & director",
            CategoryId::Programs => "Programs",
            CategoryId::Team => "Team members",
            CategoryId::Community => "Community news",
            CategoryId::HomeConfig => "Home page configuration",
            CategoryId::SiteAssets => "Site assets",
        }
    }

    /// Parse an admin API slug.
    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == s)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

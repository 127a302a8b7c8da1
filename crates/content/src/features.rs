//! Page section flags.
//!
//! A flag set to `false` removes the section from the page entirely. Flags are
//! read from an optional TOML file; keys that are absent keep their defaults.
//!
//! ```toml
//! services_cards = true
//! projects_preview = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::{ContentError, LoadResult};
use crate::loaders::read_file;

/// Page sections, in page order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Section {
    Hero,
    InnovationShowcase,
    ServicesOverview,
    ServicesShowcase,
    /// Legacy accordion card grid.
    ServicesCards,
    ProjectsPreview,
    ContactCta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteFeatures {
    pub hero: bool,
    pub innovation_showcase: bool,
    pub services_overview: bool,
    pub services_showcase: bool,
    pub services_cards: bool,
    pub projects_preview: bool,
    pub contact_cta: bool,
}

impl Default for SiteFeatures {
    fn default() -> Self {
        Self {
            hero: true,
            innovation_showcase: true,
            services_overview: true,
            services_showcase: true,
            // Disabled pending sign-off on the new services UI
            services_cards: false,
            projects_preview: true,
            contact_cta: true,
        }
    }
}

impl SiteFeatures {
    /// Load flags from a TOML file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        toml::from_str(&content).map_err(|source| ContentError::InvalidFeatures {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load flags from `path` when given, built-in defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> LoadResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        match section {
            Section::Hero => self.hero,
            Section::InnovationShowcase => self.innovation_showcase,
            Section::ServicesOverview => self.services_overview,
            Section::ServicesShowcase => self.services_showcase,
            Section::ServicesCards => self.services_cards,
            Section::ProjectsPreview => self.projects_preview,
            Section::ContactCta => self.contact_cta,
        }
    }

    /// Every section with its flag, in page order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        Section::iter().map(|section| (section, self.is_enabled(section)))
    }

    /// Enabled sections in page order.
    pub fn enabled_sections(&self) -> Vec<Section> {
        Section::iter()
            .filter(|section| self.is_enabled(*section))
            .collect()
    }
}

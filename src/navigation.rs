// Navigation Router
// A closed set of pages; each selection activates exactly one render branch

use crate::content::Profile;
use crate::error::{Result, SiteError};
use crate::views::{self, View, ViewState};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Research,
    Skills,
    Achievements,
    Contact,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Research,
        Page::Skills,
        Page::Achievements,
        Page::Contact,
    ];

    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::Research,
            Page::Research => Page::Skills,
            Page::Skills => Page::Achievements,
            Page::Achievements => Page::Contact,
            Page::Contact => Page::Home,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Home => Page::Contact,
            Page::Research => Page::Home,
            Page::Skills => Page::Research,
            Page::Achievements => Page::Skills,
            Page::Contact => Page::Achievements,
        }
    }

    /// Stable URL segment.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Research => "research",
            Page::Skills => "skills",
            Page::Achievements => "achievements",
            Page::Contact => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Page> {
        Page::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| SiteError::UnknownPage(slug.to_string()))
    }
}

impl FromStr for Page {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Page::from_slug(s)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// ============================================================================
// LABELS
// ============================================================================

/// The label shown for each page. The two portfolio variants differ only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub home: String,
    pub research: String,
    pub skills: String,
    pub achievements: String,
    pub contact: String,
}

impl LabelSet {
    pub fn researcher() -> Self {
        LabelSet {
            home: "Home".to_string(),
            research: "Research & Projects".to_string(),
            skills: "Skills & Tools".to_string(),
            achievements: "Achievements & Impact".to_string(),
            contact: "Contact".to_string(),
        }
    }

    pub fn engineer() -> Self {
        LabelSet {
            home: "Home".to_string(),
            research: "Projects".to_string(),
            skills: "Skills & Tools".to_string(),
            achievements: "Publications".to_string(),
            contact: "Contact".to_string(),
        }
    }

    pub fn label(&self, page: Page) -> &str {
        match page {
            Page::Home => &self.home,
            Page::Research => &self.research,
            Page::Skills => &self.skills,
            Page::Achievements => &self.achievements,
            Page::Contact => &self.contact,
        }
    }

    pub fn page_for(&self, label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| self.label(*p) == label)
    }

    /// Labels must be non-empty and distinct so every label maps back to one page.
    pub fn validate(&self) -> Result<()> {
        for (i, page) in Page::ALL.iter().enumerate() {
            let label = self.label(*page);
            if label.trim().is_empty() {
                return Err(SiteError::InvalidProfile(format!(
                    "navigation label for {page} is empty"
                )));
            }
            if Page::ALL[..i].iter().any(|p| self.label(*p) == label) {
                return Err(SiteError::InvalidProfile(format!(
                    "navigation label {label:?} is used twice"
                )));
            }
        }
        Ok(())
    }
}

/// Which built-in label set to use when the profile doesn't carry one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Researcher,
    Engineer,
}

impl Variant {
    pub fn labels(&self) -> LabelSet {
        match self {
            Variant::Researcher => LabelSet::researcher(),
            Variant::Engineer => LabelSet::engineer(),
        }
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Render the selected page. Only the matching branch is evaluated.
pub fn route(state: &ViewState, profile: &Profile, labels: &LabelSet) -> View {
    debug!(page = %state.page, "rendering view");

    let title = labels.label(state.page).to_string();
    let sections = match state.page {
        Page::Home => views::home(profile),
        Page::Research => views::research(profile),
        Page::Skills => views::skills(profile),
        Page::Achievements => views::achievements(profile),
        Page::Contact => views::contact(profile, &state.contact),
    };

    View {
        page: state.page,
        title,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Section;

    #[test]
    fn test_next_and_previous_cycle_through_all_pages() {
        let mut page = Page::Home;
        for expected in Page::ALL.iter().cycle().skip(1).take(5) {
            page = page.next();
            assert_eq!(page, *expected);
        }
        assert_eq!(page, Page::Home);

        for p in Page::ALL {
            assert_eq!(p.next().previous(), p);
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()).unwrap(), page);
            assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_unknown_slug_is_an_error() {
        let err = Page::from_slug("blog").unwrap_err();
        assert!(matches!(err, SiteError::UnknownPage(ref s) if s == "blog"));
    }

    #[test]
    fn test_variants_differ_only_in_labels() {
        let researcher = LabelSet::researcher();
        let engineer = LabelSet::engineer();

        assert_eq!(researcher.page_for("Research & Projects"), Some(Page::Research));
        assert_eq!(engineer.page_for("Projects"), Some(Page::Research));
        assert_eq!(engineer.page_for("Publications"), Some(Page::Achievements));
        assert_eq!(engineer.page_for("Research & Projects"), None);
        assert!(researcher.validate().is_ok());
        assert!(engineer.validate().is_ok());
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let mut labels = LabelSet::researcher();
        labels.contact = "Home".to_string();
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_each_page_renders_exactly_its_own_view() {
        let profile = Profile::default();
        let labels = LabelSet::researcher();

        for page in Page::ALL {
            let view = route(&ViewState::new(page), &profile, &labels);
            assert_eq!(view.page, page);
            assert_eq!(view.title, labels.label(page));

            // Charts are namespaced by the page that produced them.
            for section in &view.sections {
                if let Section::Chart(chart) = section {
                    assert!(
                        chart.id.starts_with(page.slug()),
                        "{} leaked into {}",
                        chart.id,
                        page
                    );
                }
            }
        }
    }

    #[test]
    fn test_only_contact_renders_the_form() {
        let profile = Profile::default();
        let labels = LabelSet::researcher();

        for page in Page::ALL {
            let view = route(&ViewState::new(page), &profile, &labels);
            let has_form = view
                .sections
                .iter()
                .any(|s| matches!(s, Section::ContactForm(_)));
            assert_eq!(has_form, page == Page::Contact);
        }
    }

    #[test]
    fn test_only_home_renders_the_hero() {
        let profile = Profile::default();
        let labels = LabelSet::researcher();

        for page in Page::ALL {
            let view = route(&ViewState::new(page), &profile, &labels);
            let heroes = view
                .sections
                .iter()
                .filter(|s| matches!(s, Section::Hero(_)))
                .count();
            assert_eq!(heroes, usize::from(page == Page::Home));
        }
    }
}

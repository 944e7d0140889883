// Site - A loaded profile plus its navigation labels

use crate::config::SiteConfig;
use crate::content::Profile;
use crate::error::Result;
use crate::html::{Chrome, LinkStyle};
use crate::navigation::{self, LabelSet, Page, Variant};
use crate::views::{View, ViewState};
use chrono::NaiveDate;

/// Immutable after construction; front ends share it read-only.
#[derive(Debug, Clone)]
pub struct Site {
    profile: Profile,
    labels: LabelSet,
}

impl Site {
    pub fn new(profile: Profile, variant: Variant) -> Result<Site> {
        profile.validate()?;
        let labels = profile
            .navigation
            .clone()
            .unwrap_or_else(|| variant.labels());
        Ok(Site { profile, labels })
    }

    pub fn from_config(config: &SiteConfig) -> Result<Site> {
        let profile = match &config.profile {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };
        Site::new(profile, config.variant)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn render(&self, state: &ViewState) -> View {
        navigation::route(state, &self.profile, &self.labels)
    }

    /// Sidebar and footer around every page. The date is passed in so
    /// rendering stays independent of the clock.
    pub fn chrome(&self, last_updated: NaiveDate, links: LinkStyle) -> Chrome {
        Chrome {
            site_title: self.profile.page_title.clone(),
            nav: Page::ALL
                .iter()
                .map(|p| (*p, self.labels.label(*p).to_string()))
                .collect(),
            quick_links: self.profile.quick_links.clone(),
            last_updated: last_updated.format("%B %Y").to_string(),
            footer: self.profile.footer.clone(),
            links,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Site {
            profile: Profile::default(),
            labels: LabelSet::researcher(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_decides_labels_without_profile_navigation() {
        let site = Site::new(Profile::default(), Variant::Engineer).unwrap();
        assert_eq!(site.labels().label(Page::Achievements), "Publications");
    }

    #[test]
    fn test_profile_navigation_wins_over_variant() {
        let mut profile = Profile::default();
        let mut labels = LabelSet::researcher();
        labels.home = "About".to_string();
        profile.navigation = Some(labels);

        let site = Site::new(profile, Variant::Engineer).unwrap();
        assert_eq!(site.labels().label(Page::Home), "About");
        assert_eq!(site.labels().label(Page::Research), "Research & Projects");
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut profile = Profile::default();
        profile.competencies.clear();
        assert!(Site::new(profile, Variant::Researcher).is_err());
    }

    #[test]
    fn test_chrome_caption_uses_month_and_year() {
        let site = Site::default();
        let chrome = site.chrome(
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            LinkStyle::Server,
        );

        assert_eq!(chrome.last_updated, "October 2026");
        assert_eq!(chrome.nav.len(), 5);
        assert_eq!(chrome.nav[1], (Page::Research, "Research & Projects".to_string()));
    }
}

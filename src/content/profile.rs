// Profile Content
// Everything the site displays, supplied as JSON with built-in defaults

use crate::charts::diagram::{DiagramEdge, DiagramNode};
use crate::charts::series::InfrastructureDemo;
use crate::error::{Result, SiteError};
use crate::navigation::LabelSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// CONTENT RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    pub value: String,
    pub label: String,
}

impl MetricTile {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        MetricTile {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Titled block of text, optionally followed by links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub body: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Card {
    pub fn text(title: impl Into<String>, body: impl Into<String>) -> Self {
        Card {
            title: title.into(),
            body: vec![body.into()],
            links: Vec::new(),
        }
    }

    pub fn lines(title: impl Into<String>, lines: &[&str]) -> Self {
        Card {
            title: title.into(),
            body: lines.iter().map(|l| l.to_string()).collect(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }
}

/// A card introduced by its own section heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub heading: String,
    pub card: Card,
    /// Heading of the chart that follows the card.
    pub chart_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Architecture {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Nominally 0-100; out-of-range input is clamped for display.
    pub proficiency: f64,
    pub category: String,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, proficiency: f64, category: impl Into<String>) -> Self {
        SkillRecord {
            name: name.into(),
            proficiency,
            category: category.into(),
        }
    }

    pub fn display_proficiency(&self) -> f64 {
        self.proficiency.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub axis: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub topic: String,
    pub level: f64,
}

/// Latency per optimization iteration, before and after tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSeries {
    pub before: Vec<f64>,
    pub after: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    pub market: String,
    pub engagement: Vec<f64>,
    /// Conversion rate in percent; plotted scaled by 100.
    pub conversion: Vec<f64>,
    pub bar_color: String,
    pub line_color: String,
    #[serde(default)]
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessMetrics {
    pub quarters: Vec<String>,
    pub markets: Vec<MarketSeries>,
}

// ============================================================================
// PROFILE
// ============================================================================

/// The complete content of one portfolio.
///
/// Missing fields in a JSON profile fall back to the built-in content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub page_title: String,
    pub name: String,
    pub title: String,
    pub bio: Vec<String>,
    pub badges: Vec<String>,
    /// Navigation labels; when absent the configured variant decides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<LabelSet>,
    pub quick_links: Vec<Link>,
    pub metrics: Vec<MetricTile>,
    pub education: Vec<TimelineEntry>,
    pub certifications: Vec<String>,
    pub flagship: Feature,
    pub architecture: Architecture,
    pub research: Feature,
    pub infrastructure: InfrastructureDemo,
    pub ventures: Vec<Card>,
    pub skills: Vec<SkillRecord>,
    pub skill_colors: Vec<CategoryColor>,
    pub toolbox: Vec<String>,
    pub competencies: Vec<Competency>,
    pub accomplishments: Vec<Card>,
    pub optimization: OptimizationSeries,
    pub business: BusinessMetrics,
    pub interests: Vec<Interest>,
    /// Contact cards, one inner list per column.
    pub contact: Vec<Vec<Card>>,
    pub acknowledgement: String,
    pub footer: String,
}

impl Profile {
    /// Read and validate a JSON profile.
    pub fn load(path: &Path) -> Result<Profile> {
        debug!(path = %path.display(), "loading profile");

        let raw = fs::read_to_string(path).map_err(|source| SiteError::ProfileIo {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Profile =
            serde_json::from_str(&raw).map_err(|source| SiteError::ProfileParse {
                path: path.to_path_buf(),
                source,
            })?;
        profile.validate()?;

        info!(name = %profile.name, path = %path.display(), "profile loaded");
        Ok(profile)
    }

    /// Reject content that cannot be drawn.
    pub fn validate(&self) -> Result<()> {
        if let Some(labels) = &self.navigation {
            labels.validate()?;
        }

        for node in &self.architecture.nodes {
            if !node.position.in_unit_square() {
                return Err(SiteError::InvalidProfile(format!(
                    "diagram node {:?} lies outside the unit square",
                    node.label
                )));
            }
        }
        for edge in &self.architecture.edges {
            if !edge.from.in_unit_square() || !edge.to.in_unit_square() {
                return Err(SiteError::InvalidProfile(
                    "diagram edge endpoint lies outside the unit square".to_string(),
                ));
            }
        }

        if self.competencies.is_empty() {
            return Err(SiteError::InvalidProfile(
                "competency radar needs at least one axis".to_string(),
            ));
        }

        let demo = &self.infrastructure;
        for (name, [lo, hi]) in [
            ("optimal_hours", demo.optimal_hours),
            ("repair_gap_hours", demo.repair_gap_hours),
        ] {
            if !(lo < hi) || !(hi - lo).is_finite() {
                return Err(SiteError::InvalidProfile(format!(
                    "infrastructure {name} range is empty: [{lo}, {hi})"
                )));
            }
        }

        let mut categories = HashSet::new();
        for entry in &self.skill_colors {
            if !categories.insert(entry.category.as_str()) {
                return Err(SiteError::InvalidProfile(format!(
                    "skill category {:?} has more than one colour",
                    entry.category
                )));
            }
        }

        Ok(())
    }
}

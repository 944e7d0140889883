// View Renderer
// Each page is an ordered list of typed sections built from the profile

use crate::charts::builders;
use crate::charts::{compose, infrastructure_response, Figure};
use crate::contact::{ContactFormState, FIELDS};
use crate::content::{Card, MetricTile, Profile, TimelineEntry};
use crate::navigation::Page;
use serde::{Deserialize, Serialize};

// ============================================================================
// VIEW STATE
// ============================================================================

/// Everything a render depends on besides the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub page: Page,
    #[serde(default)]
    pub contact: ContactFormState,
}

impl ViewState {
    pub fn new(page: Page) -> Self {
        ViewState {
            page,
            contact: ContactFormState::Idle,
        }
    }

    pub fn with_contact(mut self, contact: ContactFormState) -> Self {
        self.contact = contact;
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(Page::Home)
    }
}

// ============================================================================
// VIEW MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub page: Page,
    pub title: String,
    pub sections: Vec<Section>,
}

impl View {
    pub fn charts(&self) -> impl Iterator<Item = &ChartBlock> {
        self.sections.iter().filter_map(|s| match s {
            Section::Chart(chart) => Some(chart),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub bio: Vec<String>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBlock {
    /// Unique within a page, prefixed with the page slug.
    pub id: String,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactFormView {
    pub fields: Vec<FormField>,
    pub submit_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(Hero),
    Metrics { tiles: Vec<MetricTile> },
    Header { text: String },
    Subheading { text: String },
    Timeline { entries: Vec<TimelineEntry> },
    Tags { tags: Vec<String> },
    Cards { cards: Vec<Card> },
    Columns { columns: Vec<Vec<Card>> },
    Chart(ChartBlock),
    Divider,
    ContactForm(ContactFormView),
}

fn header(text: &str) -> Section {
    Section::Header {
        text: text.to_string(),
    }
}

fn subheading(text: &str) -> Section {
    Section::Subheading {
        text: text.to_string(),
    }
}

fn chart(page: Page, name: &str, figure: Figure) -> Section {
    Section::Chart(ChartBlock {
        id: format!("{}-{}", page.slug(), name),
        figure,
    })
}

// ============================================================================
// BRANCHES
// ============================================================================

pub fn home(profile: &Profile) -> Vec<Section> {
    vec![
        Section::Hero(Hero {
            name: profile.name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            badges: profile.badges.clone(),
        }),
        Section::Metrics {
            tiles: profile.metrics.clone(),
        },
        header("Education"),
        Section::Timeline {
            entries: profile.education.clone(),
        },
        header("Certifications"),
        Section::Tags {
            tags: profile.certifications.clone(),
        },
    ]
}

pub fn research(profile: &Profile) -> Vec<Section> {
    let architecture = compose(&profile.architecture.nodes, &profile.architecture.edges);
    let infrastructure = infrastructure_response(&profile.infrastructure);

    vec![
        header(&profile.flagship.heading),
        Section::Cards {
            cards: vec![profile.flagship.card.clone()],
        },
        subheading(&profile.flagship.chart_title),
        chart(Page::Research, "architecture", architecture),
        header(&profile.research.heading),
        Section::Cards {
            cards: vec![profile.research.card.clone()],
        },
        subheading(&profile.research.chart_title),
        chart(
            Page::Research,
            "infrastructure",
            builders::infrastructure_chart(&infrastructure),
        ),
        header("Ventures & Other Projects"),
        Section::Cards {
            cards: profile.ventures.clone(),
        },
    ]
}

pub fn skills(profile: &Profile) -> Vec<Section> {
    vec![
        header("Technical Skill Proficiency"),
        chart(
            Page::Skills,
            "proficiency",
            builders::skills_chart(&profile.skills, &profile.skill_colors),
        ),
        header("Toolbox"),
        Section::Tags {
            tags: profile.toolbox.clone(),
        },
        header("Competency Radar"),
        chart(
            Page::Skills,
            "radar",
            builders::competency_radar(&profile.competencies),
        ),
    ]
}

pub fn achievements(profile: &Profile) -> Vec<Section> {
    vec![
        header("Key Accomplishments"),
        Section::Cards {
            cards: profile.accomplishments.clone(),
        },
        header("Research & Quantitative Impact"),
        subheading("System Optimization — Script Performance Improvement"),
        chart(
            Page::Achievements,
            "optimization",
            builders::optimization_chart(&profile.optimization),
        ),
        subheading("Cross-Border Business Intelligence Metrics (Simulated)"),
        chart(
            Page::Achievements,
            "business",
            builders::business_chart(&profile.business),
        ),
        header("Research Interests"),
        chart(
            Page::Achievements,
            "interests",
            builders::interests_chart(&profile.interests),
        ),
    ]
}

pub fn contact(profile: &Profile, state: &ContactFormState) -> Vec<Section> {
    let acknowledgement = match state {
        ContactFormState::Submitted => Some(profile.acknowledgement.clone()),
        ContactFormState::Idle => None,
    };

    vec![
        header("Get in Touch"),
        Section::Columns {
            columns: profile.contact.clone(),
        },
        Section::Divider,
        subheading("Send a Message"),
        Section::ContactForm(ContactFormView {
            fields: FIELDS
                .iter()
                .map(|(name, label, multiline)| FormField {
                    name: name.to_string(),
                    label: label.to_string(),
                    multiline: *multiline,
                })
                .collect(),
            submit_label: "Send".to_string(),
            acknowledgement,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Trace;

    #[test]
    fn test_skills_page_block_order() {
        let sections = skills(&Profile::default());
        let blocks: Vec<&Section> = sections
            .iter()
            .filter(|s| !matches!(s, Section::Header { .. }))
            .collect();

        assert_eq!(blocks.len(), 3);
        let Section::Chart(bar) = blocks[0] else {
            panic!("expected the proficiency chart first");
        };
        assert!(matches!(bar.figure.data[0], Trace::Bar(_)));
        assert_eq!(bar.figure.layout.barmode.as_deref(), Some("group"));

        assert!(matches!(blocks[1], Section::Tags { .. }));

        let Section::Chart(radar) = blocks[2] else {
            panic!("expected the radar chart last");
        };
        let Trace::Scatterpolar(polar) = &radar.figure.data[0] else {
            panic!("expected a polar trace");
        };
        assert_eq!(
            (polar.theta.first(), polar.r.first()),
            (polar.theta.last(), polar.r.last())
        );
    }

    #[test]
    fn test_research_series_identical_across_renders() {
        let profile = Profile::default();
        let first = serde_json::to_string(&research(&profile)).unwrap();
        let second = serde_json::to_string(&research(&profile)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_research_diagram_matches_architecture() {
        let profile = Profile::default();
        let sections = research(&profile);
        let diagram = sections
            .iter()
            .find_map(|s| match s {
                Section::Chart(c) if c.id == "research-architecture" => Some(&c.figure),
                _ => None,
            })
            .unwrap();

        assert_eq!(diagram.rectangles().count(), 7);
        assert_eq!(diagram.text_annotations().count(), 7);
        assert_eq!(diagram.arrows().count(), 8);
    }

    #[test]
    fn test_contact_acknowledgement_only_after_submit() {
        let profile = Profile::default();

        let form = |state| {
            contact(&profile, &state)
                .into_iter()
                .find_map(|s| match s {
                    Section::ContactForm(f) => Some(f),
                    _ => None,
                })
                .unwrap()
        };

        assert_eq!(form(ContactFormState::Idle).acknowledgement, None);
        assert_eq!(
            form(ContactFormState::Submitted).acknowledgement.as_deref(),
            Some("Thanks for reaching out! I'll get back to you soon.")
        );
        assert_eq!(form(ContactFormState::Idle).fields.len(), 3);
    }

    #[test]
    fn test_home_shows_all_metric_tiles() {
        let profile = Profile::default();
        let sections = home(&profile);
        let tiles = sections
            .iter()
            .find_map(|s| match s {
                Section::Metrics { tiles } => Some(tiles),
                _ => None,
            })
            .unwrap();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[0].value, "4+");
    }

    #[test]
    fn test_sections_serialize_with_kind_tag() {
        let value = serde_json::to_value(Section::Divider).unwrap();
        assert_eq!(value["kind"], "divider");

        let value = serde_json::to_value(header("Toolbox")).unwrap();
        assert_eq!(value["kind"], "header");
        assert_eq!(value["text"], "Toolbox");
    }
}

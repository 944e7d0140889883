// Portfolio Site - Core Library
// Exposes all modules for use in the terminal viewer, the web server, and tests

pub mod charts;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod export;
pub mod html;
pub mod logging;
pub mod navigation;
pub mod site;
pub mod views;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use charts::{
    compose, infrastructure_response, DiagramEdge, DiagramNode, Figure, InfrastructureDemo,
    InfrastructureSeries, Point, Trace, Values,
};
pub use config::SiteConfig;
pub use contact::{submit, ContactFormState, ContactSubmission};
pub use content::{Card, Link, MetricTile, Profile, SkillRecord, TimelineEntry};
pub use error::{Result, SiteError};
pub use export::export_site;
pub use html::{render_page, Chrome, LinkStyle};
pub use navigation::{route, LabelSet, Page, Variant};
pub use site::Site;
pub use views::{ChartBlock, Section, View, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Content - Profile records and the built-in profile

pub mod profile;
mod builtin;

pub use profile::{
    Architecture, BusinessMetrics, Card, CategoryColor, Competency, Feature, Interest, Link,
    MarketSeries, MetricTile, OptimizationSeries, Profile, SkillRecord, TimelineEntry,
};

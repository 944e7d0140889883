// Charts - Figure model, diagram composer, seeded series and chart builders

pub mod builders;
pub mod diagram;
pub mod figure;
pub mod series;

pub use diagram::{compose, DiagramEdge, DiagramNode, Point};
pub use figure::{Figure, Trace, Values};
pub use series::{infrastructure_response, InfrastructureDemo, InfrastructureSeries};

// Chart Figure Model
// Plotly-compatible chart specification, serialized as `{ data, layout }`

use serde::Serialize;

// ============================================================================
// VALUES & STYLING
// ============================================================================

/// Axis values of a trace: numbers or category labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(v) => v.len(),
            Values::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn numbers(&self) -> Option<&[f64]> {
        match self {
            Values::Numbers(v) => Some(v),
            Values::Labels(_) => None,
        }
    }

    pub fn labels(&self) -> Option<&[String]> {
        match self {
            Values::Labels(v) => Some(v),
            Values::Numbers(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// A single colour or one value per point mapped through a colour scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    Scaled(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<Vec<(f64, String)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Marker {
    pub fn color(color: impl Into<String>) -> Self {
        Marker {
            color: Some(MarkerColor::Single(color.into())),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl LineStyle {
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        LineStyle {
            color: color.into(),
            width,
            dash: None,
        }
    }

    pub fn dotted(color: impl Into<String>, width: f64) -> Self {
        LineStyle {
            color: color.into(),
            width,
            dash: Some("dot".to_string()),
        }
    }
}

// ============================================================================
// TRACES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarTrace {
    pub r: Vec<f64>,
    pub theta: Vec<String>,
    pub fill: String,
    pub fillcolor: String,
    pub line: LineStyle,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Scatterpolar(PolarTrace),
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Bar(t) => t.name.as_deref(),
            Trace::Scatter(t) => Some(&t.name),
            Trace::Scatterpolar(_) => None,
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    pub const fn new(l: u32, r: u32, t: u32, b: u32) -> Self {
        Margin { l, r, t, b }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Axis {
            title: Some(AxisTitle { text: text.into() }),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some([min, max]);
        self
    }

    /// Unit interval with grid, zero line and ticks hidden.
    pub fn hidden_unit() -> Self {
        Axis {
            range: Some([0.0, 1.0]),
            title: None,
            visible: Some(false),
            showgrid: Some(false),
            zeroline: Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polar {
    pub radialaxis: RadialAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: String,
    pub yanchor: String,
    pub y: f64,
    pub xanchor: String,
    pub x: f64,
}

impl Legend {
    /// Horizontal legend centred under the plot area.
    pub fn below(y: f64) -> Self {
        Legend {
            orientation: "h".to_string(),
            yanchor: "bottom".to_string(),
            y,
            xanchor: "center".to_string(),
            x: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fillcolor: String,
    pub line: ShapeLine,
    pub layer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
    pub size: u32,
}

/// Text label or arrow placed in data coordinates.
///
/// Arrows point from `(ax, ay)` to `(x, y)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowhead: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowsize: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowwidth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowcolor: Option<String>,
}

impl Annotation {
    pub fn is_arrow(&self) -> bool {
        self.showarrow
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar: Option<Polar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
}

impl Layout {
    /// White background, no axes configured.
    pub fn new(height: u32, margin: Margin) -> Self {
        Layout {
            height,
            margin,
            barmode: None,
            xaxis: None,
            yaxis: None,
            polar: None,
            legend: None,
            shapes: Vec::new(),
            annotations: Vec::new(),
            plot_bgcolor: "#ffffff".to_string(),
            paper_bgcolor: "#ffffff".to_string(),
        }
    }

    pub fn transparent(mut self) -> Self {
        self.plot_bgcolor = "rgba(0,0,0,0)".to_string();
        self.paper_bgcolor = "rgba(0,0,0,0)".to_string();
        self
    }

    pub fn grouped(mut self) -> Self {
        self.barmode = Some("group".to_string());
        self
    }
}

// ============================================================================
// FIGURE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Figure {
            data: Vec::new(),
            layout,
        }
    }

    pub fn push(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.data.iter().filter_map(Trace::name).collect()
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Shape> {
        self.layout.shapes.iter().filter(|s| s.kind == "rect")
    }

    pub fn text_annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.layout.annotations.iter().filter(|a| !a.is_arrow())
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Annotation> {
        self.layout.annotations.iter().filter(|a| a.is_arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_is_tagged_with_plotly_type() {
        let trace = Trace::Bar(BarTrace {
            name: Some("Backend".to_string()),
            x: Values::Numbers(vec![92.0]),
            y: Values::Labels(vec!["Java".to_string()]),
            orientation: Some(Orientation::Horizontal),
            marker: Marker::color("#2c5364"),
            text: None,
            textposition: None,
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["orientation"], "h");
        assert_eq!(value["x"], json!([92.0]));
        assert_eq!(value["y"], json!(["Java"]));
        assert_eq!(value["marker"]["color"], "#2c5364");
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_layout_omits_empty_collections() {
        let layout = Layout::new(400, Margin::new(40, 20, 20, 60)).grouped();
        let value = serde_json::to_value(&layout).unwrap();

        assert_eq!(value["barmode"], "group");
        assert_eq!(value["margin"], json!({"l": 40, "r": 20, "t": 20, "b": 60}));
        assert!(value.get("shapes").is_none());
        assert!(value.get("annotations").is_none());
    }

    #[test]
    fn test_colorscale_serializes_as_pairs() {
        let marker = Marker {
            color: Some(MarkerColor::Scaled(vec![1.0, 2.0])),
            colorscale: Some(vec![(0.0, "#fff".to_string()), (1.0, "#000".to_string())]),
            size: None,
        };
        let value = serde_json::to_value(&marker).unwrap();
        assert_eq!(value["colorscale"], json!([[0.0, "#fff"], [1.0, "#000"]]));
        assert_eq!(value["color"], json!([1.0, 2.0]));
    }
}

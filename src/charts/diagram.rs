// Diagram Composer
// Block-and-arrow architecture diagrams on a hidden unit square

use super::figure::{Annotation, Axis, Figure, Font, Layout, Margin, Shape, ShapeLine};
use serde::{Deserialize, Serialize};

/// Half extent of every node box along x.
pub const NODE_HALF_WIDTH: f64 = 0.13;
/// Half extent of every node box along y.
pub const NODE_HALF_HEIGHT: f64 = 0.06;

pub const ARROW_HEAD: u8 = 2;
pub const ARROW_SIZE: f64 = 1.2;
pub const ARROW_WIDTH: f64 = 1.5;
pub const ARROW_COLOR: &str = "#6b7c8a";

pub const LABEL_COLOR: &str = "white";
pub const LABEL_SIZE: u32 = 11;

pub const DIAGRAM_HEIGHT: u32 = 480;

/// Position in the normalized `[0,1] x [0,1]` diagram space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// A labelled box. Positions are hand-authored, nothing is auto-laid-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub position: Point,
    /// Label text; `\n` starts a new line.
    pub label: String,
    pub color: String,
}

impl DiagramNode {
    pub fn new(x: f64, y: f64, label: impl Into<String>, color: impl Into<String>) -> Self {
        DiagramNode {
            position: Point::new(x, y),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Directed arrow between two anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub from: Point,
    pub to: Point,
}

impl DiagramEdge {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        DiagramEdge {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
        }
    }
}

/// Compose nodes and edges into a renderable figure.
///
/// Every node yields one filled rectangle (drawn below the labels) and one
/// centred text annotation; every edge yields one arrow annotation.
pub fn compose(nodes: &[DiagramNode], edges: &[DiagramEdge]) -> Figure {
    let mut layout = Layout::new(DIAGRAM_HEIGHT, Margin::new(20, 20, 10, 10)).transparent();
    layout.xaxis = Some(Axis::hidden_unit());
    layout.yaxis = Some(Axis::hidden_unit());

    for node in nodes {
        let Point { x, y } = node.position;
        layout.shapes.push(Shape {
            kind: "rect".to_string(),
            x0: x - NODE_HALF_WIDTH,
            y0: y - NODE_HALF_HEIGHT,
            x1: x + NODE_HALF_WIDTH,
            y1: y + NODE_HALF_HEIGHT,
            fillcolor: node.color.clone(),
            line: ShapeLine { width: 0.0 },
            layer: "below".to_string(),
        });
        layout.annotations.push(Annotation {
            x,
            y,
            text: Some(node.label.replace('\n', "<br>")),
            showarrow: false,
            font: Some(Font {
                color: LABEL_COLOR.to_string(),
                size: LABEL_SIZE,
            }),
            ..Default::default()
        });
    }

    for edge in edges {
        layout.annotations.push(arrow(edge));
    }

    Figure::new(layout)
}

fn arrow(edge: &DiagramEdge) -> Annotation {
    Annotation {
        x: edge.to.x,
        y: edge.to.y,
        ax: Some(edge.from.x),
        ay: Some(edge.from.y),
        xref: Some("x".to_string()),
        yref: Some("y".to_string()),
        axref: Some("x".to_string()),
        ayref: Some("y".to_string()),
        showarrow: true,
        arrowhead: Some(ARROW_HEAD),
        arrowsize: Some(ARROW_SIZE),
        arrowwidth: Some(ARROW_WIDTH),
        arrowcolor: Some(ARROW_COLOR.to_string()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<DiagramNode>, Vec<DiagramEdge>) {
        let nodes = vec![
            DiagramNode::new(0.5, 0.9, "Top\nLayer", "#0f2027"),
            DiagramNode::new(0.15, 0.5, "Left", "#2c5364"),
            DiagramNode::new(0.85, 0.5, "Right", "#2c5364"),
        ];
        let edges = vec![
            DiagramEdge::new(0.5, 0.84, 0.15, 0.56),
            DiagramEdge::new(0.5, 0.84, 0.85, 0.56),
        ];
        (nodes, edges)
    }

    #[test]
    fn test_one_rectangle_and_label_per_node() {
        let (nodes, edges) = sample();
        let figure = compose(&nodes, &edges);

        assert_eq!(figure.rectangles().count(), nodes.len());
        assert_eq!(figure.text_annotations().count(), nodes.len());
        assert_eq!(figure.arrows().count(), edges.len());
        assert!(figure.data.is_empty());
    }

    #[test]
    fn test_rectangles_are_centred_on_anchor() {
        let (nodes, edges) = sample();
        let figure = compose(&nodes, &edges);

        for (node, rect) in nodes.iter().zip(figure.rectangles()) {
            assert!((rect.x0 - (node.position.x - NODE_HALF_WIDTH)).abs() < 1e-12);
            assert!((rect.x1 - (node.position.x + NODE_HALF_WIDTH)).abs() < 1e-12);
            assert!((rect.y0 - (node.position.y - NODE_HALF_HEIGHT)).abs() < 1e-12);
            assert!((rect.y1 - (node.position.y + NODE_HALF_HEIGHT)).abs() < 1e-12);
            assert_eq!(rect.fillcolor, node.color);
            assert_eq!(rect.layer, "below");
        }

        for (node, label) in nodes.iter().zip(figure.text_annotations()) {
            assert_eq!(label.x, node.position.x);
            assert_eq!(label.y, node.position.y);
        }
    }

    #[test]
    fn test_label_line_breaks_become_html_breaks() {
        let (nodes, edges) = sample();
        let figure = compose(&nodes, &edges);

        let first = figure.text_annotations().next().unwrap();
        assert_eq!(first.text.as_deref(), Some("Top<br>Layer"));
    }

    #[test]
    fn test_arrows_point_from_source_to_destination() {
        let (nodes, edges) = sample();
        let figure = compose(&nodes, &edges);

        for (edge, arrow) in edges.iter().zip(figure.arrows()) {
            assert_eq!(arrow.ax, Some(edge.from.x));
            assert_eq!(arrow.ay, Some(edge.from.y));
            assert_eq!(arrow.x, edge.to.x);
            assert_eq!(arrow.y, edge.to.y);
            assert_eq!(arrow.arrowhead, Some(ARROW_HEAD));
            assert_eq!(arrow.arrowcolor.as_deref(), Some(ARROW_COLOR));
        }
    }

    #[test]
    fn test_axes_hidden_on_unit_square() {
        let figure = compose(&[], &[]);
        let xaxis = figure.layout.xaxis.as_ref().unwrap();

        assert_eq!(xaxis.range, Some([0.0, 1.0]));
        assert_eq!(xaxis.visible, Some(false));
        assert_eq!(figure.layout.height, DIAGRAM_HEIGHT);
        assert!(figure.layout.annotations.is_empty());
    }

    #[test]
    fn test_point_unit_square_bounds() {
        assert!(Point::new(0.0, 1.0).in_unit_square());
        assert!(!Point::new(-0.01, 0.5).in_unit_square());
        assert!(!Point::new(0.5, 1.2).in_unit_square());
    }
}

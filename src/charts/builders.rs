// Chart Builders
// Turn profile tables into figures: group by category, colour, emit one series per group

use super::figure::*;
use super::series::InfrastructureSeries;
use crate::content::{BusinessMetrics, CategoryColor, Competency, Interest, OptimizationSeries, SkillRecord};

/// Colour for categories missing from the lookup table.
pub const NEUTRAL_COLOR: &str = "#6b7c8a";

pub const PRIMARY_COLOR: &str = "#2c5364";
pub const ACCENT_COLOR: &str = "#e07a5f";
pub const HIGHLIGHT_COLOR: &str = "#f2cc8f";

/// Upper bound of the proficiency axis; leaves room for the outside labels.
pub const PROFICIENCY_AXIS_MAX: f64 = 105.0;

pub fn category_color<'a>(palette: &'a [CategoryColor], category: &str) -> &'a str {
    palette
        .iter()
        .find(|c| c.category == category)
        .map(|c| c.color.as_str())
        .unwrap_or(NEUTRAL_COLOR)
}

/// Categories in order of first appearance.
pub fn categories(skills: &[SkillRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for skill in skills {
        if !seen.contains(&skill.category.as_str()) {
            seen.push(&skill.category);
        }
    }
    seen
}

// ============================================================================
// SKILLS & TOOLS
// ============================================================================

/// Horizontal grouped bars, one trace per skill category.
pub fn skills_chart(skills: &[SkillRecord], palette: &[CategoryColor]) -> Figure {
    let mut layout = Layout::new(520, Margin::new(140, 40, 20, 60)).grouped();
    layout.xaxis = Some(Axis::titled("Proficiency (%)").with_range(0.0, PROFICIENCY_AXIS_MAX));
    layout.legend = Some(Legend::below(-0.15));

    let mut figure = Figure::new(layout);
    for cat in categories(skills) {
        let subset: Vec<&SkillRecord> = skills.iter().filter(|s| s.category == cat).collect();
        let values: Vec<f64> = subset.iter().map(|s| s.display_proficiency()).collect();

        figure.push(Trace::Bar(BarTrace {
            name: Some(cat.to_string()),
            x: Values::Numbers(values.clone()),
            y: Values::Labels(subset.iter().map(|s| s.name.clone()).collect()),
            orientation: Some(Orientation::Horizontal),
            marker: Marker::color(category_color(palette, cat)),
            text: Some(values.iter().map(|v| format!("{v:.0}%")).collect()),
            textposition: Some("outside".to_string()),
        }));
    }
    figure
}

/// Closed radar polygon: the first point is repeated at the end.
pub fn competency_radar(competencies: &[Competency]) -> Figure {
    let mut r: Vec<f64> = competencies.iter().map(|c| c.value).collect();
    let mut theta: Vec<String> = competencies.iter().map(|c| c.axis.clone()).collect();
    if let (Some(&r0), Some(t0)) = (r.first(), theta.first().cloned()) {
        r.push(r0);
        theta.push(t0);
    }

    let mut layout = Layout::new(420, Margin::new(60, 60, 40, 40));
    layout.polar = Some(Polar {
        radialaxis: RadialAxis {
            visible: true,
            range: [0.0, 100.0],
        },
    });

    Figure::new(layout).with_trace(Trace::Scatterpolar(PolarTrace {
        r,
        theta,
        fill: "toself".to_string(),
        fillcolor: "rgba(44,83,100,0.2)".to_string(),
        line: LineStyle::solid(PRIMARY_COLOR, 2.0),
        marker: Marker {
            size: Some(6.0),
            ..Marker::color(PRIMARY_COLOR)
        },
    }))
}

// ============================================================================
// RESEARCH
// ============================================================================

/// Optimal vs actual repair time bars plus the dotted gap line.
pub fn infrastructure_chart(series: &InfrastructureSeries) -> Figure {
    let mut layout = Layout::new(400, Margin::new(40, 20, 20, 60)).grouped();
    layout.yaxis = Some(Axis::titled("Hours"));
    layout.legend = Some(Legend::below(-0.25));

    let months = Values::Labels(series.months.clone());
    Figure::new(layout)
        .with_trace(bar(
            "Optimal Response Time (hrs)",
            months.clone(),
            series.optimal.clone(),
            PRIMARY_COLOR,
        ))
        .with_trace(bar(
            "Actual Repair Time (hrs)",
            months.clone(),
            series.actual.clone(),
            ACCENT_COLOR,
        ))
        .with_trace(Trace::Scatter(ScatterTrace {
            name: "Gap (ART - ORT)".to_string(),
            x: months,
            y: Values::Numbers(series.gap.clone()),
            mode: None,
            line: LineStyle::dotted(HIGHLIGHT_COLOR, 2.5),
            fill: None,
            fillcolor: None,
        }))
}

// ============================================================================
// ACHIEVEMENTS
// ============================================================================

/// Latency per iteration before and after optimization; the gap is shaded.
pub fn optimization_chart(series: &OptimizationSeries) -> Figure {
    let iterations = |n: usize| Values::Numbers((1..=n).map(|i| i as f64).collect());

    let mut layout = Layout::new(380, Margin::new(40, 20, 20, 60));
    layout.xaxis = Some(Axis::titled("Optimization Iteration"));
    layout.yaxis = Some(Axis::titled("Execution Latency (seconds)"));
    layout.legend = Some(Legend::below(-0.2));

    Figure::new(layout)
        .with_trace(Trace::Scatter(ScatterTrace {
            name: "Before Optimization".to_string(),
            x: iterations(series.before.len()),
            y: Values::Numbers(series.before.clone()),
            mode: Some("lines+markers".to_string()),
            line: LineStyle::solid(ACCENT_COLOR, 2.5),
            fill: None,
            fillcolor: None,
        }))
        .with_trace(Trace::Scatter(ScatterTrace {
            name: "After Optimization".to_string(),
            x: iterations(series.after.len()),
            y: Values::Numbers(series.after.clone()),
            mode: Some("lines+markers".to_string()),
            line: LineStyle::solid(PRIMARY_COLOR, 2.5),
            fill: Some("tonexty".to_string()),
            fillcolor: Some("rgba(44,83,100,0.1)".to_string()),
        }))
}

/// Engagement bars per market, then conversion lines scaled by 100.
pub fn business_chart(metrics: &BusinessMetrics) -> Figure {
    let mut layout = Layout::new(420, Margin::new(40, 20, 20, 60)).grouped();
    layout.yaxis = Some(Axis::titled("Users / Rate (x100)"));
    layout.legend = Some(Legend::below(-0.25));

    let quarters = Values::Labels(metrics.quarters.clone());
    let mut figure = Figure::new(layout);

    for market in &metrics.markets {
        figure.push(bar(
            &format!("{} — User Engagement", market.market),
            quarters.clone(),
            market.engagement.clone(),
            &market.bar_color,
        ));
    }
    for market in &metrics.markets {
        let line = if market.dashed {
            LineStyle::dotted(market.line_color.clone(), 2.5)
        } else {
            LineStyle::solid(market.line_color.clone(), 2.5)
        };
        figure.push(Trace::Scatter(ScatterTrace {
            name: format!("{} — Conversion Rate (x100)", market.market),
            x: quarters.clone(),
            y: Values::Numbers(market.conversion.iter().map(|c| c * 100.0).collect()),
            mode: None,
            line,
            fill: None,
            fillcolor: None,
        }));
    }
    figure
}

/// Single horizontal bar trace coloured through a light-to-dark scale.
pub fn interests_chart(interests: &[Interest]) -> Figure {
    let levels: Vec<f64> = interests.iter().map(|i| i.level).collect();

    let mut layout = Layout::new(350, Margin::new(200, 20, 10, 40));
    layout.xaxis = Some(Axis::titled("Interest Level").with_range(0.0, 100.0));

    Figure::new(layout).with_trace(Trace::Bar(BarTrace {
        name: None,
        x: Values::Numbers(levels.clone()),
        y: Values::Labels(interests.iter().map(|i| i.topic.clone()).collect()),
        orientation: Some(Orientation::Horizontal),
        marker: Marker {
            color: Some(MarkerColor::Scaled(levels)),
            colorscale: Some(vec![
                (0.0, "#b0d4e8".to_string()),
                (1.0, "#0f2027".to_string()),
            ]),
            size: None,
        },
        text: None,
        textposition: None,
    }))
}

fn bar(name: &str, x: Values, y: Vec<f64>, color: &str) -> Trace {
    Trace::Bar(BarTrace {
        name: Some(name.to_string()),
        x,
        y: Values::Numbers(y),
        orientation: None,
        marker: Marker::color(color),
        text: None,
        textposition: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::{infrastructure_response, InfrastructureDemo};
    use crate::content::Profile;

    #[test]
    fn test_one_series_per_skill_category() {
        let profile = Profile::default();
        let figure = skills_chart(&profile.skills, &profile.skill_colors);

        assert_eq!(figure.series_names(), vec!["Backend", "Data & ML", "Architecture"]);
        let colors: Vec<_> = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Bar(b) => b.marker.color.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                Some(MarkerColor::Single("#2c5364".to_string())),
                Some(MarkerColor::Single("#3d85c6".to_string())),
                Some(MarkerColor::Single("#81b29a".to_string())),
            ]
        );
    }

    #[test]
    fn test_every_skill_lands_in_its_category_trace() {
        let profile = Profile::default();
        let figure = skills_chart(&profile.skills, &profile.skill_colors);

        let total: usize = figure
            .data
            .iter()
            .map(|t| match t {
                Trace::Bar(b) => b.y.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(total, profile.skills.len());
    }

    #[test]
    fn test_proficiency_bounds_render_inside_axis() {
        let skills = vec![
            SkillRecord::new("Floor", 0.0, "Edge"),
            SkillRecord::new("Ceiling", 100.0, "Edge"),
            SkillRecord::new("Over", 140.0, "Edge"),
            SkillRecord::new("Under", -20.0, "Edge"),
        ];
        let figure = skills_chart(&skills, &[]);
        let range = figure.layout.xaxis.as_ref().unwrap().range.unwrap();

        let Trace::Bar(bar) = &figure.data[0] else {
            panic!("expected a bar trace");
        };
        let values = bar.x.numbers().unwrap();
        assert_eq!(values, &[0.0, 100.0, 100.0, 0.0]);
        for v in values {
            assert!(*v >= range[0] && *v < range[1]);
        }
        assert_eq!(bar.text.as_ref().unwrap()[1], "100%");
    }

    #[test]
    fn test_unknown_category_gets_neutral_colour() {
        assert_eq!(category_color(&[], "Mystery"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_radar_polygon_is_closed() {
        let profile = Profile::default();
        let figure = competency_radar(&profile.competencies);

        let Trace::Scatterpolar(polar) = &figure.data[0] else {
            panic!("expected a polar trace");
        };
        assert_eq!(polar.r.len(), profile.competencies.len() + 1);
        assert_eq!(polar.r.first(), polar.r.last());
        assert_eq!(polar.theta.first(), polar.theta.last());
        assert_eq!(polar.fill, "toself");
    }

    #[test]
    fn test_infrastructure_chart_has_two_bars_and_gap_line() {
        let series = infrastructure_response(&InfrastructureDemo::default());
        let figure = infrastructure_chart(&series);

        assert_eq!(
            figure.series_names(),
            vec![
                "Optimal Response Time (hrs)",
                "Actual Repair Time (hrs)",
                "Gap (ART - ORT)"
            ]
        );
        let Trace::Scatter(gap) = &figure.data[2] else {
            panic!("expected the gap line");
        };
        assert_eq!(gap.line.dash.as_deref(), Some("dot"));
        assert_eq!(gap.y, Values::Numbers(series.gap.clone()));
    }

    #[test]
    fn test_business_conversion_scaled_by_hundred() {
        let profile = Profile::default();
        let figure = business_chart(&profile.business);

        assert_eq!(figure.data.len(), 4);
        let Trace::Scatter(sa) = &figure.data[2] else {
            panic!("expected a conversion line");
        };
        let first = sa.y.numbers().unwrap()[0];
        assert!((first - 320.0).abs() < 1e-9);
        assert_eq!(sa.name, "SA — Conversion Rate (x100)");
    }

    #[test]
    fn test_optimization_after_trace_fills_to_previous() {
        let profile = Profile::default();
        let figure = optimization_chart(&profile.optimization);

        let Trace::Scatter(after) = &figure.data[1] else {
            panic!("expected a scatter trace");
        };
        assert_eq!(after.fill.as_deref(), Some("tonexty"));
        assert_eq!(after.x.numbers().unwrap().first(), Some(&1.0));
        assert_eq!(after.x.len(), 10);
    }

    #[test]
    fn test_interests_use_colour_scale() {
        let profile = Profile::default();
        let figure = interests_chart(&profile.interests);

        let Trace::Bar(bar) = &figure.data[0] else {
            panic!("expected a bar trace");
        };
        assert!(matches!(bar.marker.color, Some(MarkerColor::Scaled(_))));
        assert_eq!(bar.y.len(), profile.interests.len());
    }
}

// Seeded Demo Series
// Illustrative placeholder data: deterministic for a given seed, never real analytics

use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters of the simulated infrastructure response series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureDemo {
    /// First month shown on the x axis.
    pub start_month: NaiveDate,
    pub months: u32,
    pub seed: u64,
    /// Half-open `[min, max)` range of the optimal response time, in hours.
    pub optimal_hours: [f64; 2],
    /// Half-open `[min, max)` range added on top of the optimal time to get
    /// the actual repair time.
    pub repair_gap_hours: [f64; 2],
}

impl Default for InfrastructureDemo {
    fn default() -> Self {
        InfrastructureDemo {
            start_month: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default(),
            months: 12,
            seed: 42,
            optimal_hours: [2.0, 6.0],
            repair_gap_hours: [1.0, 8.0],
        }
    }
}

/// Optimal response time (ORT) vs actual repair time (ART) per month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfrastructureSeries {
    pub months: Vec<String>,
    pub optimal: Vec<f64>,
    pub actual: Vec<f64>,
    /// `actual - optimal`, point by point.
    pub gap: Vec<f64>,
}

/// `count` consecutive month labels formatted as `"Jun 2024"`.
pub fn month_labels(start: NaiveDate, count: u32) -> Vec<String> {
    (0..count)
        .filter_map(|i| start.checked_add_months(Months::new(i)))
        .map(|d| d.format("%b %Y").to_string())
        .collect()
}

/// Generate the infrastructure series.
///
/// The RNG is seeded right before drawing, so repeated calls with the same
/// parameters produce identical output. All optimal values are drawn first,
/// then all gaps.
pub fn infrastructure_response(demo: &InfrastructureDemo) -> InfrastructureSeries {
    let months = month_labels(demo.start_month, demo.months);
    let n = months.len();
    let mut rng = StdRng::seed_from_u64(demo.seed);

    let [opt_lo, opt_hi] = demo.optimal_hours;
    let [gap_lo, gap_hi] = demo.repair_gap_hours;

    let optimal: Vec<f64> = (0..n).map(|_| rng.gen_range(opt_lo..opt_hi)).collect();
    let actual: Vec<f64> = optimal
        .iter()
        .map(|o| o + rng.gen_range(gap_lo..gap_hi))
        .collect();
    let gap = actual.iter().zip(&optimal).map(|(a, o)| a - o).collect();

    InfrastructureSeries {
        months,
        optimal,
        actual,
        gap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_labels_roll_over_year() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let labels = month_labels(start, 12);

        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], "Jun 2024");
        assert_eq!(labels[6], "Dec 2024");
        assert_eq!(labels[7], "Jan 2025");
        assert_eq!(labels[11], "May 2025");
    }

    #[test]
    fn test_same_seed_is_byte_identical() {
        let demo = InfrastructureDemo::default();
        let first = serde_json::to_string(&infrastructure_response(&demo)).unwrap();
        let second = serde_json::to_string(&infrastructure_response(&demo)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_changes_values() {
        let demo = InfrastructureDemo::default();
        let other = InfrastructureDemo {
            seed: 7,
            ..InfrastructureDemo::default()
        };
        assert_ne!(
            infrastructure_response(&demo).optimal,
            infrastructure_response(&other).optimal
        );
    }

    #[test]
    fn test_values_stay_in_configured_ranges() {
        let series = infrastructure_response(&InfrastructureDemo::default());

        assert_eq!(series.optimal.len(), 12);
        for ((o, a), g) in series.optimal.iter().zip(&series.actual).zip(&series.gap) {
            assert!((2.0..6.0).contains(o));
            assert!(a > o);
            assert!(*g >= 1.0 - 1e-9 && *g < 8.0 + 1e-9);
            assert!(((a - o) - g).abs() < 1e-12);
        }
    }
}

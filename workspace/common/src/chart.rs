//! Data behind the page's charts. Rendering lives in the frontend; these types only
//! decide what is drawn.

use crate::format::round_half_up;
use crate::history::HistoryEntry;
use crate::model_info::FeatureImportances;
use chrono::TimeZone;
use std::fmt::Display;

pub const EXPENSES_LABEL: &str = "Expenses";
pub const PROFIT_LABEL: &str = "Predicted Profit";

/// Bar colors of the importance chart, applied in order.
pub const IMPORTANCE_PALETTE: [&str; 4] = ["#0a84ff", "#34c759", "#ffcc00", "#ff3b30"];

/// Entries kept by the history trend chart.
pub const HISTORY_CHART_MAX: usize = 20;

/// Expenses vs. predicted profit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonChart {
    pub expenses: f64,
    pub profit: f64,
}

impl ComparisonChart {
    /// Figures shown before the first prediction.
    pub const SAMPLE: ComparisonChart = ComparisonChart {
        expenses: 300_000.0,
        profit: 150_000.0,
    };

    /// Build from raw figures; values are rounded to whole currency units.
    pub fn new(expenses: f64, profit: f64) -> Self {
        Self {
            expenses: round_half_up(expenses),
            profit: round_half_up(profit),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        vec![EXPENSES_LABEL.to_string(), PROFIT_LABEL.to_string()]
    }

    pub fn values(&self) -> Vec<f64> {
        vec![self.expenses, self.profit]
    }
}

impl Default for ComparisonChart {
    fn default() -> Self {
        Self::SAMPLE
    }
}

/// Horizontal bars of the model's feature importances.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportanceChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ImportanceChart {
    pub fn from_importances(importances: &FeatureImportances) -> Self {
        let labels = importances.iter().map(|i| i.label.clone()).collect();
        let values = importances.iter().map(|i| i.score).collect();
        let colors = IMPORTANCE_PALETTE.iter().map(|c| c.to_string()).collect();
        Self {
            labels,
            values,
            colors,
        }
    }
}

/// Rolling line chart over the most recent predictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryTrend {
    pub labels: Vec<String>,
    pub profits: Vec<f64>,
    pub rd_spends: Vec<f64>,
    pub administrations: Vec<f64>,
    pub marketing_spends: Vec<f64>,
}

impl HistoryTrend {
    /// Take the last [`HISTORY_CHART_MAX`] entries, labelled with their time of day in `tz`.
    pub fn from_entries<Tz>(entries: &[HistoryEntry], tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let start = entries.len().saturating_sub(HISTORY_CHART_MAX);
        let mut trend = Self::default();
        for entry in &entries[start..] {
            trend.push(entry, tz);
        }
        trend
    }

    fn push<Tz>(&mut self, entry: &HistoryEntry, tz: &Tz)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = entry.timestamp.with_timezone(tz);
        self.labels.push(local.format("%-I:%M:%S %p").to_string());
        self.profits.push(round_half_up(entry.prediction));
        self.rd_spends.push(round_half_up(entry.input.rd_spend));
        self.administrations.push(round_half_up(entry.input.administration));
        self.marketing_spends.push(round_half_up(entry.input.marketing_spend));
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PredictionHistory;
    use crate::prediction::SpendInputs;
    use chrono::{Duration, Utc};

    #[test]
    fn comparison_rounds_like_the_browser() {
        let chart = ComparisonChart::new(100.5, -0.5);
        assert_eq!(chart.values(), vec![101.0, 0.0]);
        assert_eq!(chart.labels(), vec!["Expenses", "Predicted Profit"]);
    }

    #[test]
    fn comparison_starts_with_sample() {
        assert_eq!(ComparisonChart::default().values(), vec![300_000.0, 150_000.0]);
    }

    #[test]
    fn importance_chart_follows_service_order() {
        let importances: FeatureImportances = vec![
            ("State".to_string(), 0.01),
            ("R&D Spend".to_string(), 0.9),
        ]
        .into_iter()
        .collect();

        let chart = ImportanceChart::from_importances(&importances);
        assert_eq!(chart.labels, vec!["State", "R&D Spend"]);
        assert_eq!(chart.values, vec![0.01, 0.9]);
        assert_eq!(chart.colors[0], "#0a84ff");
    }

    #[test]
    fn trend_keeps_only_recent_entries() {
        let mut history = PredictionHistory::new();
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        for i in 0..(HISTORY_CHART_MAX + 5) {
            let inputs = SpendInputs {
                rd_spend: i as f64,
                administration: 0.4,
                marketing_spend: 0.6,
            };
            history.record(inputs, i as f64 * 10.0, base + Duration::minutes(i as i64));
        }

        let trend = HistoryTrend::from_entries(history.entries(), &Utc);
        assert_eq!(trend.labels.len(), HISTORY_CHART_MAX);
        assert_eq!(trend.rd_spends.first(), Some(&5.0));
        assert_eq!(trend.profits.last(), Some(&240.0));
        assert_eq!(trend.administrations[0], 0.0);
        assert_eq!(trend.marketing_spends[0], 1.0);
        assert_eq!(trend.labels[0], "8:05:00 AM");
    }
}

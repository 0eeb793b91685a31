use serde::{Serialize, Deserialize};
use crate::config::CURRENCY_SYMBOL;
use crate::format::Rounding;
use crate::model::reading::MonthlyReading;
use crate::model::stats::{DerivedMonthlyStats, YearSummary};

/// One month as shown on the dashboard, already rounded for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month_index: u32,
    pub month_label: String, // Jan, Feb...
    pub energy_produced_kwh: f64,
    pub energy_fed_into_grid_kwh: f64,
    pub energy_consumed_kwh: f64,
    pub energy_consumed_pct: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub total_produced_kwh: f64,
    pub total_fed_into_grid_kwh: f64,
    pub total_consumed_kwh: f64,
    pub average_self_consumed_pct: f64,
    pub total_cost_saved: f64,
    pub currency: String,
}

/// Everything the presentation layer draws. Built once; renderers only read it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub price_per_kwh: f64,
    pub rounding: Rounding,
    pub months: Vec<MonthView>,
    pub summary: SummaryView,
}

impl DashboardView {
    pub fn build(
        readings: &[MonthlyReading],
        derived: &[DerivedMonthlyStats],
        summary: &YearSummary,
        price_per_kwh: f64,
        rounding: Rounding,
    ) -> Self {
        let months = readings
            .iter()
            .zip(derived)
            .map(|(reading, row)| MonthView {
                month_index: reading.month_index(),
                month_label: reading.month_label().to_string(),
                energy_produced_kwh: rounding.kwh(reading.energy_produced_kwh),
                energy_fed_into_grid_kwh: rounding.kwh(reading.energy_fed_into_grid_kwh),
                energy_consumed_kwh: rounding.kwh(row.energy_consumed_kwh),
                energy_consumed_pct: rounding.pct(row.energy_consumed_pct),
            })
            .collect();

        Self {
            price_per_kwh,
            rounding,
            months,
            summary: SummaryView {
                total_produced_kwh: rounding.kwh(summary.total_produced_kwh),
                total_fed_into_grid_kwh: rounding.kwh(summary.total_fed_into_grid_kwh),
                total_consumed_kwh: rounding.kwh(summary.total_consumed_kwh),
                average_self_consumed_pct: rounding.pct(summary.average_self_consumed_pct),
                total_cost_saved: rounding.currency(summary.total_cost_saved),
                currency: CURRENCY_SYMBOL.to_string(),
            },
        }
    }

    pub fn month_labels(&self) -> Vec<&str> {
        self.months.iter().map(|m| m.month_label.as_str()).collect()
    }

    /// Largest monthly production, the outer ring of the radar chart.
    pub fn max_produced_kwh(&self) -> f64 {
        self.months
            .iter()
            .map(|m| m.energy_produced_kwh)
            .fold(0.0, f64::max)
    }
}

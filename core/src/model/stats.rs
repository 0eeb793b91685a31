use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::model::reading::month_label;

/// Per-month values computed from a [`crate::MonthlyReading`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DerivedMonthlyStats {
    pub month: Month,
    pub energy_consumed_kwh: f64,
    /// Share of the month's production used on-site, 0-100.
    pub energy_consumed_pct: f64,
}

impl DerivedMonthlyStats {
    pub fn month_label(&self) -> &'static str {
        month_label(self.month)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct YearSummary {
    pub total_produced_kwh: f64,
    pub total_fed_into_grid_kwh: f64,
    pub total_consumed_kwh: f64,
    /// Weighted by production: total consumed over total produced, not the mean of monthly shares.
    pub average_self_consumed_pct: f64,
    pub total_cost_saved: f64,
}

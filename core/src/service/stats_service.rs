use crate::error::StatsError;
use crate::model::reading::MonthlyReading;
use crate::model::stats::{DerivedMonthlyStats, YearSummary};
use tracing::debug;

/// Computes consumed energy and its share of production for every month.
///
/// Output is index-aligned with `readings`. A month without production has no
/// defined share and fails the whole derivation.
pub fn derive_monthly(readings: &[MonthlyReading]) -> Result<Vec<DerivedMonthlyStats>, StatsError> {
    readings
        .iter()
        .map(|reading| {
            if reading.energy_produced_kwh == 0.0 {
                return Err(StatsError::ZeroProduction {
                    month: reading.month_label().to_string(),
                });
            }

            let consumed = reading.energy_produced_kwh - reading.energy_fed_into_grid_kwh;
            let pct = consumed / reading.energy_produced_kwh * 100.0;
            debug!(month = reading.month_label(), consumed, pct, "derived month");

            Ok(DerivedMonthlyStats {
                month: reading.month,
                energy_consumed_kwh: consumed,
                energy_consumed_pct: pct,
            })
        })
        .collect()
}

/// Aggregates the year from readings and their derived rows.
pub fn derive_summary(
    readings: &[MonthlyReading],
    derived: &[DerivedMonthlyStats],
    price_per_kwh: f64,
) -> Result<YearSummary, StatsError> {
    if readings.len() != derived.len() {
        return Err(StatsError::MisalignedMonths {
            expected: readings.len(),
            actual: derived.len(),
        });
    }

    for (index, (reading, row)) in readings.iter().zip(derived).enumerate() {
        if reading.month != row.month {
            return Err(StatsError::MonthMismatch {
                index,
                expected: reading.month_label().to_string(),
                actual: row.month_label().to_string(),
            });
        }
    }

    let total_produced: f64 = readings.iter().map(|r| r.energy_produced_kwh).sum();
    let total_fed_in: f64 = readings.iter().map(|r| r.energy_fed_into_grid_kwh).sum();
    let total_consumed: f64 = derived.iter().map(|d| d.energy_consumed_kwh).sum();

    if total_produced == 0.0 {
        return Err(StatsError::ZeroProduction {
            month: "the whole year".to_string(),
        });
    }

    let summary = YearSummary {
        total_produced_kwh: total_produced,
        total_fed_into_grid_kwh: total_fed_in,
        total_consumed_kwh: total_consumed,
        average_self_consumed_pct: total_consumed / total_produced * 100.0,
        total_cost_saved: total_consumed * price_per_kwh,
    };
    debug!(?summary, "derived year summary");

    Ok(summary)
}

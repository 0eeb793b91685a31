use crate::config::PRICE_PER_KWH;
use crate::format::Rounding;
use crate::model::reading::MonthlyReading;
use crate::model::stats::{DerivedMonthlyStats, YearSummary};
use crate::repository::ReadingRepository;
use crate::service::dto::DashboardView;
use crate::service::stats_service::{derive_monthly, derive_summary};
use anyhow::Result;
use tracing::info;

/// Readings of the year together with everything derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub readings: Vec<MonthlyReading>,
    pub monthly: Vec<DerivedMonthlyStats>,
    pub summary: YearSummary,
    pub price_per_kwh: f64,
}

impl Dashboard {
    pub fn view(&self, rounding: Rounding) -> DashboardView {
        DashboardView::build(
            &self.readings,
            &self.monthly,
            &self.summary,
            self.price_per_kwh,
            rounding,
        )
    }
}

pub struct DashboardUseCase<'a, R: ReadingRepository> {
    reading_repo: &'a R,
    price_per_kwh: f64,
}

impl<'a, R: ReadingRepository> DashboardUseCase<'a, R> {
    pub fn new(reading_repo: &'a R) -> Self {
        Self::with_price(reading_repo, PRICE_PER_KWH)
    }

    pub fn with_price(reading_repo: &'a R, price_per_kwh: f64) -> Self {
        Self {
            reading_repo,
            price_per_kwh,
        }
    }

    /// Runs the single derivation pass: readings -> monthly rows -> year summary.
    pub fn build(&self) -> Result<Dashboard> {
        let readings = self.reading_repo.list()?;
        let monthly = derive_monthly(&readings)?;
        let summary = derive_summary(&readings, &monthly, self.price_per_kwh)?;

        info!(
            months = readings.len(),
            total_produced_kwh = summary.total_produced_kwh,
            average_self_consumed_pct = summary.average_self_consumed_pct,
            "dashboard statistics derived"
        );

        Ok(Dashboard {
            readings,
            monthly,
            summary,
            price_per_kwh: self.price_per_kwh,
        })
    }
}

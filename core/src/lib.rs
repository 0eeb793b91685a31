pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::{CURRENCY_SYMBOL, PRICE_PER_KWH};
pub use error::StatsError;
pub use format::{round_to, Rounding};
pub use model::reading::MonthlyReading;
pub use model::stats::{DerivedMonthlyStats, YearSummary};
pub use repository::{FixedReadingRepository, ReadingRepository};
pub use service::dto::{DashboardView, MonthView, SummaryView};
pub use service::stats_service::{derive_monthly, derive_summary};
pub use usecase::dashboard::{Dashboard, DashboardUseCase};

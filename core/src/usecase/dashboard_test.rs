#[cfg(test)]
mod tests {
    use crate::usecase::dashboard::DashboardUseCase;
    use crate::repository::{FixedReadingRepository, ReadingRepository};
    use crate::model::reading::MonthlyReading;
    use crate::error::StatsError;
    use crate::format::Rounding;
    use chrono::Month;
    use anyhow::{anyhow, Result};

    struct MockReadingRepo {
        readings: Vec<MonthlyReading>,
    }

    impl ReadingRepository for MockReadingRepo {
        fn list(&self) -> Result<Vec<MonthlyReading>> { Ok(self.readings.clone()) }
    }

    struct BrokenReadingRepo;
    impl ReadingRepository for BrokenReadingRepo {
        fn list(&self) -> Result<Vec<MonthlyReading>> { Err(anyhow!("readings unavailable")) }
    }

    #[test]
    fn test_build_tracked_year() {
        let repo = FixedReadingRepository::new();
        let dashboard = DashboardUseCase::new(&repo).build().unwrap();

        assert_eq!(dashboard.readings.len(), 12);
        assert_eq!(dashboard.monthly.len(), 12);
        assert_eq!(dashboard.price_per_kwh, 0.2858);
        assert!((dashboard.summary.total_produced_kwh - 828.387).abs() < 1e-9);
        assert!((dashboard.summary.total_consumed_kwh - 589.907).abs() < 1e-9);
    }

    #[test]
    fn test_view_rounds_only_for_display() {
        let repo = FixedReadingRepository::new();
        let dashboard = DashboardUseCase::new(&repo).build().unwrap();
        let view = dashboard.view(Rounding::default());

        // Stored values stay unrounded.
        assert!(dashboard.monthly[0].energy_consumed_pct != 80.36);

        let jan = &view.months[0];
        assert_eq!(jan.month_index, 1);
        assert_eq!(jan.month_label, "Jan");
        assert_eq!(jan.energy_consumed_kwh, 24.8);
        assert_eq!(jan.energy_consumed_pct, 80.36);

        assert_eq!(view.summary.total_produced_kwh, 828.4);
        assert_eq!(view.summary.total_fed_into_grid_kwh, 238.5);
        assert_eq!(view.summary.total_consumed_kwh, 589.9);
        assert_eq!(view.summary.average_self_consumed_pct, 71.21);
        assert_eq!(view.summary.total_cost_saved, 168.6);
        assert_eq!(view.summary.currency, "€");
    }

    #[test]
    fn test_view_helpers() {
        let repo = FixedReadingRepository::new();
        let view = DashboardUseCase::new(&repo).build().unwrap().view(Rounding::default());

        assert_eq!(
            view.month_labels(),
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(view.max_produced_kwh(), 124.8);
    }

    #[test]
    fn test_view_serializes_to_json() {
        let repo = FixedReadingRepository::new();
        let view = DashboardUseCase::new(&repo).build().unwrap().view(Rounding::default());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["months"].as_array().unwrap().len(), 12);
        assert_eq!(json["months"][0]["month_label"], "Jan");
        assert_eq!(json["summary"]["average_self_consumed_pct"], 71.21);
        assert_eq!(json["rounding"]["kwh_places"], 1);
    }

    #[test]
    fn test_custom_price() {
        let repo = MockReadingRepo {
            readings: vec![
                MonthlyReading::new(Month::June, 100.0, 40.0),
                MonthlyReading::new(Month::July, 100.0, 20.0),
            ],
        };
        let dashboard = DashboardUseCase::with_price(&repo, 0.5).build().unwrap();

        assert_eq!(dashboard.summary.total_consumed_kwh, 140.0);
        assert_eq!(dashboard.summary.average_self_consumed_pct, 70.0);
        assert_eq!(dashboard.summary.total_cost_saved, 70.0);
    }

    #[test]
    fn test_zero_production_aborts_build() {
        let repo = MockReadingRepo {
            readings: vec![
                MonthlyReading::new(Month::November, 24.13, 3.61),
                MonthlyReading::new(Month::December, 0.0, 0.0),
            ],
        };

        let err = DashboardUseCase::new(&repo).build().unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::ZeroProduction { month: "Dec".to_string() })
        );
    }

    #[test]
    fn test_repository_error_propagates() {
        let err = DashboardUseCase::new(&BrokenReadingRepo).build().unwrap_err();
        assert_eq!(err.to_string(), "readings unavailable");
    }

    #[test]
    fn test_build_twice_is_identical() {
        let repo = FixedReadingRepository::new();
        let usecase = DashboardUseCase::new(&repo);
        assert_eq!(usecase.build().unwrap(), usecase.build().unwrap());
    }
}

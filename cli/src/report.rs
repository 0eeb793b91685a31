use balcony_solar_core::DashboardView;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Produced")]
    produced: String,
    #[tabled(rename = "Fed Into Grid")]
    fed_in: String,
    #[tabled(rename = "Self-consumed")]
    consumed: String,
    #[tabled(rename = "Self-consumed (%)")]
    consumed_pct: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Year Statistics")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn monthly_table(view: &DashboardView) -> String {
    let rounding = &view.rounding;
    let rows: Vec<MonthRow> = view
        .months
        .iter()
        .map(|m| MonthRow {
            month: m.month_label.clone(),
            produced: rounding.kwh_label(m.energy_produced_kwh),
            fed_in: rounding.kwh_label(m.energy_fed_into_grid_kwh),
            consumed: rounding.kwh_label(m.energy_consumed_kwh),
            consumed_pct: rounding.pct_label(m.energy_consumed_pct),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Rows::first(), Color::FG_CYAN); // Header color
    table.to_string()
}

pub fn summary_table(view: &DashboardView) -> String {
    let rounding = &view.rounding;
    let summary = &view.summary;
    let rows = vec![
        SummaryRow {
            label: "Total Solar Energy Produced",
            value: rounding.kwh_label(summary.total_produced_kwh),
        },
        SummaryRow {
            label: "Total Solar Energy Fed Into Grid",
            value: rounding.kwh_label(summary.total_fed_into_grid_kwh),
        },
        SummaryRow {
            label: "Total Solar Energy Consumed",
            value: rounding.kwh_label(summary.total_consumed_kwh),
        },
        SummaryRow {
            label: "Average Self-consumed Solar Energy",
            value: rounding.pct_label(summary.average_self_consumed_pct),
        },
        SummaryRow {
            label: "Total Cost Savings",
            value: rounding.currency_label(summary.total_cost_saved, &summary.currency),
        },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Rows::first(), Color::FG_CYAN);
    table.to_string()
}

pub fn show_report(view: &DashboardView) {
    println!("\n\x1b[1;36mBalcony Solar Statistics\x1b[0m (price: {} {}/kWh)", view.price_per_kwh, view.summary.currency);
    println!("{}", monthly_table(view));
    println!("{}", summary_table(view));
}

#[cfg(test)]
mod tests {
    use super::*;
    use balcony_solar_core::{DashboardUseCase, FixedReadingRepository, Rounding};

    fn view() -> DashboardView {
        let repo = FixedReadingRepository::new();
        DashboardUseCase::new(&repo).build().unwrap().view(Rounding::default())
    }

    #[test]
    fn test_monthly_table_rows() {
        let table = monthly_table(&view());
        assert!(table.contains("Jan"));
        assert!(table.contains("Dec"));
        assert!(table.contains("24.8 kWh"));
        assert!(table.contains("80.36%"));
        // Header + 12 months
        assert_eq!(table.lines().filter(|l| l.contains(" kWh")).count(), 12);
    }

    #[test]
    fn test_summary_table_values() {
        let table = summary_table(&view());
        assert!(table.contains("828.4 kWh"));
        assert!(table.contains("238.5 kWh"));
        assert!(table.contains("589.9 kWh"));
        assert!(table.contains("71.21%"));
        assert!(table.contains("168.60 €"));
    }
}

mod report;
mod tui;

use anyhow::Result;
use balcony_solar_core::{DashboardUseCase, FixedReadingRepository, Rounding};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "balcony-solar")]
#[command(about = "Solar energy statistics of a balcony power plant over one year", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq)]
enum Commands {
    /// Open the dashboard in the terminal (default)
    Tui,
    /// Print monthly and yearly statistics as tables
    Table,
    /// Print the dashboard data as JSON
    Json,
}

fn init_tracing() {
    // Respects RUST_LOG; stderr keeps stdout clean for table/json output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    info!(?command, "rendering balcony solar statistics");

    let repo = FixedReadingRepository::new();
    let dashboard = DashboardUseCase::new(&repo).build()?;
    let view = dashboard.view(Rounding::default());

    match command {
        Commands::Tui => tui::run(view)?,
        Commands::Table => report::show_report(&view),
        Commands::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::parse_from(["balcony-solar"]);
        assert_eq!(cli.command.unwrap_or(Commands::Tui), Commands::Tui);
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(Cli::parse_from(["balcony-solar", "table"]).command, Some(Commands::Table));
        assert_eq!(Cli::parse_from(["balcony-solar", "json"]).command, Some(Commands::Json));
        assert!(Cli::try_parse_from(["balcony-solar", "chart"]).is_err());
    }
}

use balcony_solar_core::{DashboardView, Rounding};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Axis, Block, BorderType, Borders, Chart, Dataset, Gauge, GraphType, Padding, Paragraph, Wrap,
    },
    Frame,
};

use crate::tui::app::DashboardApp;
use crate::tui::radar;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    grid: Color,
    produced: Color,
    fed_in: Color,
    consumed: Color,
    average: Color,
    savings: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    grid: Color::DarkGray,
    produced: Color::Yellow,
    fed_in: Color::Blue,
    consumed: Color::Green,
    average: Color::Red,
    savings: Color::Magenta,
};

const INTRODUCTION: &str = "I tracked the energy production (and consumption) of my \"Balkonkraftwerk\" over a \
full year. For the energy fed into grid I do not get disbursement so I tried to self-consume as much \
energy as possible. Here are the results:";

const RING_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const FILL_STEPS: usize = 8;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" {} ", title))
}

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let view = &app.view;

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Introduction
            Constraint::Min(14),   // Charts
            Constraint::Length(7), // Year statistics
            Constraint::Length(4), // Conclusion
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    // --- Header ---
    let title = Paragraph::new(Span::styled(
        "Balcony Solar Statistics",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(THEME.muted)));
    frame.render_widget(title, main_layout[0]);

    let intro = Paragraph::new(INTRODUCTION)
        .style(Style::default().fg(THEME.text))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(intro, main_layout[1]);

    // --- Charts ---
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1), // Gutter
            Constraint::Percentage(50),
        ])
        .split(main_layout[2]);

    draw_radar(frame, view, chart_chunks[0]);
    draw_self_consumption(frame, view, chart_chunks[2]);

    draw_year_statistics(frame, view, main_layout[3]);
    draw_conclusion(frame, view, main_layout[4]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q / Esc", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    frame.render_widget(footer, main_layout[5]);
}

fn legend_entry(color: Color, label: String) -> Vec<Span<'static>> {
    vec![
        Span::styled(" ■ ", Style::default().fg(color)),
        Span::styled(label, Style::default().fg(THEME.text)),
        Span::raw(" "),
    ]
}

fn draw_radar(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let produced: Vec<f64> = view.months.iter().map(|m| m.energy_produced_kwh).collect();
    let fed_in: Vec<f64> = view.months.iter().map(|m| m.energy_fed_into_grid_kwh).collect();
    let labels = view.month_labels();
    let count = labels.len();
    let max = view.max_produced_kwh();

    let mut legend = legend_entry(THEME.produced, "Solar Energy Produced [kWh]".to_string());
    legend.extend(legend_entry(THEME.fed_in, "Solar Energy Fed Into Grid [kWh]".to_string()));

    let canvas = Canvas::default()
        .block(panel("Energy Consumed and Fed Into Grid").title_bottom(Line::from(legend)))
        .marker(Marker::Braille)
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            // Spider web
            for fraction in RING_FRACTIONS {
                for ((x1, y1), (x2, y2)) in radar::edges(&radar::ring(fraction, count)) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, THEME.grid));
                }
            }
            for i in 0..count {
                let (x, y) = radar::point(1.0, i, count);
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, THEME.grid));
            }
            ctx.layer();

            // Fed-in sits inside produced, so it is painted last to stay visible.
            for (values, color) in [(&produced, THEME.produced), (&fed_in, THEME.fed_in)] {
                let vertices = radar::polygon(values, max);
                for ((x1, y1), (x2, y2)) in radar::fill_segments(&vertices, FILL_STEPS) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
                for ((x1, y1), (x2, y2)) in radar::edges(&vertices) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
                ctx.layer();
            }

            for (i, label) in labels.iter().enumerate() {
                let (x, y) = radar::point(1.15, i, count);
                ctx.print(
                    x - 0.08,
                    y,
                    Span::styled(label.to_string(), Style::default().fg(THEME.text)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_self_consumption(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let rounding = &view.rounding;
    let bars: Vec<(f64, f64)> = view
        .months
        .iter()
        .enumerate()
        .map(|(i, m)| (i as f64, m.energy_consumed_pct))
        .collect();

    // Reference line drawn between the first and the last month only.
    let last = view.months.len().saturating_sub(1) as f64;
    let average = view.summary.average_self_consumed_pct;
    let average_line = [(0.0, average), (last, average)];

    let average_label = format!("Average [{}]", rounding.pct_label(average));
    let mut legend = legend_entry(THEME.consumed, "Self-consumed Solar Energy [%]".to_string());
    legend.extend(legend_entry(THEME.average, average_label.clone()));

    let datasets = vec![
        Dataset::default()
            .name("Self-consumed Solar Energy [%]")
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(THEME.consumed))
            .data(&bars),
        Dataset::default()
            .name(average_label)
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(THEME.average))
            .data(&average_line),
    ];

    let chart = Chart::new(datasets)
        .block(panel("Self-consumed Energy").title_bottom(Line::from(legend)))
        .legend_position(None)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, last])
                .labels(view.month_labels()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, 105.0])
                .labels(["0%", "35%", "70%", "105%"]),
        );

    frame.render_widget(chart, area);
}

fn metric_card<'a>(title: &'a str, value: String, color: Color) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD))),
    ])
    .alignment(Alignment::Center)
    .block(panel(title))
}

fn draw_year_statistics(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let rounding: &Rounding = &view.rounding;
    let summary = &view.summary;

    let section = panel("Year Statistics");
    let inner = section.inner(area);
    frame.render_widget(section, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner);

    frame.render_widget(
        metric_card("Total Solar Energy Produced", rounding.kwh_label(summary.total_produced_kwh), THEME.produced),
        chunks[0],
    );
    frame.render_widget(
        metric_card("Total Solar Energy Consumed", rounding.kwh_label(summary.total_consumed_kwh), THEME.consumed),
        chunks[1],
    );
    frame.render_widget(
        metric_card(
            "Total Cost Savings",
            rounding.currency_label(summary.total_cost_saved, &summary.currency),
            THEME.savings,
        ),
        chunks[2],
    );

    let ratio = (summary.average_self_consumed_pct / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(panel("Self-consumed on Average"))
        .gauge_style(Style::default().fg(THEME.consumed))
        .ratio(ratio)
        .label(rounding.pct_label(summary.average_self_consumed_pct));
    frame.render_widget(gauge, chunks[3]);
}

fn draw_conclusion(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let text = format!(
        "I was able to self-consume about {:.0}% of the energy produced by my solar panels over the year. \
         This number is highly dependent on the own energy consumption curve and might be optimized further, \
         e.g. by charging electrical devices during daytime and not at night.",
        view.summary.average_self_consumed_pct
    );
    let conclusion = Paragraph::new(text)
        .style(Style::default().fg(THEME.text))
        .wrap(Wrap { trim: true })
        .block(panel("Conclusion"));
    frame.render_widget(conclusion, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use balcony_solar_core::{DashboardUseCase, FixedReadingRepository};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(width: u16, height: u16) -> String {
        let repo = FixedReadingRepository::new();
        let view = DashboardUseCase::new(&repo).build().unwrap().view(Rounding::default());
        let app = DashboardApp::new(view);

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_sections() {
        let screen = render(160, 50);
        assert!(screen.contains("Balcony Solar Statistics"));
        assert!(screen.contains("Energy Consumed and Fed Into Grid"));
        assert!(screen.contains("Self-consumed Energy"));
        assert!(screen.contains("Year Statistics"));
        assert!(screen.contains("Conclusion"));
        assert!(screen.contains("QUIT"));
    }

    #[test]
    fn test_dashboard_metrics() {
        let screen = render(160, 50);
        assert!(screen.contains("828.4 kWh"));
        assert!(screen.contains("589.9 kWh"));
        assert!(screen.contains("168.60 €"));
        assert!(screen.contains("71.21%"));
    }

    #[test]
    fn test_chart_legends_fit_standard_width() {
        let screen = render(160, 50);
        assert!(screen.contains("Average [71.21%]"));
        assert!(screen.contains("Solar Energy Fed Into Grid [kWh]"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        render(40, 12);
    }
}

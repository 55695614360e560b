//! TUI rendering
//!
//! One draw function per chart screen; the dashboard composes smaller
//! versions of each panel in a 2x2 grid.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph, Sparkline},
    Frame,
};

use crate::display::report::{format_bar, truncate};
use crate::models::format_date;

use super::app::{App, Screen};

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;
const SAVINGS_COLOR: Color = Color::Blue;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    if !app.has_data() {
        let notice = Paragraph::new("No data to visualize.")
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, chunks[1]);
    } else {
        match app.current_screen {
            Screen::Dashboard => draw_dashboard(frame, app, chunks[1]),
            Screen::IncomeExpense => draw_income_expense(frame, app, chunks[1]),
            Screen::OverTime => draw_over_time(frame, app, chunks[1]),
            Screen::Savings => draw_savings(frame, app, chunks[1]),
            Screen::Breakdown => draw_breakdown(frame, app, chunks[1]),
        }
    }

    let footer = Paragraph::new("Tab/Shift-Tab: switch chart   q: quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.summary;
    let net = summary.net_savings();
    let net_style = if net.is_negative() {
        Style::default().fg(EXPENSE_COLOR)
    } else {
        Style::default().fg(INCOME_COLOR)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.current_screen.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("| Income: "),
        Span::styled(summary.total_income.to_string(), Style::default().fg(INCOME_COLOR)),
        Span::raw("  Expense: "),
        Span::styled(summary.total_expense.to_string(), Style::default().fg(EXPENSE_COLOR)),
        Span::raw("  Net: "),
        Span::styled(net.to_string(), net_style),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Personal Finance Tracker"),
    );
    frame.render_widget(header, area);
}

fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    draw_income_expense(frame, app, top[0]);
    draw_savings_sparkline(frame, app, top[1]);
    draw_monthly(frame, app, bottom[0]);
    draw_breakdown(frame, app, bottom[1]);
}

fn draw_income_expense(frame: &mut Frame, app: &App, area: Rect) {
    let income = to_u64(app.summary.total_income.to_f64());
    let expense = to_u64(app.summary.total_expense.to_f64());
    let data = [("Income", income), ("Expense", expense)];

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Income vs Expense"),
        )
        .data(data.as_slice())
        .bar_width(11)
        .bar_gap(3)
        .bar_style(Style::default().fg(SAVINGS_COLOR))
        .value_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(chart, area);
}

fn draw_over_time(frame: &mut Frame, app: &App, area: Rect) {
    let income_points = to_points(&app.daily_income);
    let expense_points = to_points(&app.daily_expense);

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(INCOME_COLOR))
            .data(&income_points),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(EXPENSE_COLOR))
            .data(&expense_points),
    ];

    let max_y = income_points
        .iter()
        .chain(expense_points.iter())
        .map(|(_, y)| *y)
        .fold(0.0_f64, f64::max);
    let max_x = (income_points.len().max(expense_points.len()).max(2) - 1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Transactions Over Time (daily totals)"),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels(date_labels(&app.daily_income, &app.daily_expense)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_y * 1.1])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", max_y * 1.1)),
                ]),
        );
    frame.render_widget(chart, area);
}

fn draw_savings(frame: &mut Frame, app: &App, area: Rect) {
    let points: Vec<(f64, f64)> = app
        .savings
        .iter()
        .enumerate()
        .map(|(i, (_, m))| (i as f64, m.to_f64()))
        .collect();

    let min_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::min);
    let max_y = points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max);
    let max_x = (points.len().max(2) - 1) as f64;

    let datasets = vec![Dataset::default()
        .name("Savings")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(SAVINGS_COLOR))
        .data(&points)];

    let x_labels = match (app.savings.first(), app.savings.last()) {
        (Some((first, _)), Some((last, _))) => vec![
            Span::raw(format_date(*first)),
            Span::raw(format_date(*last)),
        ],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Cumulative Savings Over Time"),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([min_y * 1.1, max_y * 1.1])
                .labels(vec![
                    Span::raw(format!("{:.0}", min_y * 1.1)),
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", max_y * 1.1)),
                ]),
        );
    frame.render_widget(chart, area);
}

fn draw_savings_sparkline(frame: &mut Frame, app: &App, area: Rect) {
    // Sparklines cannot show negative values; shift the series up by its minimum
    let min = app
        .savings
        .iter()
        .map(|(_, m)| m.cents())
        .min()
        .unwrap_or(0)
        .min(0);
    let data: Vec<u64> = app
        .savings
        .iter()
        .map(|(_, m)| (m.cents() - min) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Cumulative Savings"),
        )
        .style(Style::default().fg(SAVINGS_COLOR))
        .data(&data);
    frame.render_widget(sparkline, area);
}

fn draw_monthly(frame: &mut Frame, app: &App, area: Rect) {
    let max = app
        .months
        .iter()
        .flat_map(|(_, m)| [m.income, m.expense])
        .max()
        .unwrap_or_default()
        .to_f64();

    let width = (area.width.saturating_sub(26)) as usize;
    let mut lines = Vec::new();
    for (month, totals) in &app.months {
        lines.push(Line::from(vec![
            Span::raw(format!("{} in  ", month)),
            Span::styled(
                format_bar(totals.income.to_f64(), max, width),
                Style::default().fg(INCOME_COLOR),
            ),
            Span::raw(format!(" {}", totals.income)),
        ]));
        lines.push(Line::from(vec![
            Span::raw(format!("{} out ", month)),
            Span::styled(
                format_bar(totals.expense.to_f64(), max, width),
                Style::default().fg(EXPENSE_COLOR),
            ),
            Span::raw(format!(" {}", totals.expense)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Monthly Breakdown"),
    );
    frame.render_widget(panel, area);
}

fn draw_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let total: f64 = app.breakdown.iter().map(|(_, m)| m.to_f64()).sum();
    let max = app
        .breakdown
        .iter()
        .map(|(_, m)| m.to_f64())
        .fold(0.0_f64, f64::max);

    let width = (area.width.saturating_sub(36)) as usize;
    let visible = (area.height.saturating_sub(2)) as usize;
    let mut lines = Vec::new();
    for (desc, amount) in app.breakdown.iter().take(visible) {
        let pct = if total > 0.0 {
            amount.to_f64() / total * 100.0
        } else {
            0.0
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<16} ", truncate(desc, 16))),
            Span::styled(
                format_bar(amount.to_f64(), max, width),
                Style::default().fg(EXPENSE_COLOR),
            ),
            Span::raw(format!(" {:>10} {:>5.1}%", amount.to_string(), pct)),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Expense Breakdown by Description"),
    );
    frame.render_widget(panel, area);
}

fn to_u64(value: f64) -> u64 {
    if value <= 0.0 {
        0
    } else {
        value.round() as u64
    }
}

fn to_points(series: &[(chrono::NaiveDate, crate::models::Money)]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, (_, m))| (i as f64, m.to_f64()))
        .collect()
}

fn date_labels(
    income: &[(chrono::NaiveDate, crate::models::Money)],
    expense: &[(chrono::NaiveDate, crate::models::Money)],
) -> Vec<Span<'static>> {
    let first = income.first().map(|(d, _)| *d).into_iter()
        .chain(expense.first().map(|(d, _)| *d))
        .min();
    let last = income.last().map(|(d, _)| *d).into_iter()
        .chain(expense.last().map(|(d, _)| *d))
        .max();

    match (first, last) {
        (Some(first), Some(last)) => vec![
            Span::raw(format_date(first)),
            Span::raw(format_date(last)),
        ],
        _ => Vec::new(),
    }
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::analysis::format::{money, percent};
use crate::ui::app::{App, RECENT_COUNT};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(8),    // Insights + chart
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    render_insights(f, lower[0], app);
    render_spending_chart(f, lower[1], app);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(34),
        ])
        .split(area);

    let totals = &app.snapshot.analysis.comparison.totals;
    let count = app.transactions().len();

    render_card(
        f,
        cards[0],
        "Total Spent",
        money(totals.total_spent),
        theme::ACCENT,
        format!("{count} transaction{}", if count == 1 { "" } else { "s" }),
    );

    let (remaining_color, used) = match totals.overall_utilization {
        Some(u) => (
            if totals.total_remaining < Decimal::ZERO {
                theme::RED
            } else {
                theme::GREEN
            },
            format!("{}% of budget used", percent(u)),
        ),
        None => (theme::TEXT_DIM, "No budgets set".to_string()),
    };
    render_card(
        f,
        cards[1],
        "Budget Remaining",
        money(totals.total_remaining),
        remaining_color,
        used,
    );

    match app.snapshot.top_category() {
        Some(top) => render_card(
            f,
            cards[2],
            "Top Category",
            top.category.to_string(),
            theme::YELLOW,
            money(top.spent),
        ),
        None => render_card(
            f,
            cards[2],
            "Top Category",
            "None".to_string(),
            theme::TEXT_DIM,
            "No spending yet".to_string(),
        ),
    }

    render_recent(f, cards[3], app);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color, subtitle: String) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let recent = app.snapshot.recent(RECENT_COUNT);
    let width = area.width.saturating_sub(4) as usize;

    let lines: Vec<Line> = if recent.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
        ]
    } else {
        recent
            .iter()
            .map(|t| {
                let amount = money(t.amount);
                let room = width.saturating_sub(amount.chars().count() + 1);
                let desc = truncate(&t.description, room);
                let pad = room.saturating_sub(desc.chars().count());
                Line::from(vec![
                    Span::styled(desc, theme::normal_style()),
                    Span::raw(" ".repeat(pad + 1)),
                    Span::styled(amount, Style::default().fg(theme::ACCENT)),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(panel("Recent")), area);
}

fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .snapshot
        .analysis
        .insights
        .iter()
        .map(|insight| {
            let color = theme::insight_color(insight.kind);
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(truncate(&insight.message, width), theme::normal_style()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Insights")), area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let rows = &app.snapshot.analysis.comparison.categories;
    let spent: Vec<_> = rows.iter().filter(|r| r.spent > Decimal::ZERO).collect();

    if spent.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No spending in {}", app.month.label()),
                theme::dim_style(),
            )),
            Line::from(Span::styled(
                "Add one with :add <date> <category> <amount> <description>",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(panel("Spending by Category"));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = spent
        .iter()
        .map(|row| {
            let color = theme::status_color(row.status);
            Bar::default()
                .value(row.spent.round().to_u64().unwrap_or(0))
                .text_value(money(row.spent))
                .label(Line::from(truncate(row.category.as_str(), 12)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2);

    f.render_widget(chart, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::analysis::format::{money, percent};
use crate::analysis::{CategoryInsight, Totals};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::progress_bar;

const BAR_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = app.budget_rows();
    if rows.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(app.budget_scroll)
        .take(chunks[0].height.saturating_sub(2) as usize)
        .map(|(i, row)| {
            let style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            category_line(row, style)
        })
        .collect();

    let title = if app.snapshot.budgets.is_empty() {
        format!(
            " Budgets for {} · none set, use :budget <category> <amount> ",
            app.month.label()
        )
    } else {
        format!(" Budgets for {} ", app.month.label())
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title, theme::title_style())),
    );
    f.render_widget(list, chunks[0]);

    render_totals(f, chunks[1], &app.snapshot.analysis.comparison.totals);
}

fn category_line(row: &CategoryInsight, style: Style) -> ListItem<'static> {
    let color = theme::status_color(row.status);
    let budgeted = if row.budgeted > Decimal::ZERO {
        money(row.budgeted)
    } else {
        "no budget".to_string()
    };
    // No budget but some spend draws as a full bar.
    let fill = row.utilization.unwrap_or(if row.spent > Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    });
    let used = row
        .utilization
        .map(|u| format!("{:>6}%", percent(u)))
        .unwrap_or_else(|| format!("{:>7}", "—"));

    ListItem::new(Line::from(vec![
        Span::styled(format!(" {:<15}", row.category.as_str()), style),
        Span::styled(
            format!("{:>12} / {:<12}", money(row.spent), budgeted),
            Style::default().fg(color),
        ),
        Span::styled(progress_bar(fill, BAR_WIDTH), Style::default().fg(color)),
        Span::styled(used, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {:<8}", row.status.as_str()), Style::default().fg(color)),
        Span::styled(
            format!("{} left", money(row.remaining)),
            theme::dim_style(),
        ),
    ]))
}

fn render_totals(f: &mut Frame, area: Rect, totals: &Totals) {
    let remaining_color = if totals.total_remaining < Decimal::ZERO {
        theme::RED
    } else {
        theme::GREEN
    };
    let used = totals
        .overall_utilization
        .map(|u| format!("{}% used", percent(u)))
        .unwrap_or_else(|| "no budget".to_string());

    let line = Line::from(vec![
        Span::styled(" Total  ", theme::title_style()),
        Span::styled(
            format!("{} / {}", money(totals.total_spent), money(totals.total_budget)),
            theme::normal_style(),
        ),
        Span::styled(format!("   {used}   "), theme::dim_style()),
        Span::styled(
            format!("{} remaining", money(totals.total_remaining)),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style());
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No budgets set for {}", app.month.label()),
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Set up budgets to start tracking your spending: :budget <category> <amount>",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Budgets ", theme::title_style())),
    );
    f.render_widget(msg, area);
}

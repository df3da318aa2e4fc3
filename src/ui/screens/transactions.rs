use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::analysis::format::money;
use crate::models::DATE_FORMAT;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.transactions();
    let title = format!(
        " Transactions · {} ({}) ",
        app.month.label(),
        transactions.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()));

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No transactions for {}", app.month.label()),
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <YYYY-MM-DD> <category> <amount> <description>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header = Row::new(
        ["ID", "Date", "Description", "Category", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(txn.id.map(|id| id.to_string()).unwrap_or_default()),
                Cell::from(txn.date.format(DATE_FORMAT).to_string()),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(txn.category.as_str()),
                Cell::from(
                    Line::from(Span::styled(
                        money(txn.amount),
                        Style::default().fg(theme::ACCENT),
                    ))
                    .right_aligned(),
                ),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(15),
        Constraint::Length(16),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

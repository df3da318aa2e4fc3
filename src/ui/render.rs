use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, chunks[1], app),
        Screen::Transactions => super::screens::transactions::render(f, chunks[1], app),
        Screen::Budgets => super::screens::budgets::render(f, chunks[1], app),
    }
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let style = if *s == app.screen {
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            Line::from(Span::styled(format!("{}:{s}", i + 1), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Confirm => theme::RED,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} | {} txns",
        app.screen,
        app.month.label(),
        app.transactions().len()
    );

    let right = match app.screen {
        Screen::Dashboard => " H/L month | :add | ? help ",
        Screen::Transactions => " e edit | D delete | H/L month | ? help ",
        Screen::Budgets => " :budget <category> <amount> | ? help ",
    };

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(
                " Press : for commands, ? for help",
                theme::dim_style(),
            )),
            None,
        ),
        InputMode::Normal => (
            Line::from(Span::styled(
                &app.status_message,
                theme::command_bar_style(),
            )),
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn help_text(app_version: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" FinTrack {app_version} "),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section("Navigation"),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           1-3        Switch tabs",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  H/L              Prev/Next month       Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        section("Actions"),
        Line::from(Span::styled(
            "  :                Command mode          Esc        Cancel",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  e (Transactions) Edit selected         D          Delete selected",
            theme::normal_style(),
        )),
        Line::from(""),
        section("Commands"),
    ];

    // One line per command; the longest name stands in for its aliases.
    let mut by_description: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        match by_description
            .iter_mut()
            .find(|(_, desc)| *desc == cmd.description)
        {
            Some(entry) if entry.0.len() < name.len() => entry.0 = name,
            Some(_) => {}
            None => by_description.push((name, cmd.description)),
        }
    }
    by_description.sort_by_key(|(name, _)| *name);
    for (name, desc) in by_description {
        lines.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            theme::normal_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));
    lines
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let text = help_text(env!("CARGO_PKG_VERSION"));

    let popup_height = (text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 96.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

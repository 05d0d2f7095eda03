pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

pub use terminal::TerminalGuard;
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, app: &App) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    let alerts = app.store.state().alerts.alerts();

    // Header, alert stack (grows with the list), content, hint bar.
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(alerts.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, layout[0], app, &theme);
    components::alerts::render(frame, layout[1], alerts, &theme);

    match app.screen {
        Screen::Login => screens::login::render(frame, layout[2], app, &theme),
        Screen::MoneyMaps => screens::money_maps::render(frame, layout[2], app, &theme),
        Screen::AddMoneyMap => screens::add_money_map::render(frame, layout[2], app, &theme),
        Screen::MoneyMap => screens::money_map::render(frame, layout[2], app, &theme),
        Screen::Account => screens::account::render(frame, layout[2], app, &theme),
    }

    render_hint_bar(frame, layout[3], app, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let session = &app.store.state().session;
    let mut parts = vec![Span::styled("Money Map", Style::default().fg(theme.accent))];
    if session.is_authenticated() && !session.email.is_empty() {
        parts.push(Span::styled("  user", Style::default().fg(theme.dim)));
        parts.push(Span::raw(format!(": {}", session.email)));
    }
    if app.busy {
        parts.push(Span::styled("  working...", Style::default().fg(theme.dim)));
    }
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn render_hint_bar(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let mut parts = hint_parts(app, theme);

    if !app.store.state().alerts.alerts().is_empty() {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled("1-9", Style::default().fg(theme.accent)));
        parts.push(Span::raw(" dismiss alert"));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn hint_parts(app: &App, theme: &Theme) -> Vec<Span<'static>> {
    let key = |label: &'static str| Span::styled(label, Style::default().fg(theme.accent));

    match app.screen {
        Screen::Login => vec![
            key("Tab"),
            Span::raw(" next field  "),
            key("Enter"),
            Span::raw(" sign in  "),
            key("Esc"),
            Span::raw(" quit"),
        ],
        Screen::MoneyMaps => vec![
            key("↑/↓"),
            Span::raw(" select  "),
            key("Enter"),
            Span::raw(" open  "),
            key("a"),
            Span::raw(" add  "),
            key("r"),
            Span::raw(" refresh  "),
            key("p"),
            Span::raw(" profile  "),
            key("q"),
            Span::raw(" quit"),
        ],
        Screen::AddMoneyMap => vec![
            key("Enter"),
            Span::raw(" create  "),
            key("Esc"),
            Span::raw(" back"),
        ],
        Screen::MoneyMap => {
            if app.store.state().forms.money_map_edit_enabled {
                vec![
                    key("Enter"),
                    Span::raw(" save  "),
                    key("Esc"),
                    Span::raw(" back"),
                ]
            } else {
                vec![
                    key("↑/↓"),
                    Span::raw(" select account  "),
                    key("e"),
                    Span::raw(" rename  "),
                    key("r"),
                    Span::raw(" refresh  "),
                    key("b"),
                    Span::raw(" back"),
                ]
            }
        }
        Screen::Account => {
            if app.store.state().forms.account_edit_enabled {
                vec![
                    key("Tab"),
                    Span::raw(" next field  "),
                    key("Enter"),
                    Span::raw(" save  "),
                    key("Esc"),
                    Span::raw(" back"),
                ]
            } else {
                vec![
                    key("e"),
                    Span::raw(" edit  "),
                    key("b"),
                    Span::raw(" back"),
                ]
            }
        }
    }
}

/// Centers a fixed-size box inside `area`, clamped to its bounds.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

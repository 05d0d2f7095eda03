use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, LoginField};
use crate::ui::{Theme, centered_rect};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let box_area = centered_rect(area, 46, 8);

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let masked = "*".repeat(app.login.password.chars().count());
    render_field(
        frame,
        rows[0],
        "Email",
        &app.login.email,
        app.login.focus == LoginField::Email,
        theme,
    );
    render_field(
        frame,
        rows[2],
        "Password",
        &masked,
        app.login.focus == LoginField::Password,
        theme,
    );
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dim)
    };
    let cursor = if focused { "_" } else { "" };
    let line = Line::from(vec![
        Span::styled(format!("{label:>9}: "), label_style),
        Span::styled(format!("{value}{cursor}"), Style::default().fg(theme.text)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

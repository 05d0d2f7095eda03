use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AccountField, App};
use crate::ui::{Theme, centered_rect};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let box_area = centered_rect(area, 52, 9);

    let block = Block::default()
        .title(" Profile ")
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
            Constraint::Length(1),
        ])
        .split(inner);

    let editing = app.store.state().forms.account_edit_enabled;
    let session = &app.store.state().session;

    if editing {
        render_field(
            frame,
            rows[0],
            "First name",
            &app.account_form.first_name,
            app.account_form.focus == AccountField::FirstName,
            theme,
        );
        render_field(
            frame,
            rows[2],
            "Last name",
            &app.account_form.last_name,
            app.account_form.focus == AccountField::LastName,
            theme,
        );
        render_field(
            frame,
            rows[4],
            "Email",
            &app.account_form.email,
            app.account_form.focus == AccountField::Email,
            theme,
        );
    } else {
        render_value(frame, rows[0], "First name", &session.first_name, theme);
        render_value(frame, rows[2], "Last name", &session.last_name, theme);
        render_value(frame, rows[4], "Email", &session.email, theme);
    }
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
        Span::styled(format!("{label:>11}: "), label_style),
        Span::styled(format!("{value}{cursor}"), Style::default().fg(theme.text)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_value(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!("{label:>11}: "), Style::default().fg(theme.dim)),
        Span::styled(value.to_string(), Style::default().fg(theme.text)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let Some(entry) = app
        .current_map
        .as_deref()
        .and_then(|id| app.store.state().money_maps.get(id))
    else {
        let missing = Paragraph::new(Line::from(Span::styled(
            "Money map not loaded.",
            Style::default().fg(theme.dim),
        )));
        frame.render_widget(missing, area);
        return;
    };

    let rows_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let editing = app.store.state().forms.money_map_edit_enabled;
    let title = if editing {
        Line::from(vec![
            Span::styled("Rename: ", Style::default().fg(theme.accent)),
            Span::styled(
                format!("{}_", app.map_view.name_input),
                Style::default().fg(theme.text),
            ),
        ])
    } else {
        Line::from(Span::styled(
            entry.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(title), rows_area[0]);

    render_accounts(frame, rows_area[1], app, theme);
}

fn render_accounts(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let Some(entry) = app
        .current_map
        .as_deref()
        .and_then(|id| app.store.state().money_maps.get(id))
    else {
        return;
    };

    let block = Block::default()
        .title(" Accounts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if entry.accounts.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No accounts in this money map.",
            Style::default().fg(theme.dim),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row<'_>> = entry
        .accounts
        .values()
        .map(|account| {
            let account_type = account.account_type.clone().unwrap_or_default();
            let created = account
                .created
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            Row::new(vec![account.name.clone(), account_type, created])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(
        Row::new(vec!["Name", "Type", "Created"]).style(Style::default().fg(theme.dim)),
    )
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut table_state = TableState::default();
    table_state.select(Some(app.map_view.selected.min(entry.accounts.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}

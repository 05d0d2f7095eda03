use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::ui::Theme;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let maps = app.store.state().money_maps.money_maps();

    let block = Block::default()
        .title(" Money Maps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if maps.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No money maps yet. Press 'a' to add one.",
            Style::default().fg(theme.dim),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = maps
        .values()
        .map(|entry| {
            let accounts = entry.accounts.len();
            let label = if accounts == 1 {
                format!("{}  (1 account)", entry.name)
            } else {
                format!("{}  ({accounts} accounts)", entry.name)
            };
            ListItem::new(Line::from(Span::styled(
                label,
                Style::default().fg(theme.text),
            )))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.money_maps_view.selected.min(maps.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

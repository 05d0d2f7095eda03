use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::ui::{Theme, centered_rect};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let box_area = centered_rect(area, 46, 5);

    let block = Block::default()
        .title(" New Money Map ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let line = Line::from(vec![
        Span::styled("Name: ", Style::default().fg(theme.accent)),
        Span::styled(
            format!("{}_", app.add_form.name),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

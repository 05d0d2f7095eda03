use money_map_client::store::Alert;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::Theme;

/// Stacked notification banners, one per line, in arrival order.
/// The leading number is the dismissal key for that banner.
pub fn render(frame: &mut Frame<'_>, area: Rect, alerts: &[Alert], theme: &Theme) {
    if alerts.is_empty() || area.height == 0 {
        return;
    }

    let lines: Vec<Line<'_>> = alerts
        .iter()
        .enumerate()
        .take(area.height as usize)
        .map(|(index, alert)| {
            let color = theme.alert_color(alert.style);
            Line::from(vec![
                Span::styled(format!("[{}] ", index + 1), Style::default().fg(theme.dim)),
                Span::styled(alert.message.clone(), Style::default().fg(color)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

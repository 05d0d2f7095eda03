use money_map_client::store::AlertStyle;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(60, 70, 80),
            success: Color::Rgb(90, 180, 100),
            info: Color::Rgb(90, 150, 210),
            warning: Color::Rgb(210, 170, 80),
            danger: Color::Rgb(200, 80, 80),
        }
    }
}

impl Theme {
    /// Color for a notification banner, keyed by its visual style.
    pub fn alert_color(&self, style: AlertStyle) -> Color {
        match style {
            AlertStyle::Success => self.success,
            AlertStyle::Info => self.info,
            AlertStyle::Warning => self.warning,
            AlertStyle::Danger => self.danger,
            AlertStyle::Light | AlertStyle::Dark | AlertStyle::Secondary => self.dim,
        }
    }
}

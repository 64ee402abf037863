//! UI theme: colors are fixed once at startup and shared by every view.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub text_fg: Color,
    pub help_fg: Color,
    pub error_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    color_support_from(|key| std::env::var(key).ok())
}

fn color_support_from(env: impl Fn(&str) -> Option<String>) -> TerminalColorSupport {
    if let Some(value) = env("NBGO_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = env("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    let term = env("TERM").unwrap_or_default().to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") || term.contains("direct") {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

impl UiTheme {
    pub fn for_support(support: TerminalColorSupport) -> Self {
        match support {
            TerminalColorSupport::TrueColor | TerminalColorSupport::Ansi256 => Self {
                accent_fg: Color::Indexed(39),
                muted_fg: Color::Indexed(242),
                text_fg: Color::Reset,
                help_fg: Color::Indexed(241),
                error_fg: Color::Indexed(203),
            },
            TerminalColorSupport::Ansi16 => Self {
                accent_fg: Color::LightBlue,
                muted_fg: Color::DarkGray,
                text_fg: Color::Reset,
                help_fg: Color::DarkGray,
                error_fg: Color::LightRed,
            },
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_header_style(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text_fg)
    }

    pub fn selected_title_style(&self) -> Style {
        Style::default()
            .fg(self.accent_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn desc_style(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.help_fg)
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self::for_support(TerminalColorSupport::Ansi256)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;

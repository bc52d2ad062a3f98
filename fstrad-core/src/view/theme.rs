//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha colors used by the browser

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn title_style() -> Style {
    Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
}

pub fn border_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn selected_style() -> Style {
    Style::default()
        .bg(CURRENT_LINE)
        .fg(PINK)
        .add_modifier(Modifier::BOLD)
}

pub fn pending_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
}

/// Status line color follows the `✓` / `✗` prefix of the message.
pub fn status_style(message: &str) -> Style {
    let fg = if message.starts_with('✓') {
        GREEN
    } else if message.starts_with('✗') {
        RED
    } else {
        PINK
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

pub fn help_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn dialog_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn dialog_border_style() -> Style {
    Style::default().fg(PURPLE)
}

pub fn input_style() -> Style {
    Style::default().fg(YELLOW).bg(CURRENT_LINE)
}

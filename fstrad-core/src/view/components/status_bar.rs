//! src/view/components/status_bar.rs
//!
//! Bottom two lines: the status message (or the filter being typed) and the
//! key help.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::{
    model::app_state::{AppState, Mode},
    view::theme,
};

const BROWSE_HELP: &str =
    "↑/↓ naviguer • ← parent • → ouvrir • enter renommer • / filtrer • r recharger • q quitter";
const FILTER_HELP: &str = "tapez pour filtrer • enter valider • esc effacer";
const DIALOG_HELP: &str = "enter confirmer • esc annuler";

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status_line = if app.ui.filter_editing {
            Paragraph::new(format!("/{}", app.ui.filter.value()))
                .style(Style::default().fg(theme::YELLOW))
        } else if let Some(message) = &app.status_message {
            Paragraph::new(message.as_str()).style(theme::status_style(message))
        } else {
            let (done, total) = (
                app.entries.iter().filter(|e| !e.resolving).count(),
                app.entries.len(),
            );
            Paragraph::new(format!("{done}/{total} traduits"))
                .style(Style::default().fg(theme::COMMENT))
        };
        status_line.render(layout[0], frame.buffer_mut());

        let help = match app.mode {
            Mode::ConfirmingRename(_) => DIALOG_HELP,
            Mode::Browsing if app.ui.filter_editing => FILTER_HELP,
            Mode::Browsing => BROWSE_HELP,
        };
        Paragraph::new(help)
            .style(theme::help_style())
            .render(layout[1], frame.buffer_mut());

        if app.ui.filter_editing {
            let x = area.x + 1 + app.ui.filter.cursor() as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(1)), layout[0].y));
        }
    }
}

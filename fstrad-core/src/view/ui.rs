//! src/view/ui.rs
//! ============================================================
//! Draws one frame from `AppState`: entry table, status lines, and the
//! rename dialog on top when it is open.

use ratatui::prelude::*;
use tracing::{instrument, trace};

use crate::{
    model::app_state::{AppState, Mode},
    view::components::{
        object_table::EntryTable, rename_dialog::RenameDialogOverlay, status_bar::StatusBar,
    },
};

pub struct View;

impl View {
    #[instrument(level = "trace", skip_all)]
    pub fn redraw(frame: &mut Frame<'_>, app: &mut AppState) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(area);

        EntryTable::render(frame, app, chunks[0]);
        StatusBar::render(frame, app, chunks[1]);

        if let Mode::ConfirmingRename(dialog) = &app.mode {
            RenameDialogOverlay::render(frame, dialog, area);
        }

        app.ui.clear_redraw();
        trace!(entries = app.entries.len(), "frame rendered");
    }
}

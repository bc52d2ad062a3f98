//! ``src/view/components/rename_dialog.rs``
//! ============================================================================
//! # `RenameDialog`: centered confirmation box with an editable new name

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    model::app_state::RenameDialog,
    view::theme,
};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 13;

pub struct RenameDialogOverlay;

impl RenameDialogOverlay {
    #[allow(clippy::cast_possible_truncation)]
    pub fn render(frame: &mut Frame<'_>, dialog: &RenameDialog, area: Rect) {
        let overlay_area = Self::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        frame.render_widget(Clear, overlay_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::dialog_border_style())
            .style(theme::dialog_style());
        let inner = block.inner(overlay_area);
        frame.render_widget(block, overlay_area);

        let lines = vec![
            Line::from(Span::styled("Renommer:", theme::title_style())),
            Line::default(),
            Line::from(format!("  Ancien: {}", dialog.entry.name)),
            Line::from(format!("  Nouveau: {}", dialog.proposed_name)),
            Line::default(),
            Line::from("Modifier le nom:"),
            Line::from(Span::styled(input_view(dialog), theme::input_style())),
            Line::default(),
            Line::from(Span::styled(
                "[Enter] Confirmer  [Esc] Annuler",
                theme::help_style(),
            )),
        ];

        let padded = Rect {
            x: inner.x + 2,
            y: inner.y + 1,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(1),
        };
        frame.render_widget(Paragraph::new(lines), padded);

        if !dialog.in_flight {
            let cursor_x = padded.x + 2 + dialog.input.cursor() as u16;
            frame.set_cursor_position((
                cursor_x.min(padded.right().saturating_sub(1)),
                padded.y + 6,
            ));
        }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(height.min(area.height)),
                Constraint::Fill(1),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width.min(area.width)),
                Constraint::Fill(1),
            ])
            .split(vertical[1])[1]
    }
}

fn input_view(dialog: &RenameDialog) -> String {
    if dialog.input.is_empty() {
        return "> Nouveau nom...".to_string();
    }
    format!("> {}", dialog.input.value())
}

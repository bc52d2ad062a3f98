//! src/view/components/object_table.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

use crate::{
    fs::entry::ListItem,
    model::app_state::AppState,
    view::theme,
};

pub struct EntryTable;

impl EntryTable {
    pub fn render(frame: &mut Frame<'_>, app: &mut AppState, area: Rect) {
        // Borders, header row and its margin.
        app.ui.page_size = usize::from(area.height.saturating_sub(4)).max(1);

        let header = Row::new(vec!["Nom", "Traduction"])
            .style(Style::default().fg(theme::YELLOW).bold())
            .bottom_margin(1);

        let visible = app.visible_indices();
        let rows: Vec<Row> = visible
            .iter()
            .filter_map(|&idx| app.entries.get(idx))
            .map(|entry| {
                let name_style = if entry.is_dir {
                    Style::default().fg(theme::CYAN)
                } else {
                    Style::default().fg(theme::FOREGROUND)
                };
                let label_style = if entry.resolving {
                    theme::pending_style()
                } else {
                    Style::default().fg(theme::GREEN)
                };

                Row::new(vec![
                    Cell::from(entry.title()).style(name_style),
                    Cell::from(entry.description()).style(label_style),
                ])
            })
            .collect();

        let widths = [Constraint::Percentage(45), Constraint::Percentage(55)];

        let selected = (!visible.is_empty()).then_some(app.ui.selected);
        let mut table_state = TableState::default().with_selected(selected);

        let mut title = format!(" {} ", app.title());
        if !app.ui.filter.is_empty() {
            title.push_str(&format!("[/{}] ", app.ui.filter.value()));
        }

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(theme::title_style())
                    .border_style(theme::border_style())
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .row_highlight_style(theme::selected_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

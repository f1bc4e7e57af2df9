#![forbid(unsafe_code)]

use catalog_table::{PageToken, TableView};
use eframe::egui;

/// Range message on the left, pager row on the right. Returns the page a
/// click asked for.
pub(crate) fn ui_pager(ui: &mut egui::Ui, view: &TableView<'_>) -> Option<usize> {
    let mut target = None;
    ui.horizontal(|ui| {
        ui.label(view.range_message());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right_to_left lays out in reverse; walk the tokens backwards
            for token in view.tokens.iter().rev().copied() {
                if token_ui(ui, token) {
                    target = token.target(view.current_page);
                }
            }
        });
    });
    target
}

fn token_ui(ui: &mut egui::Ui, token: PageToken) -> bool {
    match token {
        PageToken::Prev { enabled } | PageToken::Next { enabled } => {
            ui.add_enabled(enabled, egui::Button::new(token.label())).clicked()
        }
        PageToken::Page { active, .. } => ui
            .add(egui::Button::new(token.label()).selected(active))
            .clicked(),
        PageToken::Ellipsis => {
            ui.label(token.label());
            false
        }
    }
}

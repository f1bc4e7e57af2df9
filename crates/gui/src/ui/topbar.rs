#![forbid(unsafe_code)]

use eframe::egui;

use crate::CatalogGuiApp;

pub(crate) fn ui_topbar(app: &mut CatalogGuiApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Products");
            ui.separator();
            ui_page_size(app, ui);
            ui.separator();
            ui.label("Search:");
            let te = egui::TextEdit::singleline(&mut app.inputs.search)
                .hint_text("Search by description or brand")
                .desired_width(280.0);
            if ui.add(te).changed() {
                app.on_search_changed();
            }
            if ui.small_button("×").on_hover_text("Clear search").clicked() && !app.inputs.search.is_empty() {
                app.inputs.search.clear();
                app.on_search_changed();
            }
            ui.separator();
            let refresh = ui
                .add_enabled(!app.fetch.in_flight, egui::Button::new("Refresh"))
                .on_hover_text("Fetch the catalog again");
            if refresh.clicked() {
                app.start_fetch();
            }
        });
    });
}

/// "Show [N] entries". Arrow keys step the buffer; blur or Enter commits.
fn ui_page_size(app: &mut CatalogGuiApp, ui: &mut egui::Ui) {
    ui.label("Show");
    let te = egui::TextEdit::singleline(&mut app.inputs.page_size.text)
        .desired_width(40.0)
        .horizontal_align(egui::Align::Center);
    let re = ui.add(te);
    if re.has_focus() {
        let (up, down) = ui.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp),
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown),
            )
        });
        if up {
            app.on_page_size_step(true);
        }
        if down {
            app.on_page_size_step(false);
        }
    }
    // Singleline edits drop focus on Enter, so this covers both blur and Enter
    if re.lost_focus() {
        app.on_page_size_commit();
    }
    ui.label("entries");
}

#![forbid(unsafe_code)]

use eframe::egui;

use crate::CatalogGuiApp;

pub(crate) fn ui_statusbar(app: &mut CatalogGuiApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_bar")
        .resizable(false)
        .default_height(24.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("items: {}", app.records.len()));
                ui.separator();
                ui.label(egui::RichText::new(app.api.source()).weak());
                if app.fetch.in_flight {
                    ui.separator();
                    ui.add(egui::Spinner::new());
                    if let Some(t0) = app.fetch.started_at {
                        ui.label(format!("fetching… {} ms", t0.elapsed().as_millis()));
                    }
                } else if let Some(ms) = app.fetch.last_ms {
                    ui.separator();
                    ui.label(format!("last fetch: {} ms", ms));
                }
                if let Some(err) = &app.fetch.last_error {
                    ui.separator();
                    ui.label(egui::RichText::new(err).color(ui.visuals().warn_fg_color));
                }
            });
        });
}

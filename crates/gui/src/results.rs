#![forbid(unsafe_code)]

use std::time::Instant;

use catalog_core::columns::{ColumnKind, ColumnSpec};
use catalog_core::Record;
use catalog_table::{derive_view, ViewState, NO_ENTRIES};
use eframe::egui;
use egui_table::{CellInfo, Column, HeaderCellInfo, HeaderRow, Table, TableDelegate};
use metrics::histogram;

use super::CatalogGuiApp;

impl CatalogGuiApp {
    pub(crate) fn ui_results(&mut self, ui: &mut egui::Ui) {
        if self.records.is_empty() && self.fetch.in_flight && !self.fetch.completed {
            ui.add(egui::Spinner::new());
            return;
        }
        let (header_click, page_click, total_pages) = {
            let t0 = Instant::now();
            let view = derive_view(&self.records, &self.view);
            histogram!("ui_pipeline_ms", t0.elapsed().as_secs_f64() * 1000.0);

            let cols: Vec<Column> = self
                .columns
                .iter()
                .map(|c| Column::new(c.width).resizable(true))
                .collect();
            let mut delegate = ResultsDelegate {
                columns: &self.columns,
                rows: &view.rows,
                state: &self.view,
                clicked: None,
            };
            let table_h = (ui.available_height() - 36.0).max(60.0);
            ui.allocate_ui(egui::vec2(ui.available_width(), table_h), |ui| {
                Table::new()
                    .id_salt("products_table")
                    .headers(vec![HeaderRow::new(22.0)])
                    .num_rows(view.rows.len() as u64)
                    .columns(cols)
                    .show(ui, &mut delegate);
            });
            let header_click = delegate.clicked;
            if view.is_empty() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(NO_ENTRIES).italics().weak());
            }
            ui.separator();
            let page_click = crate::ui::pager::ui_pager(ui, &view);
            (header_click, page_click, view.total_pages)
        };
        // The render clamped the page; keep the stored state in step
        let state = std::mem::take(&mut self.view);
        self.view = state.clamped(total_pages);
        if let Some(kind) = header_click {
            self.on_header_clicked(kind);
        }
        if let Some(page) = page_click {
            self.on_page_selected(page);
        }
    }
}

struct ResultsDelegate<'a> {
    columns: &'a [ColumnSpec],
    rows: &'a [&'a Record],
    state: &'a ViewState,
    clicked: Option<ColumnKind>,
}

impl TableDelegate for ResultsDelegate<'_> {
    fn prepare(&mut self, _info: &egui_table::PrefetchInfo) {}

    fn header_cell_ui(&mut self, ui: &mut egui::Ui, cell: &HeaderCellInfo) {
        if cell.row_nr != 0 {
            return;
        }
        // Fill header cell background for contrast
        let rect = ui.max_rect();
        let bg = ui.visuals().widgets.inactive.bg_fill;
        ui.painter().rect_filled(rect, 0.0, bg);
        let col_idx = cell.col_range.start as usize;
        let Some(spec) = self.columns.get(col_idx) else {
            return;
        };
        ui.add_space(2.0);
        let indicator = self.state.sort_indicator(spec.kind);
        let mut text = spec.label.to_string();
        if let Some(arrow) = indicator {
            text.push(' ');
            text.push_str(arrow);
        }
        let resp = ui
            .selectable_label(indicator.is_some(), egui::RichText::new(text).strong())
            .on_hover_text("Click to sort");
        if resp.clicked() {
            self.clicked = Some(spec.kind);
        }
    }

    fn cell_ui(&mut self, ui: &mut egui::Ui, cell: &CellInfo) {
        let idx = cell.row_nr as usize;
        let Some(record) = self.rows.get(idx) else {
            return;
        };
        // zebra stripes
        if idx % 2 == 0 {
            let rect = ui.max_rect();
            ui.painter().rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
        }
        let col_idx = cell.col_nr as usize;
        if let Some(spec) = self.columns.get(col_idx) {
            let text = spec.kind.text(record);
            let rich = egui::RichText::new(text.as_ref());
            if spec.kind.is_numeric() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(rich.monospace());
                });
            } else {
                ui.add(egui::Label::new(rich).truncate());
            }
        }
    }

    fn default_row_height(&self) -> f32 {
        20.0
    }
}

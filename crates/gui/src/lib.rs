#![forbid(unsafe_code)]

use std::sync::Arc;

use catalog_api::CatalogApi;
use catalog_core::columns::{catalog_columns, ColumnKind, ColumnSpec};
use catalog_core::Record;
use catalog_table::{clamp_page, filter_records, total_pages, PageSizeInput, ViewState};
use eframe::egui;
use tracing::info;

mod model;
mod results;
mod tasks;
mod ui;

use model::{FetchState, InputState};
pub use model::{GuiOptions, UiUpdate};

/// Entry point used by the binary to launch the GUI.
pub fn run_native(api: Arc<dyn CatalogApi>, opts: GuiOptions) -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    let title = opts.title.clone();
    let app = CatalogGuiApp::new(api, opts);
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}

pub struct CatalogGuiApp {
    api: Arc<dyn CatalogApi>,
    // fetched once, replaced wholesale on refresh
    records: Vec<Record>,
    columns: Vec<ColumnSpec>,
    view: ViewState,
    inputs: InputState,
    fetch: FetchState,
}

impl CatalogGuiApp {
    pub fn new(api: Arc<dyn CatalogApi>, opts: GuiOptions) -> Self {
        info!(source = %api.source(), page_size = opts.page_size, "catalog gui starting");
        let view = ViewState::with_initial_page_size(opts.page_size);
        Self {
            api,
            records: Vec::new(),
            columns: catalog_columns(),
            inputs: InputState {
                search: String::new(),
                page_size: PageSizeInput::new(view.page_size),
            },
            view,
            fetch: FetchState::default(),
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Pages in the current filtered set.
    fn total_pages(&self) -> usize {
        let filtered = filter_records(&self.records, &self.view.search_term).len();
        total_pages(filtered, self.view.page_size)
    }

    /// Store `next` with its page pulled back into range.
    fn set_view(&mut self, next: ViewState) {
        self.view = next;
        let total = self.total_pages();
        if clamp_page(self.view.current_page, total) != self.view.current_page {
            self.view = std::mem::take(&mut self.view).clamped(total);
        }
    }

    pub(crate) fn on_search_changed(&mut self) {
        let term = self.inputs.search.clone();
        let next = std::mem::take(&mut self.view).with_search(term);
        self.set_view(next);
    }

    pub(crate) fn on_header_clicked(&mut self, kind: ColumnKind) {
        let next = std::mem::take(&mut self.view).toggle_sort(kind);
        self.set_view(next);
    }

    pub(crate) fn on_page_selected(&mut self, page: usize) {
        let total = self.total_pages();
        let next = std::mem::take(&mut self.view).go_to(page, total);
        self.set_view(next);
    }

    pub(crate) fn on_page_size_commit(&mut self) {
        let state = std::mem::take(&mut self.view);
        let next = self.inputs.page_size.commit(state);
        self.set_view(next);
    }

    pub(crate) fn on_page_size_step(&mut self, up: bool) {
        if up {
            self.inputs.page_size.step_up(self.view.page_size);
        } else {
            self.inputs.page_size.step_down(self.view.page_size);
        }
    }

    /// Apply one background update to the app state.
    pub fn apply_update(&mut self, update: UiUpdate) {
        self.fetch.in_flight = false;
        self.fetch.completed = true;
        self.fetch.started_at = None;
        match update {
            UiUpdate::Loaded { records, took_ms } => {
                info!(items = records.len(), took_ms = %took_ms, "ui: catalog loaded");
                self.records = records;
                self.fetch.last_ms = Some(took_ms);
                self.fetch.last_error = None;
                let view = self.view.clone();
                self.set_view(view);
            }
            UiUpdate::FetchFailed { error, took_ms } => {
                // keep whatever list we had; the first failure leaves it empty
                tracing::error!(error = %error, took_ms = %took_ms, "ui: catalog fetch failed");
                self.fetch.last_ms = Some(took_ms);
                self.fetch.last_error = Some(error);
            }
        }
    }
}

impl eframe::App for CatalogGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Kick off the initial fetch on the first frame
        if !self.fetch.started {
            self.start_fetch();
        }
        ui::updates::process_updates(self);
        if self.fetch.in_flight {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        ui::topbar::ui_topbar(self, ctx);
        ui::statusbar::ui_statusbar(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_results(ui);
        });
    }
}

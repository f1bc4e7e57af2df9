#![forbid(unsafe_code)]

use std::time::Instant;

use tracing::info;

use crate::{CatalogGuiApp, UiUpdate};

impl CatalogGuiApp {
    /// Spawn one catalog fetch. A no-op while another is still running.
    pub(crate) fn start_fetch(&mut self) {
        if self.fetch.in_flight {
            return;
        }
        self.fetch.started = true;
        self.fetch.in_flight = true;
        self.fetch.started_at = Some(Instant::now());
        // Ensure updates channel exists
        let tx = if let Some(tx0) = &self.fetch.tx {
            tx0.clone()
        } else {
            let (tx0, rx0) = std::sync::mpsc::channel::<UiUpdate>();
            self.fetch.tx = Some(tx0.clone());
            self.fetch.rx = Some(rx0);
            tx0
        };
        let api = self.api.clone();
        info!(source = %api.source(), "starting catalog fetch");
        self.fetch.task = Some(tokio::spawn(async move {
            let t0 = Instant::now();
            let update = match api.fetch().await {
                Ok(records) => UiUpdate::Loaded { records, took_ms: t0.elapsed().as_millis() },
                Err(e) => UiUpdate::FetchFailed { error: e.to_string(), took_ms: t0.elapsed().as_millis() },
            };
            let _ = tx.send(update);
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use catalog_api::{CatalogError, MockApi};
    use catalog_core::Record;

    use crate::{CatalogGuiApp, GuiOptions};

    async fn drain(app: &mut CatalogGuiApp) {
        for _ in 0..200 {
            crate::ui::updates::process_updates(app);
            if !app.fetch.in_flight {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("fetch did not complete");
    }

    #[tokio::test]
    async fn fetch_delivers_records_through_channel() {
        let api = MockApi::new(vec![Record::new("Lamp", "Lumo", 2.0, 9.0)]);
        let mut app = CatalogGuiApp::new(Arc::new(api), GuiOptions::default());
        app.start_fetch();
        assert!(app.fetch.in_flight);
        // a second request while running is ignored
        app.start_fetch();
        drain(&mut app).await;
        assert_eq!(app.records().len(), 1);
        assert!(app.fetch.last_error.is_none());
    }

    #[tokio::test]
    async fn fetch_failure_is_reported_not_fatal() {
        let api = MockApi::failing(CatalogError::Status(500));
        let mut app = CatalogGuiApp::new(Arc::new(api), GuiOptions::default());
        app.start_fetch();
        drain(&mut app).await;
        assert!(app.records().is_empty());
        assert_eq!(app.fetch.last_error.as_deref(), Some("status: 500"));
    }
}

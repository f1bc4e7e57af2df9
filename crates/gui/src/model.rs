#![forbid(unsafe_code)]

use std::sync::mpsc;
use std::time::Instant;

use catalog_core::Record;
use catalog_table::DEFAULT_PAGE_SIZE;
use tokio::task::JoinHandle;

/// Messages from background tasks to the UI thread.
#[derive(Debug)]
pub enum UiUpdate {
    Loaded { records: Vec<Record>, took_ms: u128 },
    FetchFailed { error: String, took_ms: u128 },
}

/// Startup options, read from the environment by the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuiOptions {
    pub page_size: usize,
    pub title: String,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self { page_size: DEFAULT_PAGE_SIZE, title: "Catalog".to_string() }
    }
}

impl GuiOptions {
    /// `CATALOG_PAGE_SIZE`; missing, non-numeric or zero keeps the default.
    pub fn from_env() -> Self {
        let page_size = std::env::var("CATALOG_PAGE_SIZE")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page_size, ..Self::default() }
    }
}

#[derive(Default)]
pub struct FetchState {
    pub rx: Option<mpsc::Receiver<UiUpdate>>,
    pub tx: Option<mpsc::Sender<UiUpdate>>,
    pub task: Option<JoinHandle<()>>,
    /// Initial fetch has been kicked off.
    pub started: bool,
    pub in_flight: bool,
    pub started_at: Option<Instant>,
    pub last_ms: Option<u128>,
    pub last_error: Option<String>,
    /// At least one fetch has completed, successfully or not.
    pub completed: bool,
}

#[derive(Default)]
pub struct InputState {
    /// Search box contents; mirrored into the view state on change.
    pub search: String,
    pub page_size: catalog_table::PageSizeInput,
}

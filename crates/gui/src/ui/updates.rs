#![forbid(unsafe_code)]

use std::sync::mpsc::TryRecvError;

use crate::{CatalogGuiApp, UiUpdate};

/// Drain background updates; called once per frame.
pub(crate) fn process_updates(app: &mut CatalogGuiApp) {
    let mut pending: Vec<UiUpdate> = Vec::new();
    if let Some(rx) = &app.fetch.rx {
        loop {
            match rx.try_recv() {
                Ok(u) => pending.push(u),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // sender lives in FetchState, so this only happens on teardown
                    break;
                }
            }
        }
    }
    for u in pending {
        app.apply_update(u);
    }
}

use std::sync::Arc;

use finder_catalog::CatalogClient;
use finder_core::{update, AppState, CategoryId, Effect, FinderViewModel, Msg};
use finder_logging::{finder_debug, finder_warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::bridge;

/// Owns the query/result state machine on a single task and exposes the
/// presentation-layer contract: input intents in, view snapshots out.
///
/// All state mutation happens inside the event loop; readers only ever see
/// published snapshots, so no locking is needed beyond the watch channel.
pub struct SearchController {
    cmd_tx: mpsc::UnboundedSender<Msg>,
    view_rx: watch::Receiver<FinderViewModel>,
}

impl SearchController {
    /// Spawns the controller event loop on the ambient tokio runtime.
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let state = AppState::new();
        let (view_tx, view_rx) = watch::channel(state.view());

        tokio::spawn(run_loop(state, client, cmd_rx, view_tx));

        Self { cmd_tx, view_rx }
    }

    /// Debounced free-text input.
    pub fn set_term(&self, term: impl Into<String>) {
        self.send(Msg::TermEdited(term.into()));
    }

    /// Debounced category chip toggle.
    pub fn toggle_filter(&self, id: CategoryId) {
        self.send(Msg::FilterToggled(id));
    }

    /// Immediate page forward.
    pub fn next_page(&self) {
        self.send(Msg::NextPage);
    }

    /// Immediate page back; a no-op at page 1.
    pub fn previous_page(&self) {
        self.send(Msg::PreviousPage);
    }

    /// Immediate reload of the current query, e.g. to retry after an error.
    pub fn refresh(&self) {
        self.send(Msg::Refresh);
    }

    /// The most recently published snapshot.
    pub fn view(&self) -> FinderViewModel {
        self.view_rx.borrow().clone()
    }

    /// Change-notified handle for render loops.
    pub fn subscribe(&self) -> watch::Receiver<FinderViewModel> {
        self.view_rx.clone()
    }

    fn send(&self, msg: Msg) {
        // The loop outlives every controller handle; a failed send can only
        // happen during shutdown and is safe to drop.
        let _ = self.cmd_tx.send(msg);
    }
}

async fn run_loop(
    mut state: AppState,
    client: Arc<dyn CatalogClient>,
    mut cmd_rx: mpsc::UnboundedReceiver<Msg>,
    view_tx: watch::Sender<FinderViewModel>,
) {
    // Timer expiries and search completions come back on their own channel,
    // so closing the command side (controller dropped) still ends the loop.
    let (internal_tx, mut internal_rx) = mpsc::unbounded_channel();
    let mut pending_debounce: Option<JoinHandle<()>> = None;

    loop {
        let msg = tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(msg) => msg,
                None => break,
            },
            Some(msg) = internal_rx.recv() => msg,
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        let _ = view_tx.send(state.view());

        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { generation, delay } => {
                    // Best-effort cancel of the replaced timer; the
                    // generation check makes a raced expiry inert anyway.
                    if let Some(handle) = pending_debounce.take() {
                        handle.abort();
                    }
                    let tx = internal_tx.clone();
                    pending_debounce = Some(tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(Msg::DebounceElapsed { generation });
                    }));
                }
                Effect::IssueSearch { seq, query } => {
                    // Superseded searches are not aborted at the transport
                    // level; the sequence guard discards their completions.
                    let request = bridge::to_catalog_query(&query);
                    let client = client.clone();
                    let tx = internal_tx.clone();
                    tokio::spawn(async move {
                        finder_debug!("search seq={} page={} issued", seq, request.page);
                        let outcome = match client.search(&request).await {
                            Ok(page) => Ok(bridge::to_result_page(page)),
                            Err(err) => {
                                finder_warn!("search seq={} failed: {}", seq, err);
                                Err(bridge::to_failure(&err))
                            }
                        };
                        let _ = tx.send(Msg::SearchCompleted { seq, outcome });
                    });
                }
            }
        }
    }

    if let Some(handle) = pending_debounce.take() {
        handle.abort();
    }
}

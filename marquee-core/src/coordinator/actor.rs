//! Actor implementation for the search coordinator.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::commands::{FetchEvent, SearchCommand};
use super::core::SearchCoordinator;
use super::handle::SearchEngineHandle;
use crate::config::MarqueeConfig;
use crate::debounce::spawn_debouncer;
use crate::provider::MovieProvider;

/// Spawns the search coordinator actor and returns its handle.
///
/// Wires a debouncer in front of the coordinator: raw values observed
/// through the handle settle in the debouncer before the coordinator reacts
/// to them. The actor processes messages sequentially; provider fetches run
/// as spawned tasks and re-enter the loop as completion events, so state
/// queries stay responsive while requests are in flight.
///
/// # Examples
/// ```rust,no_run
/// # use std::sync::Arc;
/// use marquee_core::MarqueeConfig;
/// use marquee_core::coordinator::spawn_search_engine;
/// # async fn example(provider: Arc<dyn marquee_core::MovieProvider>) {
/// let handle = spawn_search_engine(MarqueeConfig::default(), provider);
/// handle.observe("batman").await.unwrap();
/// # }
/// ```
pub fn spawn_search_engine(
    config: MarqueeConfig,
    provider: Arc<dyn MovieProvider>,
) -> SearchEngineHandle {
    let (command_tx, command_rx) = mpsc::channel(config.search.command_buffer);
    let (raw_tx, settled_rx) = spawn_debouncer(config.search.debounce_window);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let coordinator = SearchCoordinator::new(provider, event_tx);

    tokio::spawn(async move {
        run_actor_loop(coordinator, command_rx, settled_rx, event_rx).await;
    });

    SearchEngineHandle::new(command_tx, raw_tx)
}

/// Runs the main actor message processing loop.
///
/// Messages are processed one at a time in arrival order: commands from the
/// handle, settled queries from the debouncer, and fetch completions from
/// spawned provider tasks. The loop continues until a shutdown command is
/// received or every inbound channel has closed.
async fn run_actor_loop(
    mut coordinator: SearchCoordinator,
    mut command_rx: mpsc::Receiver<SearchCommand>,
    mut settled_rx: mpsc::Receiver<String>,
    mut event_rx: mpsc::UnboundedReceiver<FetchEvent>,
) {
    tracing::debug!("search coordinator actor started");

    loop {
        tokio::select! {
            Some(command) = command_rx.recv() => {
                if !handle_command(&mut coordinator, command) {
                    break;
                }
            }
            Some(query) = settled_rx.recv() => {
                coordinator.on_settled_query(query);
            }
            Some(event) = event_rx.recv() => {
                coordinator.on_fetch_event(event);
            }
            else => break,
        }
    }

    tracing::debug!("search coordinator actor stopped");
}

/// Handles a single command for the coordinator.
/// Returns true to continue processing, false to shut down.
fn handle_command(coordinator: &mut SearchCoordinator, command: SearchCommand) -> bool {
    match command {
        SearchCommand::SelectMovie { imdb_id } => {
            coordinator.select_movie(imdb_id);
        }

        SearchCommand::CloseDetail => {
            coordinator.close_detail();
        }

        SearchCommand::GetState { responder } => {
            let _ = responder.send(coordinator.snapshot());
        }

        SearchCommand::Shutdown { responder } => {
            tracing::debug!("search coordinator shutting down");
            let _ = responder.send(());
            return false; // Signal to break out of the loop
        }
    }
    true // Continue processing
}

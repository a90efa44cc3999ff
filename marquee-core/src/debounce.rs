//! Input debouncing for rapidly-changing values.
//!
//! Bridges a raw-value channel to a settled-value channel: a value is
//! forwarded only once the input has been quiet for the configured window.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

/// Spawns a debouncer task and returns its input and output channels.
///
/// Every value sent on the input supersedes the pending one and re-arms the
/// quiescence window. When the window elapses without a newer value, the
/// latest value is forwarded on the output. A burst of rapid changes
/// therefore produces exactly one settled value, equal to the last input.
///
/// Consecutive duplicate settled values are suppressed, so a burst that ends
/// on the previously settled value produces no update at all. A value still
/// pending when the input channel closes is dropped; the window was
/// cancelled and never fired.
pub fn spawn_debouncer<T>(window: Duration) -> (mpsc::Sender<T>, mpsc::Receiver<T>)
where
    T: PartialEq + Clone + Send + 'static,
{
    let (input_tx, mut input_rx) = mpsc::channel::<T>(64);
    let (output_tx, output_rx) = mpsc::channel::<T>(64);

    tokio::spawn(async move {
        let mut last_settled: Option<T> = None;

        'outer: loop {
            let Some(mut pending) = input_rx.recv().await else {
                break;
            };

            loop {
                match timeout(window, input_rx.recv()).await {
                    // Newer value arrived inside the window: it replaces the
                    // pending one and the window re-arms.
                    Ok(Some(value)) => pending = value,
                    // Input closed with a value still pending: drop it.
                    Ok(None) => break 'outer,
                    // Quiet period elapsed: the pending value settles.
                    Err(_) => {
                        if last_settled.as_ref() != Some(&pending) {
                            if output_tx.send(pending.clone()).await.is_err() {
                                break 'outer;
                            }
                            last_settled = Some(pending);
                        }
                        break;
                    }
                }
            }
        }

        tracing::debug!("debouncer stopped");
    });

    (input_tx, output_rx)
}

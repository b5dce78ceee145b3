//! Full-screen terminal front-end.
//!
//! The widget never touches the screen directly: [`TuiChatView`] turns its
//! updates into [`AppEvent`]s, and [`TuiApp`] applies them on the loop task
//! alongside key presses and ticks. Submissions go through [`ChatRunner`]
//! so the loop keeps drawing while a request is in flight.

pub mod app;
pub mod events;
pub mod layout;
pub mod runner;
pub mod state;
pub mod widgets;

pub use app::TuiApp;
pub use events::{AppEvent, TuiChatView};
pub use runner::{ChatCommand, ChatRunner};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::cli::create_widget;
use crate::config::AppConfig;
use crate::core::Result;
use crate::widget::ConnectivityMonitor;
use app::{TerminalGuard, stdout_terminal};
use events::{terminal_event_loop, tick_loop};

pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let widget = Arc::new(create_widget(TuiChatView::new(event_tx.clone()), config)?);
    let endpoint = widget.endpoint();
    tracing::info!(%endpoint, "Starting terminal chat");

    let monitor = ConnectivityMonitor::new(config.probe_interval()).spawn(Arc::clone(&widget));
    let (runner, cmd_tx) = ChatRunner::new(widget);
    let runner_task = tokio::spawn(runner.run());

    let _guard = TerminalGuard::acquire()?;
    let mut app = TuiApp::new(stdout_terminal()?, endpoint, cmd_tx, event_rx);

    let input_tx = event_tx.clone();
    let input_task = tokio::spawn(async move {
        if let Err(e) = terminal_event_loop(input_tx).await {
            tracing::error!(error = %e, "Terminal event loop failed");
        }
    });
    let tick_task = tokio::spawn(tick_loop(event_tx));

    let result = app.run().await;

    monitor.abort();
    tick_task.abort();
    input_task.abort();
    if let Err(e) = runner_task.await {
        tracing::warn!(error = %e, "Chat runner did not shut down cleanly");
    }

    result
}

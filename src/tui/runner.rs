use std::sync::Arc;

use tokio::sync::mpsc;

use crate::transport::ChatTransport;
use crate::widget::{ChatView, ChatWidget, SubmitOutcome};

#[derive(Debug)]
pub enum ChatCommand {
    Submit { text: String },
    Shutdown,
}

/// Runs submissions off the terminal loop so drawing never waits on the
/// network. Each submit gets its own task; the widget's guard turns
/// overlapping ones into [`SubmitOutcome::Busy`].
pub struct ChatRunner<V: ChatView, T: ChatTransport> {
    widget: Arc<ChatWidget<V, T>>,
    cmd_rx: mpsc::UnboundedReceiver<ChatCommand>,
}

impl<V, T> ChatRunner<V, T>
where
    V: ChatView + 'static,
    T: ChatTransport + 'static,
{
    #[must_use]
    pub fn new(widget: Arc<ChatWidget<V, T>>) -> (Self, mpsc::UnboundedSender<ChatCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        (Self { widget, cmd_rx }, cmd_tx)
    }

    pub async fn run(mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            match cmd {
                ChatCommand::Submit { text } => {
                    let widget = Arc::clone(&self.widget);
                    tokio::spawn(async move {
                        let outcome = widget.submit(&text).await;
                        if outcome == SubmitOutcome::Busy {
                            tracing::info!("Dropped submission while a request is in flight");
                        } else {
                            tracing::debug!(?outcome, "Submission finished");
                        }
                    });
                }
                ChatCommand::Shutdown => {
                    tracing::info!("Chat runner shutting down");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockReply, MockTransport};
    use crate::widget::RecordingView;
    use std::time::Duration;

    async fn wait_for_transcript<V: ChatView, T: ChatTransport>(
        widget: &ChatWidget<V, T>,
        len: usize,
    ) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while widget.transcript().len() < len {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("transcript should grow");
    }

    #[tokio::test]
    async fn submits_through_the_widget() {
        let transport = MockTransport::new().with_reply(MockReply::text("pong"));
        let widget = Arc::new(ChatWidget::new(RecordingView::new(), transport));
        let (runner, cmd_tx) = ChatRunner::new(Arc::clone(&widget));
        let handle = tokio::spawn(runner.run());

        cmd_tx
            .send(ChatCommand::Submit {
                text: "ping".into(),
            })
            .expect("runner alive");
        wait_for_transcript(&widget, 2).await;

        cmd_tx.send(ChatCommand::Shutdown).expect("runner alive");
        handle.await.expect("runner should exit cleanly");

        assert_eq!(widget.transcript()[1].text(), "pong");
        assert_eq!(widget.transport().sent(), vec!["ping".to_string()]);
    }

    #[tokio::test]
    async fn stops_when_senders_drop() {
        let widget = Arc::new(ChatWidget::new(RecordingView::new(), MockTransport::new()));
        let (runner, cmd_tx) = ChatRunner::new(widget);
        drop(cmd_tx);

        tokio::time::timeout(Duration::from_secs(1), runner.run())
            .await
            .expect("runner should stop");
    }
}

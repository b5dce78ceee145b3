//! Line-oriented front-end for `chatline send` and `chatline probe`.

use parking_lot::Mutex;
use std::io::{self, Write};

use crate::config::AppConfig;
use crate::core::{Message, Result, Sender};
use crate::widget::{ChatView, Connectivity, SubmitOutcome};

pub struct ConsoleView<W> {
    out: Mutex<W>,
    assistant_name: String,
}

impl<W: Write + Send> ConsoleView<W> {
    #[must_use]
    pub fn new(out: W, assistant_name: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(out),
            assistant_name: assistant_name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn label(&self, sender: Sender) -> &str {
        match sender {
            Sender::User => "You",
            Sender::Assistant => &self.assistant_name,
            Sender::Error => "Error",
        }
    }
}

impl<W: Write + Send> ChatView for ConsoleView<W> {
    fn append_message(&self, message: &Message) {
        let label = self.label(message.sender());
        let indent = " ".repeat(label.chars().count() + 2);
        let mut out = self.out.lock();

        for (i, line) in message.lines().iter().enumerate() {
            let result = if i == 0 {
                writeln!(out, "{label}: {line}")
            } else {
                writeln!(out, "{indent}{line}")
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "Failed to write message");
                return;
            }
        }
        let _ = out.flush();
    }

    fn clear_input(&self) {}

    fn set_loading(&self, _loading: bool) {}

    fn focus_input(&self) {}

    fn set_connectivity(&self, _connectivity: Connectivity) {}
}

pub async fn run_send(config: &AppConfig, text: &str) -> Result<SubmitOutcome> {
    let view = ConsoleView::new(io::stdout(), config.assistant_name.clone());
    let widget = crate::cli::create_widget(view, config)?;
    Ok(widget.submit(text).await)
}

pub async fn run_probe(config: &AppConfig) -> Result<Connectivity> {
    let view = ConsoleView::new(io::sink(), config.assistant_name.clone());
    let widget = crate::cli::create_widget(view, config)?;
    let connectivity = widget.check_connectivity().await;
    println!("{}", connectivity.label().to_lowercase());
    Ok(connectivity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockReply, MockTransport};
    use crate::widget::ChatWidget;

    fn output(view: ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).expect("utf8")
    }

    #[test]
    fn multi_line_messages_are_indented() {
        let view = ConsoleView::new(Vec::new(), "NAIRO");
        view.append_message(&Message::new(Sender::Assistant, "one\ntwo", 0));

        assert_eq!(output(view), "NAIRO: one\n       two\n");
    }

    #[test]
    fn control_sequences_are_not_written() {
        let view = ConsoleView::new(Vec::new(), "Assistant");
        view.append_message(&Message::new(Sender::Assistant, "\u{1b}[31mred", 0));

        let out = output(view);
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("[31mred"));
    }

    #[tokio::test]
    async fn exchange_is_printed_in_order() {
        let transport = MockTransport::new().with_reply(MockReply::status(500, "boom"));
        let widget = ChatWidget::new(ConsoleView::new(Vec::new(), "Assistant"), transport);

        assert_eq!(widget.submit("ping").await, SubmitOutcome::Failed);

        let out = widget.view().out.lock().clone();
        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "You: ping");
        assert_eq!(lines[1], "Error: Sorry, I encountered an error:");
        assert_eq!(lines[2], "       boom");
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{ChatView, ChatWidget};
use crate::transport::ChatTransport;

pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(10);

/// Re-checks the host on a fixed interval, starting immediately.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityMonitor {
    interval: Duration,
}

impl ConnectivityMonitor {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub async fn run<V, T>(self, widget: Arc<ChatWidget<V, T>>)
    where
        V: ChatView,
        T: ChatTransport,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            widget.check_connectivity().await;
        }
    }

    pub fn spawn<V, T>(self, widget: Arc<ChatWidget<V, T>>) -> JoinHandle<()>
    where
        V: ChatView + 'static,
        T: ChatTransport + 'static,
    {
        tracing::debug!(interval = ?self.interval, "Starting connectivity monitor");
        tokio::spawn(self.run(widget))
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use crate::widget::{Connectivity, RecordingView, ViewEvent};

    #[tokio::test(start_paused = true)]
    async fn probes_at_startup_and_every_interval() {
        let transport = MockTransport::new()
            .with_probe(true)
            .with_probe(false)
            .with_probe(true);
        let view = RecordingView::new();
        let widget = Arc::new(ChatWidget::new(view.clone(), transport));

        let handle = ConnectivityMonitor::default().spawn(Arc::clone(&widget));

        tokio::time::sleep(Duration::from_secs(25)).await;
        handle.abort();

        assert_eq!(widget.transport().probe_count(), 3);

        let indicator: Vec<_> = view
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Connectivity(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(
            indicator,
            vec![
                Connectivity::Online,
                Connectivity::Offline,
                Connectivity::Online
            ]
        );
        assert_eq!(widget.connectivity(), Connectivity::Online);
    }

    #[tokio::test(start_paused = true)]
    async fn first_probe_is_immediate() {
        let transport = MockTransport::new().with_probe(false);
        let widget = Arc::new(ChatWidget::new(RecordingView::new(), transport));

        let handle = ConnectivityMonitor::new(Duration::from_secs(60)).spawn(Arc::clone(&widget));
        tokio::time::sleep(Duration::from_millis(1)).await;
        handle.abort();

        assert_eq!(widget.transport().probe_count(), 1);
        assert_eq!(widget.connectivity(), Connectivity::Offline);
    }
}

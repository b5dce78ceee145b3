use crate::config::AppConfig;
use crate::core::Result;
use crate::transport::HttpTransport;
use crate::widget::{ChatView, ChatWidget};

pub fn create_transport(config: &AppConfig) -> Result<HttpTransport> {
    let transport = HttpTransport::new(config.base_url()?, config.endpoint())?;
    tracing::debug!(?transport, "Created HTTP transport");
    Ok(transport)
}

pub fn create_widget<V: ChatView>(
    view: V,
    config: &AppConfig,
) -> Result<ChatWidget<V, HttpTransport>> {
    let transport = create_transport(config)?;
    Ok(ChatWidget::new(view, transport).with_probe_timeout(config.probe_timeout()))
}

use std::time::Instant;

use async_trait::async_trait;
use ::http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs method, URL, status and latency of every outbound request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracing;

#[async_trait]
impl Middleware for RequestTracing {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::debug!(
                %method,
                %url,
                status = response.status().as_u16(),
                elapsed_ms,
                "HTTP request completed"
            ),
            Err(e) => tracing::warn!(%method, %url, elapsed_ms, error = %e, "HTTP request failed"),
        }

        result
    }
}

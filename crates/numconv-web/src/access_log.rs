//! Access log middleware (tower Layer + Service).
//!
//! Conversion responses carry a [`ConversionOutcome`] extension, and the
//! log line for them names the requested types and whether the conversion
//! produced a result. The input value itself is never logged.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::response::Response;
use tracing::{info, warn};

/// Paths polled by probes; not worth a log line each.
const QUIET_PATHS: [&str; 2] = ["/health", "/favicon.ico"];

/// Type names come from the client; longer ones are cut before logging.
const MAX_TYPE_LABEL: usize = 32;

/// What a `/convert` request asked for and whether it succeeded.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ConversionOutcome {
    pub(crate) input_type: String,
    pub(crate) output_type: String,
    pub(crate) converted: bool,
}

impl ConversionOutcome {
    pub(crate) fn new(input_type: &str, output_type: &str, converted: bool) -> Self {
        Self {
            input_type: type_label(input_type),
            output_type: type_label(output_type),
            converted,
        }
    }

    /// Request body could not be read as a conversion request.
    pub(crate) fn rejected() -> Self {
        Self::new("-", "-", false)
    }
}

fn type_label(name: &str) -> String {
    match name.char_indices().nth(MAX_TYPE_LABEL) {
        Some((cut, _)) => format!("{}...", &name[..cut]),
        None => name.to_owned(),
    }
}

#[derive(Clone)]
pub(crate) struct AccessLogLayer;

impl<S> tower::Layer<S> for AccessLogLayer {
    type Service = AccessLogService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        AccessLogService { inner }
    }
}

#[derive(Clone)]
pub(crate) struct AccessLogService<S> {
    inner: S,
}

impl<S> tower::Service<Request> for AccessLogService<S>
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();
        let client = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ci| ci.0.ip().to_string())
            .unwrap_or_else(|| "-".to_owned());
        let t0 = Instant::now();

        let mut inner = self.inner.clone();
        Box::pin(async move {
            let response = inner.call(req).await?;
            let latency_ms = t0.elapsed().as_millis() as u64;
            let status = response.status().as_u16();

            if response.status().is_server_error() {
                warn!(client, status, latency_ms, "{method} {path}");
            } else if let Some(outcome) = response.extensions().get::<ConversionOutcome>() {
                info!(
                    client,
                    status,
                    latency_ms,
                    input_type = %outcome.input_type,
                    output_type = %outcome.output_type,
                    converted = outcome.converted,
                    "{method} {path}"
                );
            } else if !QUIET_PATHS.contains(&path.as_str()) {
                info!(client, status, latency_ms, "{method} {path}");
            }
            Ok(response)
        })
    }
}

use std::sync::Arc;
use std::time::Instant;

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextRequest};
use async_graphql::{Response, Value};

pub const RUN_TIME_KEY: &str = "runTime";

/// Adds `extensions.runTime` to every response: milliseconds spent
/// executing the request.
pub struct RunTime;

impl ExtensionFactory for RunTime {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(RunTimeExtension)
    }
}

struct RunTimeExtension;

#[async_trait::async_trait]
impl Extension for RunTimeExtension {
    async fn request(&self, ctx: &ExtensionContext<'_>, next: NextRequest<'_>) -> Response {
        let started = Instant::now();
        let mut response = next.run(ctx).await;
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::debug!(run_time_ms = elapsed, errors = response.errors.len(), "request executed");
        response
            .extensions
            .insert(RUN_TIME_KEY.to_string(), Value::Number(elapsed.into()));
        response
    }
}

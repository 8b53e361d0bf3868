//! Concurrent handlers sharing the process-wide logger.
//!
//! The global logger is configured once from the environment, then each
//! task logs through `sukilog::global()` with its own trace correlation.
//!
//! Run with: SUKILOG_LEVEL=debug cargo run --example concurrent_handlers

use std::time::Instant;
use sukilog::{
    any, configure_global, global, log_args, with_http_request, with_http_response, with_tracing,
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_global(Config::from_env()?.with_app_name("gateway"))?;

    global().info("Starting handlers", log_args![any("workers", &4)]);

    let handles: Vec<_> = (0..4)
        .map(|worker| tokio::spawn(handle_requests(worker, 3)))
        .collect();

    for handle in handles {
        handle.await?;
    }

    global().info("All handlers complete", log_args![]);
    global().sync()?;
    Ok(())
}

async fn handle_requests(worker: usize, count: usize) {
    for i in 0..count {
        let started = Instant::now();
        let trace = with_tracing(
            format!("trace-{}-{}", worker, i),
            format!("span-{}", worker),
            None,
        );

        global().debug(
            "Handling request",
            log_args![trace.clone(), any("worker", &worker), any("index", &i)],
        );
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;

        let request = with_http_request(
            "GET",
            format!("/items/{}", i),
            "127.0.0.1",
            None,
            None,
            None,
            "",
        );
        let elapsed = started.elapsed().as_secs_f64() * 1000.0;
        let response = with_http_response(200, elapsed, r#"{"ok":true}"#, None);
        global().request_http("GET /items", request, response, log_args![trace]);
    }
}

//! Basic logging example demonstrating both bundled sinks.
//!
//! Run with: cargo run --example basic_logging -- <sink>
//! Where <sink> is one of: json, tracing

use std::env;
use std::sync::Arc;
use sukilog::{
    any, any_error, init_diagnostics, log_args, log_warn, with_error, with_event,
    with_http_request, with_http_response, with_kafka_message, with_kafka_result, with_option,
    with_tracing, Config, EventAction, EventResult, LogFormat, LogLevel, LogOption, SukiLogger,
    TracingSinkBuilder,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let sink = args.get(1).map(|s| s.as_str()).unwrap_or("json");

    let mut config = Config::production()
        .with_app_name("orders")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_level(LogLevel::Debug)
        .with_max_body_size(64);
    config.apply_env_overrides()?;

    let logger = match sink {
        "tracing" => {
            init_diagnostics(LogFormat::Compact, Some("debug"))?;
            SukiLogger::with_builder(config, Arc::new(TracingSinkBuilder))?
        }
        _ => SukiLogger::new(config)?,
    };

    let trace = with_tracing("4bf92f3577b34da6", "00f067aa0ba902b7", Some("req-001"));

    // Leveled records with mixed context
    logger.debug("This is a debug message", log_args![]);
    logger.info(
        "Order placed",
        log_args![trace.clone(), any("order_id", &42), any("items", &["A1", "B7"])],
    );
    log_warn!(logger, "Stock running low", any("sku", &"A1"), any("remaining", &3));

    let result = reserve_stock("B7").await;
    if let Err(e) = result {
        logger.error(
            "Reservation failed",
            log_args![
                trace.clone(),
                with_option(LogOption::alert()),
                any_error("cause", std::io::Error::other(e.to_string())),
            ],
        );
    }

    // HTTP transaction, the response body is over the size limit
    let request = with_http_request(
        "POST",
        "/orders",
        "10.1.2.3",
        None,
        None,
        None,
        r#"{"sku":"A1","qty":1}"#,
    );
    let response = with_http_response(
        500,
        12.5,
        "x".repeat(128),
        Some(with_error("ReservationError", &["", "orders::reserve_stock"])),
    );
    logger.request_http("POST /orders", request, response, log_args![trace.clone()]);

    // Broker transaction
    let message = with_kafka_message(
        "orders.created",
        2,
        1024,
        None,
        "order-42",
        r#"{"id":42}"#,
        chrono::Utc::now(),
    );
    logger.request_kafka(
        "Consumed orders.created",
        message,
        with_kafka_result(3.75, None),
        log_args![trace.clone()],
    );

    // Business event
    let event = with_event(
        "order",
        EventAction::Create,
        EventResult::Success,
        &serde_json::json!({"id": 42, "total": 19.99}),
        "ref-42",
    );
    logger.event("Order created", event, log_args![trace]);

    logger.sync()?;
    Ok(())
}

async fn reserve_stock(sku: &str) -> anyhow::Result<()> {
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    anyhow::bail!("no stock left for {}", sku)
}

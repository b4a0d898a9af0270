//! Metrics collection and exposition.
//!
//! # Metrics
//! - `coordinator_transfers_submitted_total` (counter)
//! - `coordinator_transfers_confirmed_total` (counter)
//! - `coordinator_transfers_failed_total` (counter, by stage)
//! - `coordinator_store_writes_total` (counter, by kind and outcome)
//! - `coordinator_wallet_connected` (gauge, 1 once an account is active)
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exporter is optional; helpers are no-ops without a recorder installed

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// A native transfer was accepted by the wallet.
pub fn record_transfer_submitted() {
    metrics::counter!("coordinator_transfers_submitted_total").increment(1);
}

/// A transfer completed the full workflow.
pub fn record_transfer_confirmed() {
    metrics::counter!("coordinator_transfers_confirmed_total").increment(1);
}

/// A workflow step failed.
pub fn record_transfer_failed(stage: &'static str) {
    metrics::counter!("coordinator_transfers_failed_total", "stage" => stage).increment(1);
}

/// An account became active for the session.
pub fn record_wallet_connected() {
    metrics::gauge!("coordinator_wallet_connected").set(1.0);
}

/// A document store write finished.
pub fn record_store_write(kind: &'static str, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    metrics::counter!("coordinator_store_writes_total", "kind" => kind, "outcome" => outcome)
        .increment(1);
}

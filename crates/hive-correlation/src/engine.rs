//! # Correlation Engine
//!
//! Submits signed actions and watches the hook account's transaction
//! stream for their asynchronous responses.
//!
//! A watch is one logical sequence: query, decode, compare, sleep,
//! repeat. The deadline is a single timer racing the whole loop, so it
//! fires even while a query is in flight; dropping the watch future
//! releases both the timer and the loop. Polls of one watch never
//! overlap; independent watches share only the gateway.

use crate::config::CorrelationConfig;
use crate::domain::{
    CorrelationError, HookEvent, LedgerTransaction, SignedAction, SubmitHandle, WatchOutcome,
};
use crate::ports::LedgerGateway;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Floor for the poll interval; bounds the query rate against the
/// gateway no matter how the engine is configured.
const MIN_POLL_INTERVAL_SECS: u64 = 1;

/// Correlation engine - submits actions and resolves their responses.
pub struct CorrelationEngine<G: LedgerGateway> {
    /// Ledger access.
    gateway: Arc<G>,
    /// Account whose transaction stream carries hook responses.
    account: String,
    /// Timing configuration, shared by every watch on this engine.
    config: CorrelationConfig,
}

impl<G: LedgerGateway> CorrelationEngine<G> {
    /// Create an engine watching the given account.
    pub fn new(gateway: Arc<G>, account: impl Into<String>, config: CorrelationConfig) -> Self {
        Self {
            gateway,
            account: account.into(),
            config,
        }
    }

    /// The watched account.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Relay a signed action and return the handle its response is
    /// watched with.
    pub async fn submit(&self, action: &SignedAction) -> Result<SubmitHandle, CorrelationError> {
        let receipt = self.gateway.submit_signed(action).await?;
        debug!(
            "[hive-correlation] {} relayed as {} at ledger {}",
            action.kind, receipt.tx_hash, receipt.ledger_index
        );
        Ok(SubmitHandle {
            reference_id: action.reference_id.clone(),
            origin_ledger_index: receipt.ledger_index,
        })
    }

    /// Watch for the response to a submitted action, using the
    /// configured timeout.
    ///
    /// `decoder` turns raw transactions into hook events; the engine
    /// resolves on the first event whose reference id matches the handle
    /// and whose kind equals `success_kind` or `error_kind`.
    pub async fn watch<D>(
        &self,
        handle: &SubmitHandle,
        success_kind: &str,
        error_kind: &str,
        decoder: D,
    ) -> Result<WatchOutcome, CorrelationError>
    where
        D: Fn(&LedgerTransaction) -> Option<HookEvent>,
    {
        self.watch_with_timeout(
            handle,
            success_kind,
            error_kind,
            Duration::from_secs(self.config.watch_timeout_secs),
            decoder,
        )
        .await
    }

    /// Watch with an explicit deadline instead of the configured one.
    pub async fn watch_with_timeout<D>(
        &self,
        handle: &SubmitHandle,
        success_kind: &str,
        error_kind: &str,
        timeout: Duration,
        decoder: D,
    ) -> Result<WatchOutcome, CorrelationError>
    where
        D: Fn(&LedgerTransaction) -> Option<HookEvent>,
    {
        let poll = self.poll_until_match(handle, success_kind, error_kind, &decoder);
        match tokio::time::timeout(timeout, poll).await {
            Ok(resolved) => resolved,
            Err(_elapsed) => {
                warn!(
                    "[hive-correlation] watch for {} timed out after {:?}",
                    handle.reference_id, timeout
                );
                Ok(WatchOutcome::TimedOut)
            }
        }
    }

    /// The unbounded poll loop; the caller races it against the
    /// deadline. A query failure ends the watch immediately.
    async fn poll_until_match<D>(
        &self,
        handle: &SubmitHandle,
        success_kind: &str,
        error_kind: &str,
        decoder: &D,
    ) -> Result<WatchOutcome, CorrelationError>
    where
        D: Fn(&LedgerTransaction) -> Option<HookEvent>,
    {
        let poll_interval =
            Duration::from_secs(self.config.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS));
        let mut since = handle.origin_ledger_index;
        let mut round = 0usize;

        loop {
            round += 1;
            let transactions = self
                .gateway
                .account_transactions(&self.account, since)
                .await?;
            debug!(
                "[hive-correlation] poll {} for {}: {} transactions",
                round,
                handle.reference_id,
                transactions.len()
            );

            for tx in &transactions {
                since = since.max(tx.ledger_index);
                let Some(event) = decoder(tx) else {
                    continue;
                };
                if event.reference_id.as_deref() != Some(handle.reference_id.as_str()) {
                    continue;
                }
                if event.kind == success_kind {
                    debug!(
                        "[hive-correlation] {} resolved by {} in ledger {}",
                        handle.reference_id, tx.hash, tx.ledger_index
                    );
                    return Ok(WatchOutcome::Success(event.payload));
                }
                if event.kind == error_kind {
                    let reason = event
                        .payload
                        .get("reason")
                        .and_then(|value| value.as_str())
                        .map(str::to_string);
                    return Ok(WatchOutcome::Rejected { reason });
                }
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}

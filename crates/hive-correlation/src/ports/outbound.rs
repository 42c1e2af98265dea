//! # Outbound Ports
//!
//! The ledger access the engine depends on, plus a scripted mock for
//! tests. Connection management, signing, and retry policy all live
//! behind this seam.

use crate::domain::{
    CorrelationError, LedgerTransaction, SignedAction, SubmitReceipt,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Ledger access - outbound port.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Transactions on the given account since a ledger index, oldest
    /// first. Must include at least everything new since the index.
    async fn account_transactions(
        &self,
        account: &str,
        since_ledger_index: u64,
    ) -> Result<Vec<LedgerTransaction>, CorrelationError>;

    /// Relay a fully signed action to the ledger.
    async fn submit_signed(
        &self,
        action: &SignedAction,
    ) -> Result<SubmitReceipt, CorrelationError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock ledger gateway with scripted per-poll responses.
///
/// Each call to [`LedgerGateway::account_transactions`] consumes the next
/// scripted batch; an exhausted script keeps answering with an empty
/// batch. Scripting an `Err` injects a query failure on that poll.
/// Submission behavior starts from [`Default`] and is shaped with
/// [`Self::with_receipt`] and [`Self::failing_submit`].
pub struct MockLedgerGateway {
    batches: Mutex<VecDeque<Result<Vec<LedgerTransaction>, CorrelationError>>>,
    polls: AtomicUsize,
    receipt: SubmitReceipt,
    fail_submit: bool,
}

impl Default for MockLedgerGateway {
    fn default() -> Self {
        Self {
            batches: Mutex::new(VecDeque::new()),
            polls: AtomicUsize::new(0),
            receipt: SubmitReceipt {
                tx_hash: "MOCKTXHASH".to_string(),
                ledger_index: 1,
            },
            fail_submit: false,
        }
    }
}

impl MockLedgerGateway {
    /// Replace the receipt handed back on submit.
    pub fn with_receipt(mut self, receipt: SubmitReceipt) -> Self {
        self.receipt = receipt;
        self
    }

    /// Refuse submissions instead of handing back the receipt.
    pub fn failing_submit(mut self) -> Self {
        self.fail_submit = true;
        self
    }

    /// Append one scripted query result.
    pub fn script(&self, batch: Result<Vec<LedgerTransaction>, CorrelationError>) {
        self.batches.lock().push_back(batch);
    }

    /// Number of query polls served so far.
    pub fn polls_served(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LedgerGateway for MockLedgerGateway {
    async fn account_transactions(
        &self,
        _account: &str,
        _since_ledger_index: u64,
    ) -> Result<Vec<LedgerTransaction>, CorrelationError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        match self.batches.lock().pop_front() {
            Some(batch) => batch,
            None => Ok(Vec::new()),
        }
    }

    async fn submit_signed(
        &self,
        _action: &SignedAction,
    ) -> Result<SubmitReceipt, CorrelationError> {
        if self.fail_submit {
            return Err(CorrelationError::SubmitFailed(
                "mock relay refused".to_string(),
            ));
        }
        Ok(self.receipt.clone())
    }
}

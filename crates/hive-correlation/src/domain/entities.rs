//! # Domain Entities
//!
//! The shapes flowing through a submit/watch round trip: the signed
//! action going out, the ledger transactions coming back, the decoded
//! hook event, and the terminal outcome of a watch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fully signed ledger action, ready for relay.
///
/// Signing happens elsewhere; this layer only carries the blob and the
/// reference id that later reappears in the hook's response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedAction {
    /// Action kind label, used in logs only.
    pub kind: String,
    /// Correlation reference id embedded in the action.
    pub reference_id: String,
    /// Signed transaction bytes.
    pub blob: Vec<u8>,
}

impl SignedAction {
    /// Wrap a signed blob with a freshly minted reference id.
    pub fn new(kind: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            kind: kind.into(),
            reference_id: new_reference_id(),
            blob,
        }
    }
}

/// Mint a correlation reference id: 32 uppercase hex characters.
pub fn new_reference_id() -> String {
    Uuid::new_v4().simple().to_string().to_uppercase()
}

/// The gateway's answer to a relayed action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Hash the ledger assigned to the transaction.
    pub tx_hash: String,
    /// Ledger index current at submission.
    pub ledger_index: u64,
}

/// Handle for watching the response to a submitted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitHandle {
    /// Reference id the response will carry.
    pub reference_id: String,
    /// Ledger index polling starts from.
    pub origin_ledger_index: u64,
}

/// One memo attached to a ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMemo {
    /// Memo type marker.
    pub memo_type: String,
    /// Memo data format marker.
    pub format: String,
    /// Memo payload text.
    pub data: String,
}

/// One hook parameter attached to a ledger transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: String,
}

/// A transaction observed on the watched account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// Transaction hash.
    pub hash: String,
    /// Ledger index the transaction validated in.
    pub ledger_index: u64,
    /// Attached memos.
    pub memos: Vec<TxMemo>,
    /// Attached hook parameters.
    pub hook_parameters: Vec<HookParameter>,
}

/// A hook response event decoded out of a ledger transaction.
///
/// The decoding itself is caller-supplied; the engine only compares kind
/// and reference id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HookEvent {
    /// Event kind name.
    pub kind: String,
    /// Reference id of the action this event answers, if any.
    pub reference_id: Option<String>,
    /// Opaque event payload.
    pub payload: serde_json::Value,
}

/// Terminal result of a watch. Every watch resolves to exactly one of
/// these unless the query itself fails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WatchOutcome {
    /// The success-kind event arrived; carries its payload.
    Success(serde_json::Value),
    /// The error-kind event arrived; carries the remote reason when the
    /// payload held one.
    Rejected {
        /// Reason reported by the hook.
        reason: Option<String>,
    },
    /// The deadline passed with no matching event.
    TimedOut,
}

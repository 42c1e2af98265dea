//! # Domain Entities
//!
//! The typed forms that hook-state buffers decode into: the canonical
//! 32-byte state key, the tagged record union with one variant per known
//! key, and the lease descriptor carried inside URI tokens.
//!
//! Decoding is all-or-nothing: a record either materializes fully (with
//! absent optional trailers as `None`) or the decoder returns an error.
//! No entity here is ever partially populated.

use super::value_objects::{
    CandidateStatus, GovernanceMode, MomentType, KEY_FAMILY_CONFIGURATION, KEY_FAMILY_SINGLETON,
    KEY_PREFIX, KEY_TAG_CANDIDATE_ID, KEY_TAG_CANDIDATE_OWNER, KEY_TAG_HOST_ADDR,
    KEY_TAG_TOKEN_ID, KEY_TAG_TRANSFEREE_ADDR, WELL_KNOWN_CONFIGURATION_KEYS,
    WELL_KNOWN_SINGLETON_KEYS,
};
use serde::{Deserialize, Serialize};

/// Raw 20-byte ledger account id.
pub type AccountId = [u8; 20];

/// 32-byte digest.
pub type Hash = [u8; 32];

// =============================================================================
// STATE KEY
// =============================================================================

/// Canonical 32-byte hook-state key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey(pub [u8; 32]);

impl StateKey {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 uppercase hex characters.
    pub fn hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Resolve the key kind, or `None` for a key this codec does not know.
    ///
    /// The five entity kinds resolve on the 4-byte prefix alone; singleton
    /// and configuration keys must match a well-known key byte-for-byte.
    pub fn kind(&self) -> Option<KeyKind> {
        if self.0[0..3] != KEY_PREFIX {
            return None;
        }
        match self.0[3] {
            KEY_TAG_TOKEN_ID => Some(KeyKind::TokenId),
            KEY_TAG_HOST_ADDR => Some(KeyKind::HostAddress),
            KEY_TAG_TRANSFEREE_ADDR => Some(KeyKind::TransfereeAddr),
            KEY_TAG_CANDIDATE_OWNER => Some(KeyKind::CandidateOwner),
            KEY_TAG_CANDIDATE_ID => Some(KeyKind::CandidateId),
            KEY_FAMILY_SINGLETON => WELL_KNOWN_SINGLETON_KEYS
                .contains(&self.0)
                .then_some(KeyKind::Singleton),
            KEY_FAMILY_CONFIGURATION => WELL_KNOWN_CONFIGURATION_KEYS
                .contains(&self.0)
                .then_some(KeyKind::Configuration),
            _ => None,
        }
    }
}

impl From<[u8; 32]> for StateKey {
    fn from(bytes: [u8; 32]) -> Self {
        StateKey(bytes)
    }
}

impl AsRef<[u8]> for StateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Which family a state key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Per-host registration entry, keyed by host account id.
    HostAddress,
    /// Per-token hardware entry, keyed by URI token id content.
    TokenId,
    /// Pending-transfer entry, keyed by transferee account id.
    TransfereeAddr,
    /// Proposed hook slate, keyed by owner account id.
    CandidateOwner,
    /// Governance candidate, keyed by candidate id content.
    CandidateId,
    /// One of the six well-known singleton keys.
    Singleton,
    /// One of the twelve well-known configuration keys.
    Configuration,
}

impl KeyKind {
    /// The kind tag written at key byte 3.
    pub fn tag(&self) -> u8 {
        match self {
            KeyKind::HostAddress => KEY_TAG_HOST_ADDR,
            KeyKind::TokenId => KEY_TAG_TOKEN_ID,
            KeyKind::TransfereeAddr => KEY_TAG_TRANSFEREE_ADDR,
            KeyKind::CandidateOwner => KEY_TAG_CANDIDATE_OWNER,
            KeyKind::CandidateId => KEY_TAG_CANDIDATE_ID,
            KeyKind::Singleton => KEY_FAMILY_SINGLETON,
            KeyKind::Configuration => KEY_FAMILY_CONFIGURATION,
        }
    }

    /// True for kinds whose key embeds a 20-byte account id.
    pub fn is_address_keyed(&self) -> bool {
        matches!(
            self,
            KeyKind::HostAddress | KeyKind::TransfereeAddr | KeyKind::CandidateOwner
        )
    }

    /// True for kinds whose key embeds the last 28 bytes of a 32-byte id.
    pub fn is_content_keyed(&self) -> bool {
        matches!(self, KeyKind::TokenId | KeyKind::CandidateId)
    }
}

/// A state key resolved to its kind without touching the payload. The
/// listing path stops here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedKey {
    /// The canonical key.
    pub key: StateKey,
    /// Its resolved kind.
    pub kind: KeyKind,
}

// =============================================================================
// ENTITY RECORDS
// =============================================================================

/// Host registration entry. The host account id lives in the key; all
/// other fields come from the payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostAddressRecord {
    /// Host account, checksummed address form.
    pub address: String,
    /// Registration URI token id, uppercase hex.
    pub uri_token_id: String,
    /// Two-letter country code.
    pub country_code: String,
    /// Free-text host description, NUL padding trimmed.
    pub description: String,
    /// Ledger index the host registered at.
    pub registration_ledger: u64,
    /// Fee paid at registration.
    pub registration_fee: u64,
    /// Maximum lease instances offered.
    pub max_instances: u32,
    /// Currently occupied lease instances.
    pub active_instances: u32,
    /// Moment index of the last heartbeat.
    pub last_heartbeat_index: i64,
    /// Host software version, "major.minor.patch".
    pub version: String,
    /// Registration wall-clock timestamp, when the entry carries one.
    pub registration_timestamp: Option<u64>,
    /// Whether an ownership transfer is pending.
    pub pending_transfer: Option<bool>,
    /// Index of the candidate this host last voted on.
    pub last_vote_candidate_idx: Option<u32>,
    /// Timestamp of that vote.
    pub last_vote_timestamp: Option<u64>,
    /// Whether a support vote went out this moment.
    pub support_vote_sent: Option<bool>,
    /// Reputation score.
    pub host_reputation: Option<u8>,
    /// Host flag bits.
    pub flags: Option<u8>,
    /// Timestamp of the ownership transfer, when one happened.
    pub transfer_timestamp: Option<u64>,
}

/// Hardware profile entry keyed by registration token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdRecord {
    /// Owning host account, checksummed address form.
    pub address: String,
    /// CPU model string, NUL padding trimmed.
    pub cpu_model_name: String,
    /// Logical CPU count.
    pub cpu_count: u16,
    /// CPU clock in MHz.
    pub cpu_mhz: u16,
    /// CPU microseconds available per lease instance.
    pub cpu_microsec: u32,
    /// RAM in MiB.
    pub ram_mb: u32,
    /// Disk in MiB.
    pub disk_mb: u32,
    /// Contact email, NUL padding trimmed.
    pub email: String,
    /// Accumulated reward balance as a decimal string.
    pub accumulated_reward: Option<String>,
}

/// Pending-transfer entry keyed by the transferee account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransfereeAddrRecord {
    /// Previous holder of the registration, checksummed address form.
    pub prev_host_address: String,
    /// Ledger index of the original registration.
    pub registration_ledger: u64,
    /// Token id being carried across, uppercase hex.
    pub transferred_token_id: String,
}

/// A proposed hook slate: four 32-byte hook hashes. This 128-byte buffer
/// is exactly what a new-hook candidate id digests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateOwnerRecord {
    /// Governor hook hash, uppercase hex.
    pub governor_hook_hash: String,
    /// Registry hook hash, uppercase hex.
    pub registry_hook_hash: String,
    /// Heartbeat hook hash, uppercase hex.
    pub heartbeat_hook_hash: String,
    /// Reputation hook hash, uppercase hex.
    pub reputation_hook_hash: String,
}

/// Governance candidate entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIdRecord {
    /// Proposal owner, checksummed address form.
    pub owner_address: String,
    /// Owner-local candidate index.
    pub index: u32,
    /// Short display name, NUL padding trimmed.
    pub short_name: String,
    /// Creation timestamp.
    pub created_timestamp: u64,
    /// Proposal fee as a decimal string.
    pub proposal_fee: String,
    /// Number of support votes received.
    pub support_vote_count: u32,
    /// Timestamp of the latest vote.
    pub last_vote_timestamp: u64,
    /// Current lifecycle status.
    pub status: CandidateStatus,
    /// Timestamp of the latest status change.
    pub status_change_timestamp: u64,
    /// Foundation's own vote status.
    pub foundation_vote_status: CandidateStatus,
    /// Last elect/purge attempt timestamp.
    pub elect_purge_last_try_timestamp: Option<u64>,
    /// Whether completion was acknowledged.
    pub complete_acknowledged: Option<bool>,
}

// =============================================================================
// SINGLETON RECORDS
// =============================================================================

/// Moment base point: where the current moment numbering is anchored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentBaseInfoRecord {
    /// Ledger index or timestamp the base sits at.
    pub base_idx: u64,
    /// Moment number at the base point.
    pub transition_moment: u32,
    /// Unit moments are measured in from the base onward.
    pub moment_type: MomentType,
}

/// Live reward epoch bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardInfoRecord {
    /// Current epoch number.
    pub epoch: u8,
    /// Moment the bookkeeping was last saved at.
    pub saved_moment: u32,
    /// Active host count of the previous moment.
    pub prev_moment_active_host_count: u32,
    /// Active host count of the current moment.
    pub cur_moment_active_host_count: u32,
    /// Remaining epoch reward pool as a decimal string.
    pub epoch_pool: String,
    /// Maximum host lease amount observed, as a decimal string.
    pub host_max_lease_amount: Option<String>,
}

/// Live governance bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceInfoRecord {
    /// Current steering mode.
    pub governance_mode: GovernanceMode,
    /// Most recently assigned candidate index.
    pub last_candidate_idx: u32,
    /// Size of the voter base.
    pub voter_base_count: u32,
    /// When the voter base last changed.
    pub voter_base_count_changed_timestamp: u64,
    /// Candidate index the foundation last voted on.
    pub foundation_last_voted_candidate_idx: u32,
    /// When the foundation last voted.
    pub foundation_last_voted_timestamp: u64,
    /// Unique id of the elected proposal, uppercase hex.
    pub elected_proposal_unique_id: String,
    /// When that proposal was elected.
    pub proposal_elected_timestamp: u64,
    /// Hooks already updated under the elected proposal.
    pub updated_hook_count: u8,
}

// =============================================================================
// CONFIGURATION RECORDS
// =============================================================================

/// Reward epoch parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardConfigurationRecord {
    /// Number of reward epochs.
    pub epoch_count: u8,
    /// Reward quota of the first epoch.
    pub first_epoch_reward_quota: u32,
    /// Reward amount per epoch.
    pub epoch_reward_amount: u32,
    /// Moment rewards start at.
    pub reward_start_moment: u32,
    /// Accumulated-reward payout frequency in moments.
    pub accumulated_reward_frequency: Option<u16>,
    /// Minimum reputation for reward eligibility.
    pub host_reputation_threshold: Option<u8>,
}

/// Scheduled moment size/type transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentTransitInfoRecord {
    /// Index the transition takes effect at.
    pub transition_idx: u64,
    /// Moment size after the transition.
    pub moment_size: u16,
    /// Moment unit after the transition.
    pub moment_type: MomentType,
}

/// Governance vote parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceConfigurationRecord {
    /// Moments a host must be registered before voting.
    pub eligibility_period: u32,
    /// Candidate lifetime in moments.
    pub candidate_life_period: u32,
    /// Election window in moments.
    pub candidate_election_period: u32,
    /// Support average threshold, percented.
    pub candidate_support_average: u16,
}

// =============================================================================
// STATE RECORD UNION
// =============================================================================

/// Every decodable hook-state record. One variant per known key; unknown
/// keys never decode to anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateRecord {
    /// Host registration entry.
    HostAddress(HostAddressRecord),
    /// Hardware profile entry.
    TokenId(TokenIdRecord),
    /// Pending-transfer entry.
    TransfereeAddr(TransfereeAddrRecord),
    /// Proposed hook slate.
    CandidateOwner(CandidateOwnerRecord),
    /// Governance candidate entry.
    CandidateId(CandidateIdRecord),
    /// Singleton: registered host count.
    HostCount(u32),
    /// Singleton: moment base point.
    MomentBaseInfo(MomentBaseInfoRecord),
    /// Singleton: current host registration fee.
    HostRegFee(u64),
    /// Singleton: maximum supported registrations.
    MaxRegistrations(u64),
    /// Singleton: reward epoch bookkeeping.
    RewardInfo(RewardInfoRecord),
    /// Singleton: governance bookkeeping.
    GovernanceInfo(GovernanceInfoRecord),
    /// Configuration: token issuer account, checksummed address form.
    IssuerAddress(String),
    /// Configuration: foundation account, checksummed address form.
    FoundationAddress(String),
    /// Configuration: moment size in ledgers or seconds.
    MomentSize(u16),
    /// Configuration: token mint ceiling.
    MintLimit(u64),
    /// Configuration: fixed registration fee.
    FixedRegFee(u64),
    /// Configuration: heartbeat frequency in moments.
    HostHeartbeatFreq(u16),
    /// Configuration: lease acquire response window in ledgers.
    LeaseAcquireWindow(u16),
    /// Configuration: reward epoch parameters.
    RewardConfiguration(RewardConfigurationRecord),
    /// Configuration: tolerated downtime in moments.
    MaxTolerableDowntime(u16),
    /// Configuration: scheduled moment transition.
    MomentTransitInfo(MomentTransitInfoRecord),
    /// Configuration: purchaser target price as a decimal string.
    PurchaserTargetPrice(String),
    /// Configuration: governance vote parameters.
    GovernanceConfiguration(GovernanceConfigurationRecord),
}

// =============================================================================
// LEASE DESCRIPTOR
// =============================================================================

/// Payload of a lease URI token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseDescriptor {
    /// Instance slot index on the host.
    pub lease_index: u16,
    /// Captured half-hash window bytes.
    pub half_hash: Vec<u8>,
    /// Lease amount as a decimal string.
    pub lease_amount: String,
}

impl LeaseDescriptor {
    /// Half-hash window as uppercase hex.
    pub fn half_hash_hex(&self) -> String {
        hex::encode_upper(&self.half_hash)
    }
}

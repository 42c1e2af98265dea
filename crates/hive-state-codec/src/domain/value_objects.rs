//! # Value Objects
//!
//! Wire-level constants of the Hive hook-state format, plus the small
//! byte-mapped enums that record fields decode into.
//!
//! Every hook-state key is 32 bytes and starts with the 3-byte network
//! prefix followed by a one-byte kind tag. The five entity kinds fill the
//! remaining 28 bytes with addressing content; the singleton and
//! configuration families reserve the full key and are matched exactly.

use serde::{Deserialize, Serialize};

/// 3-byte network prefix leading every hook-state key.
pub const KEY_PREFIX: [u8; 3] = *b"HVE";

/// Kind tag (key byte 3) of the singleton key family.
pub const KEY_FAMILY_SINGLETON: u8 = 0x00;
/// Kind tag (key byte 3) of the configuration key family.
pub const KEY_FAMILY_CONFIGURATION: u8 = 0x01;
/// Kind tag (key byte 3) of token-id keys.
pub const KEY_TAG_TOKEN_ID: u8 = 0x02;
/// Kind tag (key byte 3) of host-address keys.
pub const KEY_TAG_HOST_ADDR: u8 = 0x03;
/// Kind tag (key byte 3) of transferee-address keys.
pub const KEY_TAG_TRANSFEREE_ADDR: u8 = 0x04;
/// Kind tag (key byte 3) of candidate-owner keys.
pub const KEY_TAG_CANDIDATE_OWNER: u8 = 0x05;
/// Kind tag (key byte 3) of candidate-id keys.
pub const KEY_TAG_CANDIDATE_ID: u8 = 0x06;

/// Zero padding between the kind tag and the account id in address keys.
pub const ADDRESS_KEY_ZERO_PAD: usize = 8;

/// Byte offset of the account id inside an address-keyed state key.
pub const ADDRESS_KEY_ACCOUNT_OFFSET: usize = 4 + ADDRESS_KEY_ZERO_PAD;

/// The external ledger's 2-byte ledger-entry type tag for generic hook
/// state. First field hashed when deriving a storage index; the value is a
/// protocol constant of the host ledger and must not change.
pub const STATE_ENTRY_TYPE_TAG: u16 = 0x0076;

/// 8-byte marker leading every lease URI descriptor.
pub const LEASE_URI_PREFIX: [u8; 8] = *b"hvelease";

/// The 32-byte namespace under which the registry hook keeps all of its
/// state. Also the content source for the piloted-mode candidate id.
pub const HOOK_NAMESPACE: [u8; 32] = [
    0x68, 0xED, 0xCA, 0xAF, 0xE9, 0x4F, 0x81, 0x4B, 0xDB, 0x52, 0xFF, 0x36, 0x40, 0x81, 0x7B, 0xA1,
    0x9B, 0x34, 0xBC, 0xD1, 0x5D, 0xD6, 0xE0, 0xE3, 0x5F, 0xB4, 0xF7, 0xFE, 0x51, 0x36, 0x79, 0x8E,
];

/// Build a well-known key: `prefix ‖ family ‖ 27 zero bytes ‖ index`.
const fn well_known_key(family: u8, index: u8) -> [u8; 32] {
    let mut key = [0u8; 32];
    key[0] = KEY_PREFIX[0];
    key[1] = KEY_PREFIX[1];
    key[2] = KEY_PREFIX[2];
    key[3] = family;
    key[31] = index;
    key
}

// =============================================================================
// WELL-KNOWN SINGLETON KEYS
// =============================================================================

/// Singleton: moment base point (index, transition moment, moment type).
pub const SINGLETON_MOMENT_BASE_INFO: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x01);
/// Singleton: network-wide registered host counter.
pub const SINGLETON_HOST_COUNT: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x02);
/// Singleton: current host registration fee.
pub const SINGLETON_HOST_REG_FEE: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x03);
/// Singleton: maximum supported registrations.
pub const SINGLETON_MAX_REGISTRATIONS: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x04);
/// Singleton: live reward epoch bookkeeping.
pub const SINGLETON_REWARD_INFO: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x05);
/// Singleton: live governance bookkeeping.
pub const SINGLETON_GOVERNANCE_INFO: [u8; 32] = well_known_key(KEY_FAMILY_SINGLETON, 0x06);

// =============================================================================
// WELL-KNOWN CONFIGURATION KEYS
// =============================================================================

/// Configuration: token issuer account.
pub const CONFIG_ISSUER_ADDR: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x01);
/// Configuration: foundation account.
pub const CONFIG_FOUNDATION_ADDR: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x02);
/// Configuration: moment size in ledgers or seconds.
pub const CONFIG_MOMENT_SIZE: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x03);
/// Configuration: token mint ceiling.
pub const CONFIG_MINT_LIMIT: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x04);
/// Configuration: fixed registration fee.
pub const CONFIG_FIXED_REG_FEE: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x05);
/// Configuration: heartbeat frequency in moments.
pub const CONFIG_HOST_HEARTBEAT_FREQ: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x06);
/// Configuration: lease acquire response window in ledgers.
pub const CONFIG_LEASE_ACQUIRE_WINDOW: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x07);
/// Configuration: reward epoch parameters.
pub const CONFIG_REWARD_CONFIGURATION: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x08);
/// Configuration: tolerated host downtime in moments.
pub const CONFIG_MAX_TOLERABLE_DOWNTIME: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x09);
/// Configuration: scheduled moment size/type transition.
pub const CONFIG_MOMENT_TRANSIT_INFO: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x0A);
/// Configuration: purchaser target price.
pub const CONFIG_PURCHASER_TARGET_PRICE: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x0B);
/// Configuration: governance vote parameters.
pub const CONFIG_GOVERNANCE_CONFIGURATION: [u8; 32] = well_known_key(KEY_FAMILY_CONFIGURATION, 0x0C);

/// Every singleton key, in index order. Membership here is what makes a
/// singleton-family key recognized at all.
pub const WELL_KNOWN_SINGLETON_KEYS: [[u8; 32]; 6] = [
    SINGLETON_MOMENT_BASE_INFO,
    SINGLETON_HOST_COUNT,
    SINGLETON_HOST_REG_FEE,
    SINGLETON_MAX_REGISTRATIONS,
    SINGLETON_REWARD_INFO,
    SINGLETON_GOVERNANCE_INFO,
];

/// Every configuration key, in index order.
pub const WELL_KNOWN_CONFIGURATION_KEYS: [[u8; 32]; 12] = [
    CONFIG_ISSUER_ADDR,
    CONFIG_FOUNDATION_ADDR,
    CONFIG_MOMENT_SIZE,
    CONFIG_MINT_LIMIT,
    CONFIG_FIXED_REG_FEE,
    CONFIG_HOST_HEARTBEAT_FREQ,
    CONFIG_LEASE_ACQUIRE_WINDOW,
    CONFIG_REWARD_CONFIGURATION,
    CONFIG_MAX_TOLERABLE_DOWNTIME,
    CONFIG_MOMENT_TRANSIT_INFO,
    CONFIG_PURCHASER_TARGET_PRICE,
    CONFIG_GOVERNANCE_CONFIGURATION,
];

// =============================================================================
// BYTE-MAPPED ENUMS
// =============================================================================

/// Lifecycle status of a governance candidate.
///
/// Any byte outside 0..=3 decodes to `Rejected`; the mapping is total by
/// design, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    /// 0: proposal has the support threshold.
    Supported,
    /// 1: proposal has been elected.
    Elected,
    /// 2: proposal was vetoed.
    Vetoed,
    /// 3: proposal expired unelected.
    Expired,
    /// Any other byte.
    Rejected,
}

impl CandidateStatus {
    /// Map a status byte to its symbolic value.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => CandidateStatus::Supported,
            1 => CandidateStatus::Elected,
            2 => CandidateStatus::Vetoed,
            3 => CandidateStatus::Expired,
            _ => CandidateStatus::Rejected,
        }
    }

    /// Symbolic string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Supported => "supported",
            CandidateStatus::Elected => "elected",
            CandidateStatus::Vetoed => "vetoed",
            CandidateStatus::Expired => "expired",
            CandidateStatus::Rejected => "rejected",
        }
    }
}

/// Governance steering mode of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GovernanceMode {
    /// 0: foundation pilots alone.
    Piloted,
    /// 1: foundation and hosts co-pilot.
    CoPiloted,
    /// 2: hosts pilot alone.
    AutoPiloted,
    /// Any other byte.
    Undefined,
}

impl GovernanceMode {
    /// Map a mode byte to its symbolic value.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => GovernanceMode::Piloted,
            1 => GovernanceMode::CoPiloted,
            2 => GovernanceMode::AutoPiloted,
            _ => GovernanceMode::Undefined,
        }
    }

    /// Symbolic string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            GovernanceMode::Piloted => "piloted",
            GovernanceMode::CoPiloted => "co-piloted",
            GovernanceMode::AutoPiloted => "auto-piloted",
            GovernanceMode::Undefined => "undefined",
        }
    }
}

/// Unit a moment is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomentType {
    /// Ledger-index count. Also the value when the type byte is absent.
    Ledger,
    /// Timestamp seconds.
    Timestamp,
}

impl MomentType {
    /// Map an optional type byte: 0 or absent means ledger, anything else
    /// means timestamp.
    pub fn from_optional_byte(byte: Option<u8>) -> Self {
        match byte {
            None | Some(0) => MomentType::Ledger,
            Some(_) => MomentType::Timestamp,
        }
    }

    /// Symbolic string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MomentType::Ledger => "ledger",
            MomentType::Timestamp => "timestamp",
        }
    }
}

/// Discriminant stored at byte 4 of a 32-byte candidate id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateType {
    /// Proposal to install a new hook slate.
    NewHook,
    /// Proposal to fall back to piloted governance.
    PilotedMode,
    /// Proposal to expel a misbehaving host.
    DudHost,
}

impl CandidateType {
    /// Discriminant byte written into the id.
    pub fn discriminant(&self) -> u8 {
        match self {
            CandidateType::NewHook => 1,
            CandidateType::PilotedMode => 2,
            CandidateType::DudHost => 3,
        }
    }

    /// Recover the type from a discriminant byte.
    pub fn from_discriminant(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(CandidateType::NewHook),
            2 => Some(CandidateType::PilotedMode),
            3 => Some(CandidateType::DudHost),
            _ => None,
        }
    }
}

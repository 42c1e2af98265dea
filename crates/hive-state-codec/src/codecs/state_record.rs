//! # State Record Decoder
//!
//! Turns raw hook-state entries into typed [`StateRecord`]s. The key
//! selects the layout; the payload is read at fixed big-endian offsets.
//!
//! Dispatch runs through two lookup tables: well-known singleton and
//! configuration keys match on all 32 bytes, the five entity kinds match
//! on their 4-byte prefix. A key in neither table fails closed with
//! [`CodecError::UnknownKey`]; there is no default layout.
//!
//! Every decoder checks its mandatory minimum length before the first
//! read. Optional trailing fields carry their own minimum; a buffer below
//! it yields `None` for that field, never a sentinel value. A record
//! either decodes in full or not at all.

use crate::codecs::{address, xfl};
use crate::domain::{
    CandidateIdRecord, CandidateOwnerRecord, CandidateStatus, CodecError, DecodedKey,
    GovernanceConfigurationRecord, GovernanceInfoRecord, GovernanceMode, HostAddressRecord,
    MomentBaseInfoRecord, MomentTransitInfoRecord, MomentType, RewardConfigurationRecord,
    RewardInfoRecord, StateKey, StateRecord, TokenIdRecord, TransfereeAddrRecord,
    ADDRESS_KEY_ACCOUNT_OFFSET, CONFIG_FIXED_REG_FEE, CONFIG_FOUNDATION_ADDR,
    CONFIG_GOVERNANCE_CONFIGURATION, CONFIG_HOST_HEARTBEAT_FREQ, CONFIG_ISSUER_ADDR,
    CONFIG_LEASE_ACQUIRE_WINDOW, CONFIG_MAX_TOLERABLE_DOWNTIME, CONFIG_MINT_LIMIT,
    CONFIG_MOMENT_SIZE, CONFIG_MOMENT_TRANSIT_INFO, CONFIG_PURCHASER_TARGET_PRICE,
    CONFIG_REWARD_CONFIGURATION, KEY_PREFIX, KEY_TAG_CANDIDATE_ID, KEY_TAG_CANDIDATE_OWNER,
    KEY_TAG_HOST_ADDR, KEY_TAG_TOKEN_ID, KEY_TAG_TRANSFEREE_ADDR, SINGLETON_GOVERNANCE_INFO,
    SINGLETON_HOST_COUNT, SINGLETON_HOST_REG_FEE, SINGLETON_MAX_REGISTRATIONS,
    SINGLETON_MOMENT_BASE_INFO, SINGLETON_REWARD_INFO,
};

// =============================================================================
// MANDATORY MINIMUM LENGTHS
// =============================================================================

const HOST_ADDRESS_MIN: usize = 103;
const TOKEN_ID_MIN: usize = 116;
const TRANSFEREE_ADDR_MIN: usize = 60;
const CANDIDATE_OWNER_MIN: usize = 128;
const CANDIDATE_ID_MIN: usize = 82;
const HOST_COUNT_MIN: usize = 4;
const MOMENT_BASE_INFO_MIN: usize = 12;
const REWARD_INFO_MIN: usize = 21;
const GOVERNANCE_INFO_MIN: usize = 70;
const ACCOUNT_CONFIG_MIN: usize = 20;
const REWARD_CONFIGURATION_MIN: usize = 13;
const MOMENT_TRANSIT_INFO_MIN: usize = 10;
const GOVERNANCE_CONFIGURATION_MIN: usize = 14;
const U16_MIN: usize = 2;
const U64_MIN: usize = 8;

// =============================================================================
// DISPATCH TABLES
// =============================================================================

/// Layout decoder: the canonical key plus the payload.
type RecordDecoder = fn(&[u8; 32], &[u8]) -> Result<StateRecord, CodecError>;

const fn entity_prefix(tag: u8) -> [u8; 4] {
    [KEY_PREFIX[0], KEY_PREFIX[1], KEY_PREFIX[2], tag]
}

/// Entity kinds: matched on the 4-byte key prefix.
const PREFIX_DECODERS: [([u8; 4], RecordDecoder); 5] = [
    (entity_prefix(KEY_TAG_TOKEN_ID), decode_token_id),
    (entity_prefix(KEY_TAG_HOST_ADDR), decode_host_address),
    (entity_prefix(KEY_TAG_TRANSFEREE_ADDR), decode_transferee_addr),
    (entity_prefix(KEY_TAG_CANDIDATE_OWNER), decode_candidate_owner),
    (entity_prefix(KEY_TAG_CANDIDATE_ID), decode_candidate_id),
];

/// Well-known keys: matched on all 32 bytes.
const WELL_KNOWN_DECODERS: [([u8; 32], RecordDecoder); 18] = [
    (SINGLETON_MOMENT_BASE_INFO, decode_moment_base_info),
    (SINGLETON_HOST_COUNT, decode_host_count),
    (SINGLETON_HOST_REG_FEE, decode_host_reg_fee),
    (SINGLETON_MAX_REGISTRATIONS, decode_max_registrations),
    (SINGLETON_REWARD_INFO, decode_reward_info),
    (SINGLETON_GOVERNANCE_INFO, decode_governance_info),
    (CONFIG_ISSUER_ADDR, decode_issuer_address),
    (CONFIG_FOUNDATION_ADDR, decode_foundation_address),
    (CONFIG_MOMENT_SIZE, decode_moment_size),
    (CONFIG_MINT_LIMIT, decode_mint_limit),
    (CONFIG_FIXED_REG_FEE, decode_fixed_reg_fee),
    (CONFIG_HOST_HEARTBEAT_FREQ, decode_host_heartbeat_freq),
    (CONFIG_LEASE_ACQUIRE_WINDOW, decode_lease_acquire_window),
    (CONFIG_REWARD_CONFIGURATION, decode_reward_configuration),
    (CONFIG_MAX_TOLERABLE_DOWNTIME, decode_max_tolerable_downtime),
    (CONFIG_MOMENT_TRANSIT_INFO, decode_moment_transit_info),
    (CONFIG_PURCHASER_TARGET_PRICE, decode_purchaser_target_price),
    (CONFIG_GOVERNANCE_CONFIGURATION, decode_governance_configuration),
];

// =============================================================================
// PUBLIC SURFACE
// =============================================================================

/// Decode a state entry into its typed record.
pub fn decode(key: &[u8], data: &[u8]) -> Result<StateRecord, CodecError> {
    let key = canonical_key(key)?;

    // Well-known keys first: their family tags have no prefix entry.
    for (known, decoder) in &WELL_KNOWN_DECODERS {
        if key.0 == *known {
            return decoder(&key.0, data);
        }
    }

    let prefix = [key.0[0], key.0[1], key.0[2], key.0[3]];
    for (known_prefix, decoder) in &PREFIX_DECODERS {
        if prefix == *known_prefix {
            return decoder(&key.0, data);
        }
    }

    Err(CodecError::UnknownKey(key.hex()))
}

/// Resolve a key to its kind without touching any payload. This is the
/// listing path: enumerating entries does not require fetching them.
pub fn decode_key_only(key: &[u8]) -> Result<DecodedKey, CodecError> {
    let key = canonical_key(key)?;
    let kind = key.kind().ok_or_else(|| CodecError::UnknownKey(key.hex()))?;
    Ok(DecodedKey { key, kind })
}

fn canonical_key(key: &[u8]) -> Result<StateKey, CodecError> {
    let bytes: [u8; 32] = key
        .try_into()
        .map_err(|_| CodecError::UnknownKey(hex::encode_upper(key)))?;
    Ok(StateKey(bytes))
}

// =============================================================================
// READ HELPERS
// =============================================================================
//
// The fixed-width readers index without bounds checks of their own; every
// decoder below verifies its mandatory minimum first, and the opt_*
// variants verify the per-field minimum before reading.

fn require_len(kind: &'static str, data: &[u8], min: usize) -> Result<(), CodecError> {
    if data.len() < min {
        return Err(CodecError::BufferTooShort {
            kind,
            got: data.len(),
            min,
        });
    }
    Ok(())
}

fn be_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

fn be_u32(data: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    u32::from_be_bytes(buf)
}

fn be_u64(data: &[u8], offset: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    u64::from_be_bytes(buf)
}

fn be_i64(data: &[u8], offset: usize) -> i64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[offset..offset + 8]);
    i64::from_be_bytes(buf)
}

fn opt_u8(data: &[u8], offset: usize, min: usize) -> Option<u8> {
    (data.len() >= min).then(|| data[offset])
}

fn opt_flag(data: &[u8], offset: usize, min: usize) -> Option<bool> {
    (data.len() >= min).then(|| data[offset] != 0)
}

fn opt_be_u16(data: &[u8], offset: usize, min: usize) -> Option<u16> {
    (data.len() >= min).then(|| be_u16(data, offset))
}

fn opt_be_u32(data: &[u8], offset: usize, min: usize) -> Option<u32> {
    (data.len() >= min).then(|| be_u32(data, offset))
}

fn opt_be_u64(data: &[u8], offset: usize, min: usize) -> Option<u64> {
    (data.len() >= min).then(|| be_u64(data, offset))
}

fn opt_scaled_decimal(
    data: &[u8],
    offset: usize,
    min: usize,
) -> Result<Option<String>, CodecError> {
    if data.len() < min {
        return Ok(None);
    }
    xfl::to_decimal_string(be_i64(data, offset)).map(Some)
}

fn scaled_decimal(data: &[u8], offset: usize) -> Result<String, CodecError> {
    xfl::to_decimal_string(be_i64(data, offset))
}

fn account_field(bytes: &[u8], offset: usize) -> String {
    let mut account_id = [0u8; 20];
    account_id.copy_from_slice(&bytes[offset..offset + 20]);
    address::encode_account_id(&account_id)
}

fn nul_trimmed_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_string()
}

// =============================================================================
// ENTITY DECODERS
// =============================================================================

fn decode_host_address(key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("host_address", data, HOST_ADDRESS_MIN)?;
    Ok(StateRecord::HostAddress(HostAddressRecord {
        address: account_field(key, ADDRESS_KEY_ACCOUNT_OFFSET),
        uri_token_id: hex::encode_upper(&data[0..32]),
        country_code: nul_trimmed_text(&data[32..34]),
        description: nul_trimmed_text(&data[42..68]),
        registration_ledger: be_u64(data, 68),
        registration_fee: be_u64(data, 76),
        max_instances: be_u32(data, 84),
        active_instances: be_u32(data, 88),
        last_heartbeat_index: be_i64(data, 92),
        version: format!("{}.{}.{}", data[100], data[101], data[102]),
        registration_timestamp: opt_be_u64(data, 103, 111),
        pending_transfer: opt_flag(data, 111, 112),
        last_vote_candidate_idx: opt_be_u32(data, 112, 116),
        last_vote_timestamp: opt_be_u64(data, 116, 124),
        support_vote_sent: opt_flag(data, 124, 125),
        host_reputation: opt_u8(data, 125, 126),
        flags: opt_u8(data, 126, 127),
        transfer_timestamp: opt_be_u64(data, 127, 135),
    }))
}

fn decode_token_id(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("token_id", data, TOKEN_ID_MIN)?;
    Ok(StateRecord::TokenId(TokenIdRecord {
        address: account_field(data, 0),
        cpu_model_name: nul_trimmed_text(&data[20..60]),
        cpu_count: be_u16(data, 60),
        cpu_mhz: be_u16(data, 62),
        cpu_microsec: be_u32(data, 64),
        ram_mb: be_u32(data, 68),
        disk_mb: be_u32(data, 72),
        email: nul_trimmed_text(&data[76..116]),
        accumulated_reward: opt_scaled_decimal(data, 116, 124)?,
    }))
}

fn decode_transferee_addr(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("transferee_addr", data, TRANSFEREE_ADDR_MIN)?;
    Ok(StateRecord::TransfereeAddr(TransfereeAddrRecord {
        prev_host_address: account_field(data, 0),
        registration_ledger: be_u64(data, 20),
        transferred_token_id: hex::encode_upper(&data[28..60]),
    }))
}

fn decode_candidate_owner(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("candidate_owner", data, CANDIDATE_OWNER_MIN)?;
    Ok(StateRecord::CandidateOwner(CandidateOwnerRecord {
        governor_hook_hash: hex::encode_upper(&data[0..32]),
        registry_hook_hash: hex::encode_upper(&data[32..64]),
        heartbeat_hook_hash: hex::encode_upper(&data[64..96]),
        reputation_hook_hash: hex::encode_upper(&data[96..128]),
    }))
}

fn decode_candidate_id(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("candidate_id", data, CANDIDATE_ID_MIN)?;
    Ok(StateRecord::CandidateId(CandidateIdRecord {
        owner_address: account_field(data, 0),
        index: be_u32(data, 20),
        short_name: nul_trimmed_text(&data[24..44]),
        created_timestamp: be_u64(data, 44),
        proposal_fee: scaled_decimal(data, 52)?,
        support_vote_count: be_u32(data, 60),
        last_vote_timestamp: be_u64(data, 64),
        status: CandidateStatus::from_byte(data[72]),
        status_change_timestamp: be_u64(data, 73),
        foundation_vote_status: CandidateStatus::from_byte(data[81]),
        elect_purge_last_try_timestamp: opt_be_u64(data, 82, 90),
        complete_acknowledged: opt_flag(data, 90, 91),
    }))
}

// =============================================================================
// SINGLETON DECODERS
// =============================================================================

fn decode_host_count(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("host_count", data, HOST_COUNT_MIN)?;
    Ok(StateRecord::HostCount(be_u32(data, 0)))
}

fn decode_moment_base_info(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("moment_base_info", data, MOMENT_BASE_INFO_MIN)?;
    Ok(StateRecord::MomentBaseInfo(MomentBaseInfoRecord {
        base_idx: be_u64(data, 0),
        transition_moment: be_u32(data, 8),
        moment_type: MomentType::from_optional_byte(data.get(12).copied()),
    }))
}

fn decode_host_reg_fee(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("host_reg_fee", data, U64_MIN)?;
    Ok(StateRecord::HostRegFee(be_u64(data, 0)))
}

fn decode_max_registrations(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("max_registrations", data, U64_MIN)?;
    Ok(StateRecord::MaxRegistrations(be_u64(data, 0)))
}

fn decode_reward_info(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("reward_info", data, REWARD_INFO_MIN)?;
    Ok(StateRecord::RewardInfo(RewardInfoRecord {
        epoch: data[0],
        saved_moment: be_u32(data, 1),
        prev_moment_active_host_count: be_u32(data, 5),
        cur_moment_active_host_count: be_u32(data, 9),
        epoch_pool: scaled_decimal(data, 13)?,
        host_max_lease_amount: opt_scaled_decimal(data, 21, 29)?,
    }))
}

fn decode_governance_info(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("governance_info", data, GOVERNANCE_INFO_MIN)?;
    Ok(StateRecord::GovernanceInfo(GovernanceInfoRecord {
        governance_mode: GovernanceMode::from_byte(data[0]),
        last_candidate_idx: be_u32(data, 1),
        voter_base_count: be_u32(data, 5),
        voter_base_count_changed_timestamp: be_u64(data, 9),
        foundation_last_voted_candidate_idx: be_u32(data, 17),
        foundation_last_voted_timestamp: be_u64(data, 21),
        elected_proposal_unique_id: hex::encode_upper(&data[29..61]),
        proposal_elected_timestamp: be_u64(data, 61),
        updated_hook_count: data[69],
    }))
}

// =============================================================================
// CONFIGURATION DECODERS
// =============================================================================

fn decode_issuer_address(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("issuer_address", data, ACCOUNT_CONFIG_MIN)?;
    Ok(StateRecord::IssuerAddress(account_field(data, 0)))
}

fn decode_foundation_address(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("foundation_address", data, ACCOUNT_CONFIG_MIN)?;
    Ok(StateRecord::FoundationAddress(account_field(data, 0)))
}

fn decode_moment_size(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("moment_size", data, U16_MIN)?;
    Ok(StateRecord::MomentSize(be_u16(data, 0)))
}

fn decode_mint_limit(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("mint_limit", data, U64_MIN)?;
    Ok(StateRecord::MintLimit(be_u64(data, 0)))
}

fn decode_fixed_reg_fee(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("fixed_reg_fee", data, U64_MIN)?;
    Ok(StateRecord::FixedRegFee(be_u64(data, 0)))
}

fn decode_host_heartbeat_freq(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("host_heartbeat_freq", data, U16_MIN)?;
    Ok(StateRecord::HostHeartbeatFreq(be_u16(data, 0)))
}

fn decode_lease_acquire_window(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("lease_acquire_window", data, U16_MIN)?;
    Ok(StateRecord::LeaseAcquireWindow(be_u16(data, 0)))
}

fn decode_reward_configuration(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("reward_configuration", data, REWARD_CONFIGURATION_MIN)?;
    Ok(StateRecord::RewardConfiguration(RewardConfigurationRecord {
        epoch_count: data[0],
        first_epoch_reward_quota: be_u32(data, 1),
        epoch_reward_amount: be_u32(data, 5),
        reward_start_moment: be_u32(data, 9),
        accumulated_reward_frequency: opt_be_u16(data, 13, 15),
        host_reputation_threshold: opt_u8(data, 15, 16),
    }))
}

fn decode_max_tolerable_downtime(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("max_tolerable_downtime", data, U16_MIN)?;
    Ok(StateRecord::MaxTolerableDowntime(be_u16(data, 0)))
}

fn decode_moment_transit_info(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("moment_transit_info", data, MOMENT_TRANSIT_INFO_MIN)?;
    Ok(StateRecord::MomentTransitInfo(MomentTransitInfoRecord {
        transition_idx: be_u64(data, 0),
        moment_size: be_u16(data, 8),
        moment_type: MomentType::from_optional_byte(data.get(10).copied()),
    }))
}

fn decode_purchaser_target_price(_key: &[u8; 32], data: &[u8]) -> Result<StateRecord, CodecError> {
    require_len("purchaser_target_price", data, U64_MIN)?;
    Ok(StateRecord::PurchaserTargetPrice(scaled_decimal(data, 0)?))
}

fn decode_governance_configuration(
    _key: &[u8; 32],
    data: &[u8],
) -> Result<StateRecord, CodecError> {
    require_len(
        "governance_configuration",
        data,
        GOVERNANCE_CONFIGURATION_MIN,
    )?;
    Ok(StateRecord::GovernanceConfiguration(
        GovernanceConfigurationRecord {
            eligibility_period: be_u32(data, 0),
            candidate_life_period: be_u32(data, 4),
            candidate_election_period: be_u32(data, 8),
            candidate_support_average: be_u16(data, 12),
        },
    ))
}

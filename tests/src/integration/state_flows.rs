//! # State Codec Integration Flows
//!
//! Walks a realistic registry snapshot the way an operator console does:
//!
//! 1. **Listing**: classify every key with `decode_key_only` before any
//!    payload is fetched
//! 2. **Fetching**: decode each payload into its typed record
//! 3. **Re-derivation**: rebuild keys from decoded records and derive the
//!    ledger storage index each entry is filed under

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    // Key and record codecs
    use hive_state_codec::{
        candidate_id_key, candidate_owner_key, candidate_type, content_key, decode,
        decode_key_only, derive_storage_index, dud_host_candidate_id, host_address_key,
        new_hook_candidate_id, piloted_mode_candidate_id, token_id_key, transferee_addr_key,
    };
    use hive_state_codec::{
        from_parts, AccountId, CandidateType, KeyKind, StateKey, StateRecord, HOOK_NAMESPACE,
    };

    // Well-known keys live one level down; snapshots reference them directly
    use hive_state_codec::domain::{
        CONFIG_ISSUER_ADDR, CONFIG_MOMENT_SIZE, CONFIG_REWARD_CONFIGURATION,
        SINGLETON_HOST_COUNT, SINGLETON_MOMENT_BASE_INFO,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Textual address of account id `[0x01; 20]`.
    const HOST: &str = "raJ1Aqkhf19P7cyUc33MMVAzgvHPvtNFC";
    /// Textual address of the zero account id.
    const TRANSFEREE: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";
    /// Account id the registry hook runs under, as the storage owner.
    const REGISTRY_OWNER: AccountId = [0x7E; 20];
    /// URI token id of the host's hardware profile entry.
    const HARDWARE_TOKEN_ID: [u8; 32] = [0x55; 32];

    /// One scaled-decimal unit ("1") as wire bytes.
    fn one_as_wire() -> [u8; 8] {
        from_parts(false, 1_000_000_000_000_000, -15)
            .unwrap()
            .to_be_bytes()
    }

    /// Host registration payload pointing at [`HARDWARE_TOKEN_ID`].
    fn host_payload() -> Vec<u8> {
        let mut data = vec![0u8; 103];
        data[0..32].copy_from_slice(&HARDWARE_TOKEN_ID);
        data[32..34].copy_from_slice(b"SG");
        data[42..51].copy_from_slice(b"hive-node");
        data[68..76].copy_from_slice(&7_000_000u64.to_be_bytes());
        data[76..84].copy_from_slice(&10u64.to_be_bytes());
        data[84..88].copy_from_slice(&4u32.to_be_bytes());
        data[88..92].copy_from_slice(&1u32.to_be_bytes());
        data[92..100].copy_from_slice(&9_000i64.to_be_bytes());
        data[100..103].copy_from_slice(&[0, 6, 4]);
        data
    }

    /// Hardware profile payload owned by [`HOST`].
    fn token_payload() -> Vec<u8> {
        let mut data = vec![0u8; 116];
        data[0..20].copy_from_slice(&[0x01u8; 20]);
        data[20..29].copy_from_slice(b"EPYC 7543");
        data[60..62].copy_from_slice(&64u16.to_be_bytes());
        data[62..64].copy_from_slice(&2_800u16.to_be_bytes());
        data[64..68].copy_from_slice(&800_000u32.to_be_bytes());
        data[68..72].copy_from_slice(&262_144u32.to_be_bytes());
        data[72..76].copy_from_slice(&1_048_576u32.to_be_bytes());
        data[76..91].copy_from_slice(b"ops@example.com");
        data
    }

    fn transferee_payload() -> Vec<u8> {
        let mut data = vec![0u8; 60];
        data[0..20].copy_from_slice(&[0x01u8; 20]);
        data[20..28].copy_from_slice(&42u64.to_be_bytes());
        data[28..60].copy_from_slice(&[0xCDu8; 32]);
        data
    }

    fn candidate_owner_payload() -> Vec<u8> {
        let mut data = vec![0u8; 128];
        data[0..32].fill(0x10);
        data[32..64].fill(0x20);
        data[64..96].fill(0x30);
        data[96..128].fill(0x40);
        data
    }

    /// Governance candidate payload proposed by [`HOST`].
    fn candidate_payload() -> Vec<u8> {
        let mut data = vec![0u8; 82];
        data[0..20].copy_from_slice(&[0x01u8; 20]);
        data[20..24].copy_from_slice(&3u32.to_be_bytes());
        data[24..34].copy_from_slice(b"dud-host-3");
        data[44..52].copy_from_slice(&1_690_000_000u64.to_be_bytes());
        data[52..60].copy_from_slice(&one_as_wire());
        data[60..64].copy_from_slice(&12u32.to_be_bytes());
        data[64..72].copy_from_slice(&1_690_000_050u64.to_be_bytes());
        data
    }

    /// A registry snapshot: every key family with a minimal live payload.
    fn snapshot() -> Vec<(StateKey, Vec<u8>)> {
        let dud_id = dud_host_candidate_id(HOST).expect("valid host address");
        vec![
            (host_address_key(HOST).unwrap(), host_payload()),
            (token_id_key(&HARDWARE_TOKEN_ID), token_payload()),
            (transferee_addr_key(TRANSFEREE).unwrap(), transferee_payload()),
            (candidate_owner_key(HOST).unwrap(), candidate_owner_payload()),
            (candidate_id_key(&dud_id), candidate_payload()),
            (StateKey(SINGLETON_HOST_COUNT), 128u32.to_be_bytes().to_vec()),
            (StateKey(SINGLETON_MOMENT_BASE_INFO), vec![0u8; 12]),
            (StateKey(CONFIG_MOMENT_SIZE), 3_600u16.to_be_bytes().to_vec()),
            (StateKey(CONFIG_ISSUER_ADDR), vec![0x01u8; 20]),
            (StateKey(CONFIG_REWARD_CONFIGURATION), vec![0u8; 13]),
        ]
    }

    // =============================================================================
    // INTEGRATION TESTS: SNAPSHOT WALK
    // =============================================================================

    /// Every snapshot entry classifies on its key alone, then decodes,
    /// and the two dispatch paths agree on the family.
    #[test]
    fn test_snapshot_walk_classifies_then_decodes_every_entry() {
        let mut tally: Vec<KeyKind> = Vec::new();

        for (key, payload) in snapshot() {
            let listed = decode_key_only(key.as_bytes())
                .unwrap_or_else(|err| panic!("key {} should classify: {err}", key.hex()));
            assert_eq!(listed.key, key);

            let record = decode(key.as_bytes(), &payload)
                .unwrap_or_else(|err| panic!("key {} should decode: {err}", key.hex()));

            let coherent = matches!(
                (listed.kind, &record),
                (KeyKind::HostAddress, StateRecord::HostAddress(_))
                    | (KeyKind::TokenId, StateRecord::TokenId(_))
                    | (KeyKind::TransfereeAddr, StateRecord::TransfereeAddr(_))
                    | (KeyKind::CandidateOwner, StateRecord::CandidateOwner(_))
                    | (KeyKind::CandidateId, StateRecord::CandidateId(_))
                    | (
                        KeyKind::Singleton,
                        StateRecord::HostCount(_) | StateRecord::MomentBaseInfo(_)
                    )
                    | (
                        KeyKind::Configuration,
                        StateRecord::MomentSize(_)
                            | StateRecord::IssuerAddress(_)
                            | StateRecord::RewardConfiguration(_)
                    )
            );
            assert!(
                coherent,
                "kind {:?} does not match decoded record for key {}",
                listed.kind,
                key.hex()
            );
            tally.push(listed.kind);
        }

        let count = |kind: KeyKind| tally.iter().filter(|k| **k == kind).count();
        assert_eq!(count(KeyKind::HostAddress), 1);
        assert_eq!(count(KeyKind::TokenId), 1);
        assert_eq!(count(KeyKind::TransfereeAddr), 1);
        assert_eq!(count(KeyKind::CandidateOwner), 1);
        assert_eq!(count(KeyKind::CandidateId), 1);
        assert_eq!(count(KeyKind::Singleton), 2);
        assert_eq!(count(KeyKind::Configuration), 3);
    }

    /// A key from some other hook's state must fall out of both the
    /// listing and the decoding path, not decode as garbage.
    #[test]
    fn test_snapshot_walk_skips_foreign_entries() {
        let foreign = [0xB7u8; 32];
        assert!(decode_key_only(&foreign).is_err());
        assert!(decode(&foreign, &[0u8; 200]).is_err());
    }

    // =============================================================================
    // INTEGRATION TESTS: RECORD -> KEY ROUND TRIPS
    // =============================================================================

    /// The textual address inside a decoded host record rebuilds the
    /// exact key the record was fetched under.
    #[test]
    fn test_host_record_round_trips_through_its_textual_address() {
        let key = host_address_key(HOST).unwrap();
        let StateRecord::HostAddress(host) = decode(key.as_bytes(), &host_payload()).unwrap()
        else {
            panic!("wrong variant");
        };

        assert_eq!(host.address, HOST);
        assert_eq!(host_address_key(&host.address).unwrap(), key);
    }

    /// A host registration names its hardware profile by URI token id;
    /// that id rebuilds the key the profile entry lives under, and the
    /// profile names the host back.
    #[test]
    fn test_host_record_points_at_its_hardware_profile() {
        let host_key = host_address_key(HOST).unwrap();
        let StateRecord::HostAddress(host) =
            decode(host_key.as_bytes(), &host_payload()).unwrap()
        else {
            panic!("wrong variant");
        };

        let token_bytes: [u8; 32] = hex::decode(&host.uri_token_id)
            .expect("uri token id is hex")
            .try_into()
            .expect("uri token id is 32 bytes");
        let token_key = token_id_key(&token_bytes);
        assert_eq!(token_key, token_id_key(&HARDWARE_TOKEN_ID));

        let StateRecord::TokenId(profile) =
            decode(token_key.as_bytes(), &token_payload()).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(profile.address, HOST);
    }

    /// The issuer configuration entry decodes to the same textual form
    /// the address-keyed records use.
    #[test]
    fn test_issuer_configuration_uses_textual_addresses() {
        let record = decode(&CONFIG_ISSUER_ADDR, &[0x01u8; 20]).unwrap();
        assert_eq!(record, StateRecord::IssuerAddress(HOST.to_string()));
    }

    // =============================================================================
    // INTEGRATION TESTS: STORAGE INDEX DERIVATION
    // =============================================================================

    /// Every snapshot key files under its own storage index; derivation
    /// is stable across calls.
    #[test]
    fn test_snapshot_keys_file_under_distinct_storage_indexes() {
        let mut seen = HashSet::new();
        for (key, _) in snapshot() {
            let index = derive_storage_index(&REGISTRY_OWNER, &key, &HOOK_NAMESPACE);
            assert_eq!(index.len(), 64);
            assert!(index.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(index, index.to_uppercase());
            assert_eq!(
                index,
                derive_storage_index(&REGISTRY_OWNER, &key, &HOOK_NAMESPACE)
            );
            assert!(seen.insert(index), "storage index collision for {}", key.hex());
        }
    }

    /// Freshly minted token ids never land on each other's keys.
    #[test]
    fn test_random_token_ids_key_without_collision() {
        let mut keys = HashSet::new();
        for _ in 0..64 {
            let token_id: [u8; 32] = rand::random();
            let key = token_id_key(&token_id);
            assert_eq!(key, content_key(KeyKind::TokenId, &token_id).unwrap());
            assert!(keys.insert(key), "token key collision");
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: CANDIDATE IDENTITY
    // =============================================================================

    /// Each proposal type mints its own id, files under its own key, and
    /// the type reads back from the id alone.
    #[test]
    fn test_candidate_identities_file_under_distinct_keys() {
        let new_hook = new_hook_candidate_id(&[0x5Au8; 128]);
        let piloted = piloted_mode_candidate_id();
        let dud = dud_host_candidate_id(HOST).unwrap();

        let keys: HashSet<StateKey> = [new_hook, piloted, dud]
            .iter()
            .map(candidate_id_key)
            .collect();
        assert_eq!(keys.len(), 3, "candidate keys must not collide");

        assert_eq!(candidate_type(&new_hook), Some(CandidateType::NewHook));
        assert_eq!(candidate_type(&piloted), Some(CandidateType::PilotedMode));
        assert_eq!(candidate_type(&dud), Some(CandidateType::DudHost));
    }

    /// A dud-host proposal decodes into a candidate record whose owner
    /// is the proposing account.
    #[test]
    fn test_dud_host_candidate_entry_names_its_proposer() {
        let dud = dud_host_candidate_id(HOST).unwrap();
        let key = candidate_id_key(&dud);

        let StateRecord::CandidateId(candidate) =
            decode(key.as_bytes(), &candidate_payload()).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(candidate.owner_address, HOST);
        assert_eq!(candidate.index, 3);
        assert_eq!(candidate.short_name, "dud-host-3");
        assert_eq!(candidate.proposal_fee, "1");
    }
}

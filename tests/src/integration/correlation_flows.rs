//! # Correlation Integration Flows
//!
//! Full client round trips under a paused clock:
//!
//! 1. **Lease acquisition**: decode a lease URI, relay the signed
//!    acquire, watch until the hook's response names the leased instance
//! 2. **Governance**: mint a dud-host candidate id, relay the proposal,
//!    recover the candidate type from the hook's response
//! 3. **Stream mechanics**: the poll cursor advancing past seen ledgers,
//!    and independent watches resolving on their own clocks

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    // State codec: lease URIs and candidate identities
    use hive_state_codec::{candidate_type, decode_raw, dud_host_candidate_id, CandidateType};

    // Correlation: engine, ports, domain shapes
    use hive_correlation::{
        CorrelationConfig, CorrelationEngine, CorrelationError, HookEvent, HookParameter,
        LedgerGateway, LedgerTransaction, MockLedgerGateway, SignedAction, SubmitHandle,
        SubmitReceipt, TxMemo, WatchOutcome,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Account the registry hook runs under.
    const REGISTRY: &str = "rRegistryHookAccount";
    /// Host being leased from / reported against.
    const HOST: &str = "raJ1Aqkhf19P7cyUc33MMVAzgvHPvtNFC";
    /// Raw-form lease URI: index 7, amount 2.5.
    const RAW_LEASE_URI: &str =
        "6876656C656173650007A0A1A2A3A4A5A6A7A8A9AAABACADAEAF5488E1BC9BF04000";

    /// A hook response transaction: kind and reference travel as hook
    /// parameters, the payload as a JSON memo.
    fn response_tx(
        ledger_index: u64,
        kind: &str,
        reference: &str,
        payload: serde_json::Value,
    ) -> LedgerTransaction {
        LedgerTransaction {
            hash: format!("TX{ledger_index}"),
            ledger_index,
            memos: vec![TxMemo {
                memo_type: "hive/event".to_string(),
                format: "application/json".to_string(),
                data: payload.to_string(),
            }],
            hook_parameters: vec![
                HookParameter {
                    name: "event".to_string(),
                    value: kind.to_string(),
                },
                HookParameter {
                    name: "ref".to_string(),
                    value: reference.to_string(),
                },
            ],
        }
    }

    /// A transaction with no hook response attached (plain payment,
    /// heartbeat, and so on).
    fn noise_tx(ledger_index: u64) -> LedgerTransaction {
        LedgerTransaction {
            hash: format!("TX{ledger_index}"),
            ledger_index,
            memos: vec![],
            hook_parameters: vec![],
        }
    }

    fn event_decoder(tx: &LedgerTransaction) -> Option<HookEvent> {
        let kind = tx
            .hook_parameters
            .iter()
            .find(|p| p.name == "event")?
            .value
            .clone();
        let reference_id = tx
            .hook_parameters
            .iter()
            .find(|p| p.name == "ref")
            .map(|p| p.value.clone());
        let payload = tx
            .memos
            .first()
            .and_then(|memo| serde_json::from_str(&memo.data).ok())
            .unwrap_or(serde_json::Value::Null);
        Some(HookEvent {
            kind,
            reference_id,
            payload,
        })
    }

    // =============================================================================
    // INTEGRATION TESTS: LEASE ACQUISITION
    // =============================================================================

    /// Decode an offer, relay the acquire, and resolve on the hook's
    /// success event carrying the decoded amount back.
    #[tokio::test(start_paused = true)]
    async fn test_acquire_lease_flow_resolves_with_decoded_amount() {
        let lease = decode_raw(RAW_LEASE_URI).expect("offer URI decodes");
        assert_eq!(lease.lease_amount, "2.5");

        let gateway = Arc::new(MockLedgerGateway::default().with_receipt(SubmitReceipt {
            tx_hash: "ACQ1".to_string(),
            ledger_index: 40_123,
        }));
        let engine =
            CorrelationEngine::new(Arc::clone(&gateway), REGISTRY, CorrelationConfig::for_testing());

        let action = SignedAction::new("acquire_lease", hex::decode(RAW_LEASE_URI).unwrap());
        let handle = engine.submit(&action).await.expect("relay succeeds");
        assert_eq!(handle.origin_ledger_index, 40_123);

        gateway.script(Ok(vec![noise_tx(40_124)]));
        gateway.script(Ok(vec![response_tx(
            40_125,
            "acquire_success",
            &action.reference_id,
            json!({
                "lease_amount": lease.lease_amount,
                "lease_index": lease.lease_index,
                "instance_name": "vm-7",
                "host": HOST,
            }),
        )]));

        let start = tokio::time::Instant::now();
        let outcome = engine
            .watch(&handle, "acquire_success", "acquire_error", event_decoder)
            .await
            .expect("watch completes");

        let WatchOutcome::Success(payload) = outcome else {
            panic!("expected success, got {outcome:?}");
        };
        assert_eq!(payload["lease_amount"], "2.5");
        assert_eq!(payload["lease_index"], 7);
        assert_eq!(payload["instance_name"], "vm-7");
        assert_eq!(gateway.polls_served(), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    /// The hook refusing the acquire surfaces its reason, built from the
    /// same decoded offer the client submitted against.
    #[tokio::test(start_paused = true)]
    async fn test_acquire_lease_rejection_names_the_offer() {
        let lease = decode_raw(RAW_LEASE_URI).unwrap();
        let gateway = Arc::new(MockLedgerGateway::default());
        let engine =
            CorrelationEngine::new(Arc::clone(&gateway), REGISTRY, CorrelationConfig::for_testing());

        let action = SignedAction::new("acquire_lease", hex::decode(RAW_LEASE_URI).unwrap());
        let handle = engine.submit(&action).await.unwrap();

        gateway.script(Ok(vec![response_tx(
            5,
            "acquire_error",
            &action.reference_id,
            json!({ "reason": format!("lease {} already sold", lease.lease_index) }),
        )]));

        let outcome = engine
            .watch(&handle, "acquire_success", "acquire_error", event_decoder)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            WatchOutcome::Rejected {
                reason: Some("lease 7 already sold".to_string())
            }
        );
    }

    /// Responses for other watchers and unrelated registry traffic must
    /// not resolve this watch.
    #[tokio::test(start_paused = true)]
    async fn test_watch_skips_registry_noise() {
        let foreign_ref = Uuid::new_v4().simple().to_string().to_uppercase();
        let gateway = Arc::new(MockLedgerGateway::default());
        let engine =
            CorrelationEngine::new(Arc::clone(&gateway), REGISTRY, CorrelationConfig::for_testing());

        let action = SignedAction::new("acquire_lease", vec![]);
        let handle = engine.submit(&action).await.unwrap();

        gateway.script(Ok(vec![
            noise_tx(2),
            response_tx(3, "acquire_success", &foreign_ref, json!({})),
            response_tx(4, "heartbeat_success", &action.reference_id, json!({})),
        ]));
        gateway.script(Ok(vec![
            noise_tx(5),
            response_tx(6, "acquire_success", &action.reference_id, json!({"ok": true})),
        ]));

        let start = tokio::time::Instant::now();
        let outcome = engine
            .watch(&handle, "acquire_success", "acquire_error", event_decoder)
            .await
            .unwrap();

        assert_eq!(outcome, WatchOutcome::Success(json!({"ok": true})));
        assert_eq!(gateway.polls_served(), 2);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    // =============================================================================
    // INTEGRATION TESTS: GOVERNANCE PROPOSAL
    // =============================================================================

    /// Propose a dud-host candidate and read the candidate type back out
    /// of the id echoed by the hook.
    #[tokio::test(start_paused = true)]
    async fn test_dud_host_proposal_round_trip() {
        let candidate_id = dud_host_candidate_id(HOST).expect("valid host address");
        let gateway = Arc::new(MockLedgerGateway::default());
        let engine =
            CorrelationEngine::new(Arc::clone(&gateway), REGISTRY, CorrelationConfig::for_testing());

        let action = SignedAction::new("propose_candidate", candidate_id.to_vec());
        let handle = engine.submit(&action).await.unwrap();

        gateway.script(Ok(vec![response_tx(
            9,
            "propose_success",
            &action.reference_id,
            json!({ "candidate_id": hex::encode_upper(candidate_id) }),
        )]));

        let outcome = engine
            .watch(&handle, "propose_success", "propose_error", event_decoder)
            .await
            .unwrap();
        let WatchOutcome::Success(payload) = outcome else {
            panic!("expected success");
        };

        let echoed: [u8; 32] = hex::decode(payload["candidate_id"].as_str().unwrap())
            .expect("candidate id is hex")
            .try_into()
            .expect("candidate id is 32 bytes");
        assert_eq!(echoed, candidate_id);
        assert_eq!(candidate_type(&echoed), Some(CandidateType::DudHost));
    }

    // =============================================================================
    // INTEGRATION TESTS: STREAM MECHANICS
    // =============================================================================

    /// Gateway serving a growing account history; every query logs the
    /// cursor it was asked for.
    struct HistoryGateway {
        history: Mutex<Vec<LedgerTransaction>>,
        since_log: Mutex<Vec<u64>>,
    }

    impl HistoryGateway {
        fn new(history: Vec<LedgerTransaction>) -> Self {
            Self {
                history: Mutex::new(history),
                since_log: Mutex::new(Vec::new()),
            }
        }

        fn append(&self, tx: LedgerTransaction) {
            self.history.lock().unwrap().push(tx);
        }

        fn since_log(&self) -> Vec<u64> {
            self.since_log.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LedgerGateway for HistoryGateway {
        async fn account_transactions(
            &self,
            _account: &str,
            since_ledger_index: u64,
        ) -> Result<Vec<LedgerTransaction>, CorrelationError> {
            self.since_log.lock().unwrap().push(since_ledger_index);
            Ok(self
                .history
                .lock()
                .unwrap()
                .iter()
                .filter(|tx| tx.ledger_index > since_ledger_index)
                .cloned()
                .collect())
        }

        async fn submit_signed(
            &self,
            _action: &SignedAction,
        ) -> Result<SubmitReceipt, CorrelationError> {
            Ok(SubmitReceipt {
                tx_hash: "HIST".to_string(),
                ledger_index: 1,
            })
        }
    }

    /// The watch advances its cursor past every ledger it has seen, so
    /// old noise is fetched once and the late response still lands.
    #[tokio::test(start_paused = true)]
    async fn test_poll_cursor_advances_past_seen_ledgers() {
        let reference = "00AA00AA00AA00AA00AA00AA00AA00AA";
        let gateway = Arc::new(HistoryGateway::new(vec![noise_tx(2), noise_tx(3)]));
        let engine = CorrelationEngine::new(
            Arc::clone(&gateway),
            REGISTRY,
            CorrelationConfig::for_testing(),
        );
        let handle = SubmitHandle {
            reference_id: reference.to_string(),
            origin_ledger_index: 1,
        };

        // The hook answers between the second and third poll.
        let writer = Arc::clone(&gateway);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1_500)).await;
            writer.append(response_tx(9, "acquire_success", reference, json!({})));
        });

        let start = tokio::time::Instant::now();
        let outcome = engine
            .watch(&handle, "acquire_success", "acquire_error", event_decoder)
            .await
            .unwrap();

        assert_eq!(outcome, WatchOutcome::Success(json!({})));
        assert_eq!(start.elapsed(), Duration::from_secs(2));
        // Poll 1 starts at the origin and drains the noise; later polls
        // carry the advanced cursor.
        assert_eq!(gateway.since_log(), vec![1, 3, 3]);
    }

    /// Two watches against separate gateways share nothing; one resolves
    /// while the other runs to its own deadline.
    #[tokio::test(start_paused = true)]
    async fn test_independent_watches_resolve_on_their_own_clocks() {
        let fast_gateway = Arc::new(MockLedgerGateway::default());
        let slow_gateway = Arc::new(MockLedgerGateway::default());
        let fast = CorrelationEngine::new(
            Arc::clone(&fast_gateway),
            REGISTRY,
            CorrelationConfig::for_testing(),
        );
        let slow = CorrelationEngine::new(
            Arc::clone(&slow_gateway),
            REGISTRY,
            CorrelationConfig::for_testing(),
        );

        let fast_action = SignedAction::new("acquire_lease", vec![]);
        let slow_action = SignedAction::new("acquire_lease", vec![]);
        let fast_handle = fast.submit(&fast_action).await.unwrap();
        let slow_handle = slow.submit(&slow_action).await.unwrap();

        fast_gateway.script(Ok(vec![response_tx(
            2,
            "acquire_success",
            &fast_action.reference_id,
            json!({"instance_name": "vm-1"}),
        )]));

        let start = tokio::time::Instant::now();
        let (fast_outcome, slow_outcome) = tokio::join!(
            fast.watch(&fast_handle, "acquire_success", "acquire_error", event_decoder),
            slow.watch_with_timeout(
                &slow_handle,
                "acquire_success",
                "acquire_error",
                Duration::from_secs(3),
                event_decoder,
            ),
        );

        assert_eq!(
            fast_outcome.unwrap(),
            WatchOutcome::Success(json!({"instance_name": "vm-1"}))
        );
        assert_eq!(slow_outcome.unwrap(), WatchOutcome::TimedOut);
        assert_eq!(start.elapsed(), Duration::from_secs(3));
        assert_eq!(fast_gateway.polls_served(), 1);
    }
}

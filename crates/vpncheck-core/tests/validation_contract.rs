//! Contract Test: Input Validation
//!
//! Constraints verified:
//! - Malformed addresses fail with InvalidAddress, naming the input
//! - An invalid address NEVER reaches the store (zero interactions)
//! - is_valid is exactly the disjunction of the v4 and v6 validators
//!
//! If this test fails, the reject-early boundary is broken.

mod common;

use std::sync::Arc;

use common::RecordingStore;
use vpncheck_core::traits::SessionStore;
use vpncheck_core::{ActiveSessionChecker, CheckConfig, Error, validator};

fn checker_over(store: &Arc<RecordingStore>) -> ActiveSessionChecker {
    ActiveSessionChecker::new(Arc::clone(store) as Arc<dyn SessionStore>, CheckConfig::default())
}

const INVALID_INPUTS: &[&str] = &[
    "",
    "not-an-ip",
    "256.1.1.1",
    "1.2.3",
    "1.2.3.4.5",
    "01.2.3.4",
    "1.2.3.04",
    "1.2.3.+4",
    "10.0.0.5 ",
    "a.b.c.d",
];

#[tokio::test]
async fn invalid_addresses_are_rejected_without_store_interaction() {
    let store = Arc::new(RecordingStore::connected_with_keys(["active_vpn:10.0.0.5"]));
    let checker = checker_over(&store);

    for input in INVALID_INPUTS {
        let err = checker
            .is_ip_active(input)
            .await
            .expect_err("invalid input must be rejected");

        match err {
            Error::InvalidAddress { ip } => assert_eq!(ip, *input),
            other => panic!("expected InvalidAddress for {:?}, got {:?}", input, other),
        }
    }

    assert_eq!(
        store.exists_call_count(),
        0,
        "an invalid address must never reach the store"
    );
    assert!(store.queried_keys().is_empty());
}

#[tokio::test]
async fn valid_addresses_reach_the_store() {
    let store = Arc::new(RecordingStore::connected_with_keys(
        Vec::<String>::new(),
    ));
    let checker = checker_over(&store);

    // One valid v4, one strict v6, one address the loose heuristic accepts
    for input in ["192.168.1.1", "::1", "fe80:1"] {
        let active = checker.is_ip_active(input).await.unwrap();
        assert!(!active);
    }

    assert_eq!(store.exists_call_count(), 3);
}

#[test]
fn is_valid_equals_v4_or_v6_for_all_sampled_strings() {
    let samples = [
        "192.168.1.1",
        "256.1.1.1",
        "1.2.3",
        "01.2.3.4",
        "255.255.255.255",
        "::1",
        "2001:db8::1",
        "fe80:1",
        "not-an-ip",
        "",
        ":",
        "1.2.3.4:8080",
        "....",
        " ",
    ];

    for s in samples {
        assert_eq!(
            validator::is_valid(s),
            validator::is_valid_ipv4(s) || validator::is_valid_ipv6(s),
            "disjunction property violated for {:?}",
            s
        );
    }
}

#[test]
fn documented_validator_truth_table() {
    assert!(validator::is_valid_ipv4("192.168.1.1"));
    assert!(!validator::is_valid_ipv4("256.1.1.1"));
    assert!(!validator::is_valid_ipv4("1.2.3"));
    assert!(!validator::is_valid_ipv4("01.2.3.4"));

    assert!(validator::is_valid_ipv6("::1"));
    assert!(!validator::is_valid_ipv6("not-an-ip"));
    // Known looseness of the structural heuristic
    assert!(validator::is_valid_ipv6("fe80:1"));
}

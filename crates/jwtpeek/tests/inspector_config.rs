//! Inspector configuration: leeway and missing-expiry policy

mod common;

use common::{TokenBuilder, standard_token};
use jwtpeek::*;
use serde_json::json;

const NOW: i64 = 1_700_000_000;

#[test]
fn test_default_inspector_is_exact() {
    let inspector = Inspector::new();
    assert_eq!(inspector.leeway(), 0);
    assert_eq!(inspector.missing_expiry(), MissingExpiry::Reject);

    let token = standard_token(NOW, NOW - 10);
    assert_eq!(inspector.inspect_at(token.as_str(), NOW - 1), Outcome::Valid);
    assert_eq!(
        inspector.inspect_at(token.as_str(), NOW),
        Outcome::Expired {
            expired_at: NOW,
            now: NOW
        }
    );
}

#[test]
fn test_leeway_on_expiry() {
    let inspector = Inspector::builder().leeway(60).build().unwrap();
    let token = standard_token(NOW - 30, NOW - 3600);

    assert_eq!(inspector.inspect_at(token.as_str(), NOW), Outcome::Valid);
    assert!(!inspector.inspect_at(token.as_str(), NOW + 30).is_valid());
}

#[test]
fn test_leeway_on_issued_at() {
    let inspector = Inspector::builder().leeway(60).build().unwrap();
    let token = standard_token(NOW + 3600, NOW + 30);

    assert_eq!(inspector.inspect_at(token.as_str(), NOW), Outcome::Valid);
    assert_eq!(
        inspector.inspect_at(token.as_str(), NOW - 31),
        Outcome::NotYetValid {
            issued_at: NOW + 30,
            now: NOW - 31
        }
    );
}

#[test]
fn test_leeway_bound() {
    assert!(Inspector::builder().leeway(300).build().is_ok());
    assert_eq!(
        Inspector::builder().leeway(3600).build().unwrap_err(),
        Error::LeewayTooLarge {
            value: 3600,
            max: 300
        }
    );
}

#[test]
fn test_missing_expiry_never_expires() {
    let inspector = Inspector::builder()
        .missing_expiry(MissingExpiry::NeverExpires)
        .build()
        .unwrap();
    let token = TokenBuilder::new().claim("sub", json!("user")).build();

    assert_eq!(inspector.inspect_at(token.as_str(), NOW), Outcome::Valid);
    assert_eq!(
        Inspector::new().inspect_at(token.as_str(), NOW),
        Outcome::MissingExpiry
    );
}

#[test]
fn test_missing_expiry_still_checks_issued_at() {
    let inspector = Inspector::builder()
        .missing_expiry(MissingExpiry::NeverExpires)
        .build()
        .unwrap();
    let token = TokenBuilder::new().issued_at(NOW + 10).build();

    assert!(matches!(
        inspector.inspect_at(token.as_str(), NOW),
        Outcome::NotYetValid { .. }
    ));
}

#[test]
fn test_into_result_carries_leeway() {
    let inspector = Inspector::builder().leeway(10).build().unwrap();
    let token = standard_token(NOW - 100, NOW - 200);

    assert_eq!(
        inspector
            .inspect_at(token.as_str(), NOW)
            .into_result(inspector.leeway()),
        Err(Error::TokenExpired {
            expired_at: NOW - 100,
            now: NOW,
            leeway: 10
        })
    );
}

#[test]
fn test_bearer_header_to_outcome() {
    let token = standard_token(NOW + 3600, NOW);
    let header = format!("Bearer {token}");

    let outcome = Inspector::new().inspect_at(bearer_token(&header), NOW);
    assert_eq!(outcome, Outcome::Valid);

    let outcome = Inspector::new().inspect_at(bearer_token("Basic abc"), NOW);
    assert_eq!(outcome, Outcome::Malformed(Error::TokenMissing));
}

#[test]
fn test_inspector_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Inspector>();

    let inspector = Inspector::new();
    let token = standard_token(NOW + 3600, NOW);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let token = token.clone();
            std::thread::spawn(move || inspector.inspect_at(token.as_str(), NOW))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Outcome::Valid);
    }
}

//! Unit tests for the access token signer

use chrono::{Duration, Utc};

use super::{create_test_signer, TEST_SECRET};
use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenSigner, TokenSignerConfig};

fn claims_expiring_at(exp: i64) -> Claims {
    let mut claims = Claims::new_access_token("alice", Duration::minutes(15), JWT_ISSUER, JWT_AUDIENCE);
    claims.iat = exp - 15 * 60;
    claims.exp = exp;
    claims
}

#[test]
fn test_issue_and_verify() {
    let signer = create_test_signer();

    let token = signer.issue("alice").unwrap();
    let claims = signer.verify(&token).expect("token should verify");

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert_eq!(claims.exp - claims.iat, 15 * 60);
}

#[test]
fn test_tokens_issued_back_to_back_differ() {
    let signer = create_test_signer();

    let first = signer.issue("alice").unwrap();
    let second = signer.issue("alice").unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_issue_rejects_blank_subject() {
    let signer = create_test_signer();

    assert!(matches!(
        signer.issue("  "),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_malformed_tokens_fail_closed() {
    let signer = create_test_signer();

    for garbage in ["", "this.is.not.a.jwt", "abc", "a.b", "🦀.🦀.🦀"] {
        assert!(signer.verify(garbage).is_none(), "accepted {:?}", garbage);
        assert_eq!(signer.validate(garbage), Err(TokenError::InvalidTokenFormat));
    }
}

#[test]
fn test_signature_mismatch_is_rejected() {
    let signer = create_test_signer();
    let other = TokenSigner::new(TokenSignerConfig::new(
        "another-secret-that-is-also-32-bytes-long",
        Duration::minutes(15),
    ))
    .unwrap();

    let token = other.issue("alice").unwrap();

    assert!(signer.verify(&token).is_none());
    assert_eq!(signer.validate(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_tampered_payload_is_rejected() {
    let signer = create_test_signer();
    let token = signer.issue("alice").unwrap();
    let forged_payload = signer
        .issue("mallory")
        .unwrap()
        .split('.')
        .nth(1)
        .unwrap()
        .to_string();

    let parts: Vec<&str> = token.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert!(signer.verify(&forged).is_none());
}

#[test]
fn test_expired_token_is_rejected() {
    let signer = create_test_signer();
    let token = signer
        .encode_jwt(&claims_expiring_at(Utc::now().timestamp() - 1))
        .unwrap();

    assert!(signer.verify(&token).is_none());
    assert_eq!(signer.validate(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_token_valid_up_to_its_expiry() {
    let signer = create_test_signer();
    let token = signer
        .encode_jwt(&claims_expiring_at(Utc::now().timestamp() + 2))
        .unwrap();

    assert!(signer.verify(&token).is_some());
}

#[test]
fn test_wrong_issuer_or_audience_is_rejected() {
    let signer = create_test_signer();

    let mut claims = claims_expiring_at(Utc::now().timestamp() + 600);
    claims.iss = "someone-else".to_string();
    let token = signer.encode_jwt(&claims).unwrap();
    assert!(signer.verify(&token).is_none());

    let mut claims = claims_expiring_at(Utc::now().timestamp() + 600);
    claims.aud = "another-api".to_string();
    let token = signer.encode_jwt(&claims).unwrap();
    assert!(signer.verify(&token).is_none());
}

#[test]
fn test_weak_secret_is_rejected() {
    let config = TokenSignerConfig::new("short", Duration::minutes(15));

    assert!(matches!(
        TokenSigner::new(config),
        Err(DomainError::Token(TokenError::WeakSigningKey { min_bytes: 32 }))
    ));
}

#[test]
fn test_non_positive_lifetime_is_rejected() {
    let config = TokenSignerConfig::new(TEST_SECRET, Duration::zero());

    assert!(matches!(
        TokenSigner::new(config),
        Err(DomainError::Validation { .. })
    ));
}

#[test]
fn test_oversized_lifetime_is_rejected() {
    for lifetime in [Duration::days(365 * 10 + 1), Duration::max_value()] {
        let config = TokenSignerConfig::new(TEST_SECRET, lifetime);
        assert!(matches!(
            TokenSigner::new(config),
            Err(DomainError::Validation { .. })
        ));
    }
}

#[test]
fn test_longest_accepted_lifetime_issues() {
    let signer = TokenSigner::new(TokenSignerConfig::new(
        TEST_SECRET,
        Duration::days(365 * 10),
    ))
    .unwrap();

    let token = signer.issue("alice").unwrap();

    assert_eq!(signer.verify(&token).unwrap().sub, "alice");
}

#[test]
fn test_access_token_lifetime() {
    let signer = create_test_signer();
    assert_eq!(signer.access_token_lifetime(), Duration::minutes(15));
}

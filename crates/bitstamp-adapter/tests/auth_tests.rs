/*
[INPUT]:  Test credentials and clock readings
[OUTPUT]: Test results for signing and nonce generation
[POS]:    Integration tests - authentication
[UPDATE]: When signing or nonce rules change
*/

mod common;

use std::sync::Arc;

use bitstamp_adapter::auth::clock_nonce;
use bitstamp_adapter::{NonceGenerator, RequestSigner};
use common::{TEST_API_KEY, TEST_CUSTOMER_ID, setup_mock_server, test_credentials};
use hmac::{Hmac, Mac};
use sha2::Sha256;

#[test]
fn test_signature_matches_reference_hmac() {
    let signer = RequestSigner::new(test_credentials());
    let nonce = 17_000_000_000_000_000u64;

    let mut mac = Hmac::<Sha256>::new_from_slice(b"test-api-secret").unwrap();
    mac.update(format!("{nonce}{TEST_CUSTOMER_ID}{TEST_API_KEY}").as_bytes());
    let expected = hex::encode_upper(mac.finalize().into_bytes());

    assert_eq!(signer.sign(nonce), expected);
}

#[test]
fn test_signature_is_uppercase_hex() {
    let signer = RequestSigner::new(test_credentials());
    let signature = signer.sign(clock_nonce());

    assert_eq!(signature.len(), 64);
    assert_eq!(signature, signature.to_uppercase());
    assert!(hex::decode(&signature).is_ok());
}

#[test]
fn test_nonce_tracks_wall_clock() {
    let generator = NonceGenerator::new();
    let before = clock_nonce();
    let nonce = generator.next();
    let after = clock_nonce();

    assert!(nonce >= before);
    assert!(nonce <= after.max(before + 1));
}

#[test]
fn test_nonce_survives_clock_going_backwards() {
    let generator = NonceGenerator::new();
    let first = generator.next_at(2_000_000);
    let second = generator.next_at(1_000_000);

    assert!(second > first);
}

#[tokio::test]
async fn test_shared_generator_across_tasks() {
    let generator = Arc::new(NonceGenerator::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            tokio::spawn(async move { (0..100).map(|_| generator.next()).collect::<Vec<_>>() })
        })
        .collect();

    let mut all = Vec::new();
    for handle in handles {
        all.extend(handle.await.unwrap());
    }
    let total = all.len();
    all.sort_unstable();
    all.dedup();

    assert_eq!(all.len(), total);
}

#[tokio::test]
async fn test_private_client_exposes_credentials_without_secret() {
    let server = setup_mock_server().await;
    let client = common::private_client(&server);

    assert_eq!(client.credentials().api_key(), TEST_API_KEY);
    assert!(!format!("{:?}", client.credentials()).contains("test-api-secret"));
}

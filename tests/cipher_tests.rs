//! End-to-end tests for the mnemonic cipher: payload format, failure
//! classification and the async entry points.

use seedseal::cipher::{self, EncryptedPayload, ALGORITHM, FORMAT_VERSION};
use seedseal::crypto::{self, DEFAULT_ITERATIONS, SALT_LEN};
use seedseal::errors::SeedSealError;

const MNEMONIC: &str =
    "abandon ability able about above absent absorb abstract absurd abuse access accident";
const PASSWORD: &str = "Tr0ub4dor&3xyz!";

/// Build a payload by hand so tests can control the iteration count.
fn payload_with_iterations(plaintext: &str, password: &str, iterations: u32) -> String {
    let salt = crypto::generate_salt();
    let iv = crypto::generate_nonce();
    let key = crypto::derive_key(password.as_bytes(), &salt, iterations).unwrap();
    let ciphertext = crypto::encrypt(&key, &iv, plaintext.as_bytes()).unwrap();
    EncryptedPayload::new(&salt, &iv, ciphertext, iterations)
        .to_json()
        .unwrap()
}

fn reserialize(payload: &str, edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(payload).unwrap();
    edit(&mut value);
    value.to_string()
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn twelve_word_mnemonic_roundtrip() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let recovered = cipher::decrypt_blocking(&payload, PASSWORD).unwrap();
    assert_eq!(recovered.as_str(), MNEMONIC);
}

#[test]
fn unicode_plaintext_roundtrip() {
    let text = "ábaco abdomen abeja abierto abogado abono aborto abrazo abrir abuelo abuso acabar";
    let payload = cipher::encrypt_blocking(text, "contraseña-Larga-1").unwrap();
    let recovered = cipher::decrypt_blocking(&payload, "contraseña-Larga-1").unwrap();
    assert_eq!(recovered.as_str(), text);
}

#[test]
fn payload_has_expected_shape() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let parsed = EncryptedPayload::parse(&payload).unwrap();

    assert_eq!(parsed.salt.len(), SALT_LEN);
    assert_eq!(parsed.iv.len(), 12);
    assert_eq!(parsed.ciphertext.len(), MNEMONIC.len() + 16);
    assert_eq!(parsed.version, FORMAT_VERSION);
    assert_eq!(parsed.algorithm, ALGORITHM);
    assert_eq!(parsed.iterations, DEFAULT_ITERATIONS);

    // Key order is part of the format.
    let salt = payload.find("\"salt\"").unwrap();
    let iv = payload.find("\"iv\"").unwrap();
    let ct = payload.find("\"ciphertext\"").unwrap();
    let version = payload.find("\"version\"").unwrap();
    let algorithm = payload.find("\"algorithm\"").unwrap();
    let iterations = payload.find("\"iterations\"").unwrap();
    assert!(salt < iv && iv < ct && ct < version && version < algorithm && algorithm < iterations);
}

#[test]
fn encryption_is_not_deterministic() {
    let a = EncryptedPayload::parse(&cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap()).unwrap();
    let b = EncryptedPayload::parse(&cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap()).unwrap();

    assert_ne!(a.salt, b.salt);
    assert_ne!(a.iv, b.iv);
    assert_ne!(a.ciphertext, b.ciphertext);
}

#[test]
fn blank_inputs_are_rejected_on_encrypt() {
    assert!(matches!(
        cipher::encrypt_blocking("   ", PASSWORD),
        Err(SeedSealError::CryptoOperation)
    ));
    assert!(matches!(
        cipher::encrypt_blocking(MNEMONIC, ""),
        Err(SeedSealError::CryptoOperation)
    ));
}

// ---------------------------------------------------------------------------
// Failure classification
// ---------------------------------------------------------------------------

#[test]
fn wrong_password_is_decryption_failed() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let result = cipher::decrypt_blocking(&payload, "wrong-password");
    assert!(matches!(result, Err(SeedSealError::DecryptionFailed)));
}

#[test]
fn flipped_ciphertext_bit_is_decryption_failed() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let tampered = reserialize(&payload, |v| {
        let first = v["ciphertext"][0].as_u64().unwrap();
        v["ciphertext"][0] = serde_json::json!(first ^ 0x01);
    });

    let result = cipher::decrypt_blocking(&tampered, PASSWORD);
    assert!(matches!(result, Err(SeedSealError::DecryptionFailed)));
}

#[test]
fn any_flipped_bit_is_decryption_failed() {
    let payload = payload_with_iterations(MNEMONIC, PASSWORD, 1_000);
    let len = EncryptedPayload::parse(&payload).unwrap().ciphertext.len();

    // Every byte position, one bit each, rotating through the bit index.
    for pos in 0..len {
        let bit = 1u64 << (pos % 8);
        let tampered = reserialize(&payload, |v| {
            let byte = v["ciphertext"][pos].as_u64().unwrap();
            v["ciphertext"][pos] = serde_json::json!(byte ^ bit);
        });
        assert!(
            matches!(
                cipher::decrypt_blocking(&tampered, PASSWORD),
                Err(SeedSealError::DecryptionFailed)
            ),
            "flip at byte {pos} went unnoticed"
        );
    }
}

#[test]
fn swapped_salt_is_decryption_failed() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let tampered = reserialize(&payload, |v| {
        v["salt"] = serde_json::json!(vec![7u8; SALT_LEN]);
    });

    let result = cipher::decrypt_blocking(&tampered, PASSWORD);
    assert!(matches!(result, Err(SeedSealError::DecryptionFailed)));
}

#[test]
fn other_version_is_unsupported() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let future = reserialize(&payload, |v| v["version"] = serde_json::json!("2.0"));

    match cipher::decrypt_blocking(&future, PASSWORD) {
        Err(SeedSealError::UnsupportedFormat { version, .. }) => assert_eq!(version, "2.0"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn other_algorithm_is_unsupported() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let other = reserialize(&payload, |v| {
        v["algorithm"] = serde_json::json!("AES-CBC-PBKDF2")
    });

    assert!(matches!(
        cipher::decrypt_blocking(&other, PASSWORD),
        Err(SeedSealError::UnsupportedFormat { .. })
    ));
}

#[test]
fn future_version_with_other_encoding_is_unsupported() {
    let base64_fields = r#"{"salt":"AAAAAAAAAAAAAAAAAAAAAA==","iv":"AAAAAAAAAAAAAAAA","ciphertext":"AAAAAAAAAAAAAAAAAAAAAA==","version":"2.0","algorithm":"AES-GCM-PBKDF2","iterations":100000}"#;
    match cipher::decrypt_blocking(base64_fields, "pw") {
        Err(SeedSealError::UnsupportedFormat { version, .. }) => assert_eq!(version, "2.0"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }

    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let numeric = reserialize(&payload, |v| v["version"] = serde_json::json!(2));
    assert!(matches!(
        cipher::decrypt_blocking(&numeric, PASSWORD),
        Err(SeedSealError::UnsupportedFormat { .. })
    ));
    assert!(!cipher::is_supported(&numeric));
}

#[test]
fn malformed_payloads_are_format_errors() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let missing_salt = reserialize(&payload, |v| {
        v.as_object_mut().unwrap().remove("salt");
    });
    let byte_out_of_range = reserialize(&payload, |v| v["iv"][0] = serde_json::json!(300));
    let short_iv = reserialize(&payload, |v| v["iv"] = serde_json::json!([1, 2, 3]));

    for bad in [
        "not json",
        "{}",
        "[]",
        missing_salt.as_str(),
        byte_out_of_range.as_str(),
        short_iv.as_str(),
    ] {
        let result = cipher::decrypt_blocking(bad, PASSWORD);
        assert!(
            matches!(result, Err(SeedSealError::Format(_))),
            "{bad}: {result:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Iteration count
// ---------------------------------------------------------------------------

#[test]
fn iterations_are_read_from_the_payload() {
    let payload = payload_with_iterations(MNEMONIC, PASSWORD, 1_000);
    assert_eq!(cipher::inspect(&payload).unwrap().iterations, 1_000);

    let recovered = cipher::decrypt_blocking(&payload, PASSWORD).unwrap();
    assert_eq!(recovered.as_str(), MNEMONIC);
}

#[test]
fn missing_iterations_defaults_to_current_count() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let legacy = reserialize(&payload, |v| {
        v.as_object_mut().unwrap().remove("iterations");
    });

    let recovered = cipher::decrypt_blocking(&legacy, PASSWORD).unwrap();
    assert_eq!(recovered.as_str(), MNEMONIC);
}

#[test]
fn zero_iterations_are_rejected() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let zero = reserialize(&payload, |v| v["iterations"] = serde_json::json!(0));

    assert!(matches!(
        cipher::decrypt_blocking(&zero, PASSWORD),
        Err(SeedSealError::Format(_))
    ));
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

#[test]
fn inspect_reports_metadata_without_password() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let info = cipher::inspect(&payload).unwrap();

    assert_eq!(info.version, FORMAT_VERSION);
    assert_eq!(info.algorithm, ALGORITHM);
    assert_eq!(info.iterations, DEFAULT_ITERATIONS);
    assert_eq!(info.data_size, MNEMONIC.len() + 16);
    assert!(info.supported);
    assert!(cipher::is_supported(&payload));
}

#[test]
fn inspect_describes_unsupported_payloads() {
    let payload = cipher::encrypt_blocking(MNEMONIC, PASSWORD).unwrap();
    let future = reserialize(&payload, |v| v["version"] = serde_json::json!("2.0"));

    let info = cipher::inspect(&future).unwrap();
    assert!(!info.supported);
    assert!(!cipher::is_supported(&future));
    assert!(!cipher::is_supported("garbage"));
}

// ---------------------------------------------------------------------------
// Async entry points
// ---------------------------------------------------------------------------

#[tokio::test]
async fn async_roundtrip() {
    let payload = cipher::encrypt(MNEMONIC, PASSWORD).await.unwrap();
    let recovered = cipher::decrypt(&payload, PASSWORD).await.unwrap();
    assert_eq!(recovered.as_str(), MNEMONIC);
}

#[tokio::test]
async fn async_wrong_password_fails() {
    let payload = cipher::encrypt(MNEMONIC, PASSWORD).await.unwrap();
    let result = cipher::decrypt(&payload, "wrong-password").await;
    assert!(matches!(result, Err(SeedSealError::DecryptionFailed)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_operations_do_not_interfere() {
    let (a, b) = tokio::join!(
        cipher::encrypt(MNEMONIC, "first-Password-1"),
        cipher::encrypt(MNEMONIC, "second-Password-2"),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(
        cipher::decrypt(&a, "first-Password-1").await.unwrap().as_str(),
        MNEMONIC
    );
    assert_eq!(
        cipher::decrypt(&b, "second-Password-2").await.unwrap().as_str(),
        MNEMONIC
    );
}

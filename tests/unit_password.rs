use blogdeck::blogdeck_core::password::MIN_COST;
use blogdeck::blogdeck_core::{PasswordHasher, hash_password_with_cost, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hash_password_with_cost(password, MIN_COST);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "correctpassword";
    let hash = hash_password_with_cost(password, MIN_COST).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let hash = hash_password_with_cost("correctpassword", MIN_COST).unwrap();

    let result = verify_password("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "samepassword";
    let hash1 = hash_password_with_cost(password, MIN_COST).unwrap();
    let hash2 = hash_password_with_cost(password, MIN_COST).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[tokio::test]
async fn test_hasher_records_its_cost() {
    let hasher = PasswordHasher::new(MIN_COST);
    let hash = hasher.hash("pw1").await.unwrap();

    assert!(hash.starts_with("$2b$04$"));
    assert!(hasher.verify("pw1", &hash).await.unwrap());
    assert!(!hasher.verify("pw2", &hash).await.unwrap());
}

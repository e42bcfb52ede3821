use si_crypto::ReviewerKeyPair;
use si_results::{RecipientKey, RecipientRegistry, ResultsError};

fn key() -> RecipientKey {
    let keypair = ReviewerKeyPair::generate();
    RecipientKey {
        public_key: keypair.public_bytes().to_vec(),
        fingerprint: keypair.fingerprint(),
    }
}

#[tokio::test]
async fn enrolled_keys_are_returned() {
    let registry = RecipientRegistry::new();
    registry.set_org_keys("openstax", vec![key(), key()]).await;
    registry.add_org_key("openstax", key()).await;

    let keys = registry.org_keys("openstax").await.unwrap();
    assert_eq!(keys.len(), 3);
}

#[tokio::test]
async fn missing_org_is_a_configuration_error() {
    let registry = RecipientRegistry::new();
    let result = registry.org_keys("nowhere").await;
    assert!(matches!(result, Err(ResultsError::Config(_))));
}

#[tokio::test]
async fn empty_key_set_is_a_configuration_error() {
    let registry = RecipientRegistry::new();
    registry.set_org_keys("openstax", Vec::new()).await;

    let result = registry.org_keys("openstax").await;
    assert!(matches!(result, Err(ResultsError::Config(_))));
}

#[tokio::test]
async fn removed_org_no_longer_resolves() {
    let registry = RecipientRegistry::new();
    registry.set_org_keys("openstax", vec![key()]).await;

    let removed = registry.remove_org("openstax").await;
    assert_eq!(removed.map(|keys| keys.len()), Some(1));
    assert!(registry.org_keys("openstax").await.is_err());
}

#[tokio::test]
async fn registry_is_shared_across_clones() {
    let registry = RecipientRegistry::new();
    let clone = registry.clone();

    registry.set_org_keys("openstax", vec![key()]).await;
    assert_eq!(clone.org_keys("openstax").await.unwrap().len(), 1);
}

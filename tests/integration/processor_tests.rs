//! Processor behavior against the in-memory store

use termbatch::{
    BranchPath, ConceptId, InactivationProcessor, MissingConceptPolicy, ServiceError,
};

use crate::common::{InMemoryStore, outdated_request, plain_request, seeded_concept};

fn branch() -> BranchPath {
    BranchPath::new("MAIN/PROJECT/TASK-1").unwrap()
}

#[tokio::test]
async fn inactivates_matched_concepts() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    let processor = InactivationProcessor::new(&store);

    let outcome = processor
        .inactivate(&branch(), &[outdated_request(100, 200)])
        .await
        .unwrap();

    assert_eq!(outcome.updated, vec![ConceptId::new(100)]);
    assert!(outcome.skipped.is_empty());

    let concept = store.get(ConceptId::new(100)).unwrap();
    assert!(!concept.active);
    assert_eq!(concept.inactivation_indicator.as_deref(), Some("OUTDATED"));
    assert_eq!(
        concept.association_targets,
        outdated_request(100, 200).associations
    );
    // Server-side fields survive the round trip
    assert!(concept.extra.contains_key("moduleId"));
}

#[tokio::test]
async fn metadata_is_overwritten_not_merged() {
    let store = InMemoryStore::new();
    let mut existing = seeded_concept(100);
    existing.inactivation_indicator = Some("DUPLICATE".to_string());
    existing.association_targets = outdated_request(100, 999).associations;
    store.seed(existing);
    let processor = InactivationProcessor::new(&store);

    processor
        .inactivate(&branch(), &[outdated_request(100, 200)])
        .await
        .unwrap();

    let concept = store.get(ConceptId::new(100)).unwrap();
    assert_eq!(concept.inactivation_indicator.as_deref(), Some("OUTDATED"));
    assert_eq!(
        concept.association_targets,
        outdated_request(100, 200).associations
    );
}

#[tokio::test]
async fn unmatched_ids_are_skipped_without_mutation() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    let processor = InactivationProcessor::new(&store);

    let outcome = processor
        .inactivate(
            &branch(),
            &[outdated_request(100, 200), outdated_request(300, 400)],
        )
        .await
        .unwrap();

    assert_eq!(outcome.updated, vec![ConceptId::new(100)]);
    assert_eq!(outcome.skipped, vec![ConceptId::new(300)]);
    assert!(store.get(ConceptId::new(300)).is_none());
    assert!(!store.get(ConceptId::new(100)).unwrap().active);
}

#[tokio::test]
async fn missing_id_with_fail_policy_aborts_before_submit() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    let processor =
        InactivationProcessor::new(&store).with_missing_policy(MissingConceptPolicy::Fail);

    let err = processor
        .inactivate(
            &branch(),
            &[outdated_request(100, 200), outdated_request(300, 400)],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(err.to_string().contains("300"));
    assert_eq!(store.submit_calls(), 0);
    // Concept 100 untouched
    assert!(store.get(ConceptId::new(100)).unwrap().active);
}

#[tokio::test]
async fn fully_unmatched_batch_succeeds_without_submit() {
    let store = InMemoryStore::new();
    let processor = InactivationProcessor::new(&store);

    let outcome = processor
        .inactivate(&branch(), &[outdated_request(300, 400)])
        .await
        .unwrap();

    assert!(outcome.updated.is_empty());
    assert_eq!(outcome.skipped, vec![ConceptId::new(300)]);
    assert_eq!(store.submit_calls(), 0);
}

#[tokio::test]
async fn reapplying_a_batch_is_a_no_op_in_effect() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    let processor = InactivationProcessor::new(&store);
    let batch = [outdated_request(100, 200)];

    processor.inactivate(&branch(), &batch).await.unwrap();
    let after_first = store.snapshot();

    processor.inactivate(&branch(), &batch).await.unwrap();
    assert_eq!(store.snapshot(), after_first);
}

#[tokio::test]
async fn submit_failure_propagates_and_leaves_store_untouched() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    store.fail_next_submit();
    let before = store.snapshot();
    let processor = InactivationProcessor::new(&store);

    let err = processor
        .inactivate(&branch(), &[outdated_request(100, 200)])
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Store { status: 500, .. }));
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn duplicate_ids_rejected_before_any_store_call() {
    let store = InMemoryStore::new();
    store.seed(seeded_concept(100));
    let processor = InactivationProcessor::new(&store);

    let err = processor
        .inactivate(
            &branch(),
            &[outdated_request(100, 200), outdated_request(100, 300)],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(store.find_calls(), 0);
    assert_eq!(store.submit_calls(), 0);
}

#[tokio::test]
async fn empty_indicator_rejected_before_any_store_call() {
    let store = InMemoryStore::new();
    let processor = InactivationProcessor::new(&store);

    let err = processor
        .inactivate(&branch(), &[plain_request(100, "")])
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(store.find_calls(), 0);
}

#[tokio::test]
async fn empty_batch_rejected() {
    let store = InMemoryStore::new();
    let processor = InactivationProcessor::new(&store);

    let err = processor.inactivate(&branch(), &[]).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn requests_without_associations_clear_existing_targets() {
    let store = InMemoryStore::new();
    let mut existing = seeded_concept(100);
    existing.association_targets = outdated_request(100, 999).associations;
    store.seed(existing);
    let processor = InactivationProcessor::new(&store);

    processor
        .inactivate(&branch(), &[plain_request(100, "NONCONFORMANCE_TO_EDITORIAL_POLICY")])
        .await
        .unwrap();

    let concept = store.get(ConceptId::new(100)).unwrap();
    assert!(concept.association_targets.is_empty());
    assert_eq!(
        concept.inactivation_indicator.as_deref(),
        Some("NONCONFORMANCE_TO_EDITORIAL_POLICY")
    );
}

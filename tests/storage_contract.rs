//! Record Store Contract Tests
//!
//! Every assertion runs against each backend:
//! - create/get round trip
//! - update keeps id and creation time
//! - delete is permanent and reports whether anything was removed
//! - missing ids are a side-effect-free "not found"
//! - search is a case-insensitive (Unicode) title filter in id order
//! - ids are never reused

mod support;

use recordkeeper::records::{Priority, Status};
use support::{sample, sample_with, TestStore};

// =============================================================================
// Create / Read
// =============================================================================

/// A created record reads back as its input plus the assigned id/createdAt.
#[tokio::test]
async fn test_create_then_get_round_trip() {
    for TestStore { store, .. } in TestStore::all().await {
        let input = sample_with("Buy milk", Status::InProgress, Priority::High);
        let created = store.create_record(input.clone()).await.unwrap();

        assert_eq!(created.title, input.title);
        assert_eq!(created.description, input.description);
        assert_eq!(created.status, input.status);
        assert_eq!(created.priority, input.priority);

        let fetched = store.get_record(created.id).await.unwrap();
        assert_eq!(fetched, Some(created), "backend {}", store.backend_name());
    }
}

/// Lookup of an id that was never issued is "not found", not an error.
#[tokio::test]
async fn test_get_missing_is_none() {
    for TestStore { store, .. } in TestStore::all().await {
        assert_eq!(store.get_record(404).await.unwrap(), None);
    }
}

/// An empty store lists nothing.
#[tokio::test]
async fn test_empty_listing() {
    for TestStore { store, .. } in TestStore::all().await {
        assert!(store.get_records().await.unwrap().is_empty());
    }
}

/// Listing is ordered by ascending id.
#[tokio::test]
async fn test_listing_ascending_by_id() {
    for TestStore { store, .. } in TestStore::all().await {
        for title in ["first", "second", "third"] {
            store.create_record(sample(title)).await.unwrap();
        }

        let records = store.get_records().await.unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }
}

// =============================================================================
// Update
// =============================================================================

/// Update replaces every mutable field and keeps id/createdAt.
#[tokio::test]
async fn test_update_preserves_identity() {
    for TestStore { store, .. } in TestStore::all().await {
        let original = store.create_record(sample("Draft")).await.unwrap();

        let replacement = sample_with("Final", Status::Done, Priority::Low);
        let updated = store
            .update_record(original.id, replacement.clone())
            .await
            .unwrap()
            .expect("record exists");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.description, replacement.description);
        assert_eq!(updated.status, Status::Done);
        assert_eq!(updated.priority, Priority::Low);

        let fetched = store.get_record(original.id).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }
}

/// Updating a missing id creates nothing and touches nothing.
#[tokio::test]
async fn test_update_missing_has_no_side_effects() {
    for TestStore { store, .. } in TestStore::all().await {
        let kept = store.create_record(sample("Keep me")).await.unwrap();

        let result = store
            .update_record(kept.id + 100, sample("Ghost"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.get_records().await.unwrap(), vec![kept]);
    }
}

// =============================================================================
// Delete
// =============================================================================

/// Deleting an existing id returns true; it is then gone.
#[tokio::test]
async fn test_delete_existing() {
    for TestStore { store, .. } in TestStore::all().await {
        let record = store.create_record(sample("Temporary")).await.unwrap();

        assert!(store.delete_record(record.id).await.unwrap());
        assert_eq!(store.get_record(record.id).await.unwrap(), None);
        assert!(!store.delete_record(record.id).await.unwrap());
    }
}

/// Deleting a missing id is a reported no-op that leaves other records alone.
#[tokio::test]
async fn test_delete_missing_has_no_side_effects() {
    for TestStore { store, .. } in TestStore::all().await {
        let kept = store.create_record(sample("Keep me")).await.unwrap();

        assert!(!store.delete_record(kept.id + 1).await.unwrap());
        assert_eq!(store.get_records().await.unwrap(), vec![kept]);
    }
}

/// Ids strictly increase across creates, even after deletions.
#[tokio::test]
async fn test_ids_never_reused() {
    for TestStore { store, .. } in TestStore::all().await {
        let first = store.create_record(sample("one")).await.unwrap();
        assert_eq!(first.id, 1);
        assert!(store.delete_record(first.id).await.unwrap());

        let second = store.create_record(sample("two")).await.unwrap();
        assert_eq!(second.id, 2, "backend {}", store.backend_name());

        let third = store.create_record(sample("three")).await.unwrap();
        assert!(third.id > second.id);
    }
}

// =============================================================================
// Search
// =============================================================================

/// An empty or blank query is the same as listing everything.
#[tokio::test]
async fn test_blank_search_equals_listing() {
    for TestStore { store, .. } in TestStore::all().await {
        for title in ["Buy milk", "Clean house", "Walk dog"] {
            store.create_record(sample(title)).await.unwrap();
        }

        let all = store.get_records().await.unwrap();
        assert_eq!(store.search_records("").await.unwrap(), all);
        assert_eq!(store.search_records("   ").await.unwrap(), all);
    }
}

/// Search matches title substrings regardless of case.
#[tokio::test]
async fn test_search_is_case_insensitive() {
    for TestStore { store, .. } in TestStore::all().await {
        store.create_record(sample("Buy milk")).await.unwrap();
        store.create_record(sample("Clean house")).await.unwrap();

        let hits = store.search_records("MILK").await.unwrap();
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk"], "backend {}", store.backend_name());
    }
}

/// Search looks at titles only, not descriptions.
#[tokio::test]
async fn test_search_ignores_description() {
    for TestStore { store, .. } in TestStore::all().await {
        store
            .create_record(recordkeeper::records::NewRecord::new(
                "Groceries",
                "remember the milk",
            ))
            .await
            .unwrap();

        assert!(store.search_records("milk").await.unwrap().is_empty());
    }
}

/// Search results keep ascending id order.
#[tokio::test]
async fn test_search_results_ordered() {
    for TestStore { store, .. } in TestStore::all().await {
        for title in ["Task A", "Other", "task b", "TASK C"] {
            store.create_record(sample(title)).await.unwrap();
        }

        let hits = store.search_records("task").await.unwrap();
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Task A", "task b", "TASK C"]);
    }
}

/// LIKE wildcards in the query are matched literally.
#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    for TestStore { store, .. } in TestStore::all().await {
        store.create_record(sample("100% done")).await.unwrap();
        store.create_record(sample("1000 done")).await.unwrap();
        store.create_record(sample("snake_case")).await.unwrap();
        store.create_record(sample("snakeXcase")).await.unwrap();

        let hits = store.search_records("0%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "100% done");

        let hits = store.search_records("e_c").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "snake_case");
    }
}

/// Case folding covers non-ASCII letters as well.
#[tokio::test]
async fn test_search_folds_unicode_case() {
    for TestStore { store, .. } in TestStore::all().await {
        store.create_record(sample("Über café")).await.unwrap();
        store.create_record(sample("Cafeteria")).await.unwrap();

        for query in ["über", "CAFÉ", "üBER CAFÉ"] {
            let hits = store.search_records(query).await.unwrap();
            let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(
                titles,
                vec!["Über café"],
                "backend {} query {:?}",
                store.backend_name(),
                query
            );
        }
    }
}

/// Surrounding whitespace in a non-blank query is part of the needle.
#[tokio::test]
async fn test_search_keeps_query_whitespace() {
    for TestStore { store, .. } in TestStore::all().await {
        store.create_record(sample("Buy milk")).await.unwrap();
        store.create_record(sample("Buyer meeting")).await.unwrap();

        let hits = store.search_records("buy ").await.unwrap();
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk"], "backend {}", store.backend_name());

        let hits = store.search_records(" milk").await.unwrap();
        assert_eq!(hits.len(), 1);
    }
}

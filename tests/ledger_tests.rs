#![cfg(feature = "std")]

use std::sync::Arc;

use bttlship::{InMemoryScoreStore, ScoreLedger, ScoreRecord, ScoreStore, ServiceError, Submission};
use proptest::prelude::*;

fn ledger() -> (Arc<InMemoryScoreStore>, ScoreLedger<InMemoryScoreStore>) {
    let store = Arc::new(InMemoryScoreStore::new());
    (store.clone(), ScoreLedger::new(store))
}

#[tokio::test]
async fn test_best_time_wins() {
    let (_, ledger) = ledger();
    let post = Some("post-1");

    let stored = ledger.submit(post, "alice", Some(100.0), Some(90.0)).await.unwrap();
    assert_eq!(stored, ScoreRecord { time_ms: 100, accuracy: 90.0 });

    let stored = ledger.submit(post, "alice", Some(150.0), Some(99.0)).await.unwrap();
    assert_eq!(stored, ScoreRecord { time_ms: 100, accuracy: 90.0 });

    let stored = ledger.submit(post, "alice", Some(80.0), Some(70.0)).await.unwrap();
    assert_eq!(stored, ScoreRecord { time_ms: 80, accuracy: 70.0 });
}

#[tokio::test]
async fn test_equal_time_keeps_existing_accuracy() {
    let (_, ledger) = ledger();
    ledger.submit(Some("p"), "bob", Some(500.0), Some(40.0)).await.unwrap();
    let stored = ledger.submit(Some("p"), "bob", Some(500.0), Some(95.0)).await.unwrap();
    assert_eq!(stored.accuracy, 40.0);
}

#[tokio::test]
async fn test_scopes_are_independent() {
    let (store, ledger) = ledger();
    ledger.submit(Some("a"), "carol", Some(300.0), Some(50.0)).await.unwrap();
    ledger.submit(Some("b"), "carol", Some(900.0), Some(10.0)).await.unwrap();

    assert_eq!(store.count("a").await.unwrap(), 1);
    let in_b = store.ranked_entry("b", "carol").await.unwrap().unwrap();
    assert_eq!(in_b.record.time_ms, 900);
}

#[tokio::test]
async fn test_validation_errors_leave_store_untouched() {
    let (store, ledger) = ledger();

    let err = ledger.submit(None, "dave", Some(1.0), Some(1.0)).await.unwrap_err();
    assert_eq!(err, ServiceError::MissingField("postId"));
    let err = ledger.submit(Some("p"), "dave", None, Some(1.0)).await.unwrap_err();
    assert_eq!(err, ServiceError::MissingField("time"));
    let err = ledger.submit(Some("p"), "dave", Some(1.0), None).await.unwrap_err();
    assert_eq!(err, ServiceError::MissingField("accuracy"));

    let rejected = [
        (-5.0, 50.0),
        (12.5, 50.0),
        (f64::NAN, 50.0),
        (18446744073709551616.0, 50.0),
        (10.0, 101.0),
        (10.0, -1.0),
    ];
    for (time, accuracy) in rejected {
        let err = ledger
            .submit(Some("p"), "dave", Some(time), Some(accuracy))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidField { .. }), "{:?}", err);
    }

    assert_eq!(store.count("p").await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_reports_whether_it_wrote() {
    let store = InMemoryScoreStore::new();
    let first = ScoreRecord { time_ms: 300, accuracy: 60.0 };

    let s = store.submit_if_faster("p", "gina", 300, 60.0).await.unwrap();
    assert_eq!(s, Submission { record: first, replaced: true });

    // Same time and accuracy again is not a new best.
    let s = store.submit_if_faster("p", "gina", 300, 60.0).await.unwrap();
    assert_eq!(s, Submission { record: first, replaced: false });

    let s = store.submit_if_faster("p", "gina", 400, 90.0).await.unwrap();
    assert!(!s.replaced);

    let s = store.submit_if_faster("p", "gina", 299, 10.0).await.unwrap();
    assert!(s.replaced);
    assert_eq!(s.record.time_ms, 299);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_submissions_keep_minimum() {
    let (store, ledger) = ledger();
    let ledger = Arc::new(ledger);

    let mut tasks = Vec::new();
    for i in 0..64u64 {
        let ledger = ledger.clone();
        tasks.push(tokio::spawn(async move {
            let time = 1_000 + (i * 37) % 500;
            ledger
                .submit(Some("race"), "erin", Some(time as f64), Some(i as f64))
                .await
                .unwrap();
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    let best = (0..64u64).map(|i| 1_000 + (i * 37) % 500).min().unwrap();
    let winner = (0..64u64).find(|i| 1_000 + (i * 37) % 500 == best).unwrap();
    let stored = store.ranked_entry("race", "erin").await.unwrap().unwrap();
    assert_eq!(stored.record.time_ms, best);
    assert_eq!(stored.record.accuracy, winner as f64);
    assert_eq!(store.count("race").await.unwrap(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn stored_time_never_increases(subs in prop::collection::vec((1u64..10_000, 0u32..=100), 1..40)) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let (_, ledger) = ledger();
            let mut best: Option<(u64, f64)> = None;
            let mut previous = u64::MAX;
            for (time, accuracy) in subs {
                let stored = ledger
                    .submit(Some("prop"), "frank", Some(time as f64), Some(accuracy as f64))
                    .await
                    .unwrap();
                if best.map_or(true, |(t, _)| time < t) {
                    best = Some((time, accuracy as f64));
                }
                let (best_time, best_accuracy) = best.unwrap();
                assert!(stored.time_ms <= previous);
                assert_eq!(stored.time_ms, best_time);
                assert_eq!(stored.accuracy, best_accuracy);
                previous = stored.time_ms;
            }
        });
    }
}

//! Behavior tests for the sequential execution loop.

mod common;

use anyhow::anyhow;
use common::{Probe, runner};
use nemu_runner::Summary;
use parking_lot::Mutex;
use std::sync::Arc;

#[tokio::test]
async fn empty_queue_yields_empty_results() {
    let mut r = runner();
    let results = r.run().await;

    assert!(results.is_empty());
    assert_eq!(r.summary(), Summary::default());
}

#[tokio::test]
async fn results_align_with_enqueue_order() {
    let mut r = runner();
    r.add(|| async { Ok(Probe::new(1)) }, "first");
    r.add(|| async { Err(anyhow!("boom")) }, "second");
    r.add(|| async { Ok(Probe::new(3)) }, "third");

    let results = r.run().await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().map(|p| p.value), Some(1));
    assert!(results[1].is_none());
    assert_eq!(results[2].as_ref().map(|p| p.value), Some(3));
}

#[tokio::test]
async fn failure_is_isolated_and_counted() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let mut r = runner();

    r.add(|| async { Ok(Probe::new(1)) }, "passes");
    let sink = errors.clone();
    r.add(|| async { Err(anyhow!("gateway unreachable")) }, "fails")
        .on_error(move |error, index| {
            let message = error.to_string();
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().push((message, index));
            })
        });

    r.run().await;
    assert_eq!(
        errors.lock().as_slice(),
        &[("gateway unreachable".to_owned(), 1)]
    );

    let summary = r.summary();
    assert_eq!(
        summary,
        Summary {
            total: 2,
            passed: 1,
            failed: 1
        }
    );
    assert_eq!(
        summary.to_string(),
        "Completed 2 tests (1 passed, 1 failed)"
    );
}

#[tokio::test]
async fn finish_callback_receives_result_and_index() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut r = runner();

    let sink = log.clone();
    r.add(|| async { Ok(Probe::new(7)) }, "only")
        .on_finish(move |probe, index| {
            let entry = (probe.value, index);
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().push(entry);
            })
        });

    r.run().await;
    assert_eq!(log.lock().as_slice(), &[(7, 0)]);
}

#[tokio::test]
async fn streaming_chunks_arrive_in_emission_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut r = runner();

    let sink = log.clone();
    r.add(|| async { Ok(Probe::streaming(1, &["to", "kyo", "!"])) }, "stream")
        .on_streaming(move |chunk, index| {
            let entry = (chunk.to_owned(), index);
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().push(entry);
            })
        });

    let results = r.run().await;
    assert_eq!(
        log.lock().as_slice(),
        &[
            ("to".to_owned(), 0),
            ("kyo".to_owned(), 0),
            ("!".to_owned(), 0)
        ]
    );

    // The terminal result object holds the drained stream's slot.
    let probe = results[0].as_ref().expect("result");
    assert_eq!(probe.value, 1);
    assert!(probe.chunks.is_none());
}

#[tokio::test]
async fn stream_is_untouched_without_streaming_callback() {
    let mut r = runner();
    r.add(|| async { Ok(Probe::streaming(1, &["unseen"])) }, "stream");

    let results = r.run().await;
    let probe = results[0].as_ref().expect("result");
    assert!(probe.chunks.is_some());
}

#[tokio::test]
async fn entries_complete_strictly_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut r = runner();

    let sink = log.clone();
    let handle = r.add(
        || async { Ok(Probe::streaming(1, &["a", "b"])) },
        "first",
    );
    let finish_sink = sink.clone();
    let chunk_sink = sink.clone();
    handle
        .on_finish(move |_, _| {
            let sink = finish_sink.clone();
            Box::pin(async move {
                sink.lock().push("first finish".to_owned());
            })
        })
        .on_streaming(move |chunk, _| {
            let entry = format!("chunk {chunk}");
            let sink = chunk_sink.clone();
            Box::pin(async move {
                sink.lock().push(entry);
            })
        });

    let action_sink = log.clone();
    r.add(
        move || async move {
            action_sink.lock().push("second action".to_owned());
            Ok(Probe::new(2))
        },
        "second",
    );

    r.run().await;
    assert_eq!(
        log.lock().as_slice(),
        &[
            "first finish".to_owned(),
            "chunk a".to_owned(),
            "chunk b".to_owned(),
            "second action".to_owned()
        ]
    );
}

#[tokio::test]
async fn broken_stream_marks_entry_failed() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let errors = Arc::new(Mutex::new(Vec::new()));
    let mut r = runner();

    let chunk_sink = seen.clone();
    let error_sink = errors.clone();
    r.add(|| async { Ok(Probe::broken_stream(1)) }, "broken")
        .on_streaming(move |chunk, _| {
            let chunk = chunk.to_owned();
            let sink = chunk_sink.clone();
            Box::pin(async move {
                sink.lock().push(chunk);
            })
        })
        .on_error(move |error, index| {
            let entry = (error.to_string(), index);
            let sink = error_sink.clone();
            Box::pin(async move {
                sink.lock().push(entry);
            })
        });

    let results = r.run().await;
    assert!(results[0].is_none());
    assert_eq!(seen.lock().as_slice(), &["one".to_owned()]);
    assert_eq!(errors.lock().as_slice(), &[("stream cut".to_owned(), 0)]);
}

#[tokio::test]
async fn queue_resets_after_run() {
    let mut r = runner();
    r.add(|| async { Ok(Probe::new(1)) }, "first");
    r.run().await;
    assert_eq!(r.queued(), 0);

    r.add(|| async { Ok(Probe::new(2)) }, "second");
    let results = r.run().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].as_ref().map(|p| p.value), Some(2));
}

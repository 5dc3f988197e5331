//! End-to-end coverage of the estimate → admit → analyze → record flow.

use std::sync::Arc;
use std::time::Duration;

use ticket_triage::{
    AnalysisCoordinator, AnalysisOutcome, BatchPlanConfig, CharacterEstimator, CoordinatorConfig,
    KeywordAnalyzer, Priority, SlidingWindowConfig, SlidingWindowLimiter, UsageRecorder,
};
use tokio::time::advance;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ticket_triage=debug")
        .with_test_writer()
        .try_init();
}

fn build_coordinator(max_units: u64, window: Duration) -> AnalysisCoordinator {
    AnalysisCoordinator::new(
        Arc::new(CharacterEstimator::new()),
        Arc::new(SlidingWindowLimiter::new(
            SlidingWindowConfig::new()
                .with_max_units(max_units)
                .with_window(window),
        )),
        Arc::new(UsageRecorder::new()),
        Arc::new(KeywordAnalyzer::new()),
        CoordinatorConfig::new(),
    )
}

#[tokio::test(start_paused = true)]
async fn admit_reject_then_readmit_after_window() -> anyhow::Result<()> {
    init_logging();

    // Budget of 1000 tokens per minute. Response reservation tuned to zero so
    // the two requests cost exactly 700 and 400 tokens.
    let coordinator = AnalysisCoordinator::new(
        Arc::new(CharacterEstimator::new()),
        Arc::new(SlidingWindowLimiter::new(
            SlidingWindowConfig::new()
                .with_max_units(1000)
                .with_window(Duration::from_secs(60)),
        )),
        Arc::new(UsageRecorder::new()),
        Arc::new(KeywordAnalyzer::new()),
        CoordinatorConfig::new().with_response_reservation(0),
    );

    // 2800 chars -> 700 tokens.
    let first = "a".repeat(2800);
    // 1600 chars -> 400 tokens.
    let second = "b".repeat(1600);

    assert!(coordinator.analyze_one(&first).await?.is_admitted());

    // 700 + 400 = 1100 > 1000: rejected, with current usage attached.
    match coordinator.analyze_one(&second).await? {
        AnalysisOutcome::Rejected(stats) => {
            assert_eq!(stats.total_tokens, 700);
            assert_eq!(stats.requests, 1);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    // Once the window fully elapses, the retry is admitted.
    advance(Duration::from_secs(60)).await;
    assert!(coordinator.analyze_one(&second).await?.is_admitted());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn batched_submission_short_circuits_in_plan_order() -> anyhow::Result<()> {
    init_logging();

    // Room for exactly three requests (3 * ~501 tokens).
    let coordinator = build_coordinator(1600, Duration::from_secs(60));

    let texts: Vec<String> = vec![
        "vpn".into(),
        "urgent: checkout is broken".into(),
        "badge".into(),
        "mouse".into(),
        "urgent again".into(),
    ];
    let outcomes = coordinator.analyze_many(texts).await?;

    // Three admitted in input order, one rejected, the fifth never attempted.
    assert_eq!(outcomes.len(), 4);
    match &outcomes[1] {
        AnalysisOutcome::Admitted(analysis) => {
            assert_eq!(analysis.suggested_priority, Priority::High);
        }
        other => panic!("expected Admitted, got {other:?}"),
    }
    assert!(outcomes[..3].iter().all(AnalysisOutcome::is_admitted));
    assert!(outcomes[3].is_rejected());

    // Only the admitted requests show up in usage.
    let stats = coordinator.usage_stats(Duration::from_secs(3600));
    assert_eq!(stats.requests, 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn batch_caps_apply_to_submissions() -> anyhow::Result<()> {
    init_logging();

    let coordinator = AnalysisCoordinator::new(
        Arc::new(CharacterEstimator::new()),
        Arc::new(SlidingWindowLimiter::new(
            SlidingWindowConfig::new()
                .with_max_units(100_000)
                .with_window(Duration::from_secs(60)),
        )),
        Arc::new(UsageRecorder::new()),
        Arc::new(KeywordAnalyzer::new()),
        CoordinatorConfig::new().with_batch(
            BatchPlanConfig::new()
                .with_max_batch_size(2)
                .with_max_tokens_per_batch(50),
        ),
    );

    // Batching regroups but never reorders or drops; all six come back
    // admitted, in input order, regardless of how the plan was cut.
    let texts: Vec<String> = (0..6).map(|i| format!("ticket number {i}")).collect();
    let outcomes = coordinator.analyze_many(texts).await?;

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes.iter().all(AnalysisOutcome::is_admitted));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn usage_stats_roll_off_with_lookback() -> anyhow::Result<()> {
    init_logging();

    let coordinator = build_coordinator(100_000, Duration::from_secs(60));

    coordinator.analyze_one("first ticket").await?;
    advance(Duration::from_secs(1800)).await;
    coordinator.analyze_one("second ticket").await?;
    advance(Duration::from_secs(1801)).await;

    // First event is now >1h old, second is ~30min old.
    let hour = coordinator.usage_stats(Duration::from_secs(3600));
    assert_eq!(hour.requests, 1);

    let day = coordinator.usage_stats(Duration::from_secs(86_400));
    assert_eq!(day.requests, 2);
    assert_eq!(
        day.average_tokens_per_request,
        day.total_tokens / day.requests
    );
    Ok(())
}

use cadence_core::dates::{days_in_month, format_date, parse_date};
use cadence_core::error::CoreError;
use cadence_core::models::*;
use cadence_core::occurrence::{delete_repeat_event, modify_repeat_event};
use cadence_core::recurrence::*;
use cadence_core::repository::{EventRepository, JsonRepository, SeriesRepository};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    parse_date(s).expect("valid test date")
}

/// Helper function to create a test seed with the usual form fields filled in
fn create_test_seed(start: &str, kind: RepeatType, interval: u32, end: Option<&str>) -> EventDraft {
    EventDraft {
        title: "Test event 1".to_string(),
        date: date(start),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        description: "Test description".to_string(),
        location: "Test location".to_string(),
        category: "Work".to_string(),
        repeat: RepeatRule::new(kind, interval, end.map(date)),
        notification_time: 1,
        series_id: None,
    }
}

fn expand(seed: &EventDraft) -> Vec<String> {
    generate_repeat_events(seed, &RecurrenceConfig::default())
        .expect("expansion succeeds")
        .iter()
        .map(|e| format_date(e.date))
        .collect()
}

#[rstest]
#[case::daily(RepeatType::Daily, "2025-01-01", "2025-01-03",
    &["2025-01-01", "2025-01-02", "2025-01-03"])]
#[case::daily_until_fifth(RepeatType::Daily, "2025-01-01", "2025-01-05",
    &["2025-01-01", "2025-01-02", "2025-01-03", "2025-01-04", "2025-01-05"])]
#[case::weekly(RepeatType::Weekly, "2025-01-01", "2025-01-29",
    &["2025-01-01", "2025-01-08", "2025-01-15", "2025-01-22", "2025-01-29"])]
#[case::monthly(RepeatType::Monthly, "2025-01-15", "2025-05-15",
    &["2025-01-15", "2025-02-15", "2025-03-15", "2025-04-15", "2025-05-15"])]
#[case::monthly_31st(RepeatType::Monthly, "2025-01-31", "2025-10-30",
    &["2025-01-31", "2025-03-31", "2025-05-31", "2025-07-31", "2025-08-31"])]
#[case::yearly(RepeatType::Yearly, "2025-01-15", "2028-01-15",
    &["2025-01-15", "2026-01-15", "2027-01-15", "2028-01-15"])]
#[case::yearly_leap_day(RepeatType::Yearly, "2020-02-29", "2025-10-30",
    &["2020-02-29", "2024-02-29"])]
fn test_expansion_cases(
    #[case] kind: RepeatType,
    #[case] start: &str,
    #[case] end: &str,
    #[case] expected: &[&str],
) {
    let seed = create_test_seed(start, kind, 1, Some(end));
    assert_eq!(expand(&seed), expected);
}

#[rstest]
#[case::daily(RepeatType::Daily)]
#[case::weekly(RepeatType::Weekly)]
#[case::monthly(RepeatType::Monthly)]
#[case::yearly(RepeatType::Yearly)]
fn test_series_starts_on_seed_date(#[case] kind: RepeatType) {
    let seed = create_test_seed("2025-03-10", kind, 1, Some("2027-03-10"));
    let dates = expand(&seed);
    assert_eq!(dates.first().map(String::as_str), Some("2025-03-10"));
}

#[test]
fn test_none_rule_returns_seed() {
    let seed = create_test_seed("2025-08-01", RepeatType::None, 1, None);
    let result = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].date, seed.date);
}

#[test]
fn test_default_horizon_is_pinned() {
    assert_eq!(DEFAULT_END_DATE, date("2025-10-30"));

    let seed = create_test_seed("2025-01-01", RepeatType::Daily, 1, None);
    let dates = expand(&seed);
    assert_eq!(dates.len(), 303);
    assert_eq!(dates.first().map(String::as_str), Some("2025-01-01"));
    assert_eq!(dates.last().map(String::as_str), Some("2025-10-30"));
}

#[test]
fn test_modify_then_delete_scenario() {
    let original = create_test_seed("2025-01-01", RepeatType::Weekly, 1, Some("2025-01-29"));

    let detached = modify_repeat_event(&original, date("2025-01-15"));
    assert_eq!(detached.repeat.kind, RepeatType::None);
    assert_eq!(detached.date, date("2025-01-15"));
    assert_eq!(original.repeat.kind, RepeatType::Weekly);

    let remaining = delete_repeat_event(&original, date("2025-01-15"), &RecurrenceConfig::default()).unwrap();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|e| e.repeat == original.repeat));
}

#[test]
fn test_runaway_horizon_is_an_error() {
    let config = RecurrenceConfig {
        default_end_date: date("9999-12-31"),
        max_occurrences: DEFAULT_MAX_OCCURRENCES,
    };
    let seed = create_test_seed("2025-01-01", RepeatType::Daily, 1, None);
    assert!(matches!(
        generate_repeat_events(&seed, &config),
        Err(CoreError::OccurrenceLimitExceeded { .. })
    ));
}

fn recurring_kind() -> impl Strategy<Value = RepeatType> {
    prop_oneof![
        Just(RepeatType::Daily),
        Just(RepeatType::Weekly),
        Just(RepeatType::Monthly),
        Just(RepeatType::Yearly),
    ]
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2030, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        let day = d.min(days_in_month(y, m - 1));
        NaiveDate::from_ymd_opt(y, m, day).expect("day clamped to month length")
    })
}

proptest! {
    #[test]
    fn prop_series_is_ordered_and_bounded(
        kind in recurring_kind(),
        interval in 1u32..5,
        start in any_date(),
        span in 0i64..800,
    ) {
        let end = start + chrono::Duration::days(span);
        let mut seed = create_test_seed("2025-01-01", kind, interval, None);
        seed.date = start;
        seed.repeat.end_date = Some(end);

        let series = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();

        prop_assert_eq!(series.first().map(|e| e.date), Some(start));
        prop_assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert!(series.iter().all(|e| e.date >= start && e.date <= end));
        prop_assert!(series.iter().all(|e| e.title == seed.title && e.repeat == seed.repeat));
    }

    #[test]
    fn prop_monthly_and_yearly_keep_anchor_day(
        kind in prop_oneof![Just(RepeatType::Monthly), Just(RepeatType::Yearly)],
        interval in 1u32..4,
        start in any_date(),
    ) {
        let mut seed = create_test_seed("2025-01-01", kind, interval, None);
        seed.date = start;
        seed.repeat.end_date = Some(start + chrono::Duration::days(3650));

        let series = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();

        prop_assert!(series.iter().all(|e| e.date.day() == start.day()));
        if kind == RepeatType::Yearly {
            prop_assert!(series.iter().all(|e| e.date.month() == start.month()));
        }
    }

    #[test]
    fn prop_generation_is_idempotent(
        kind in recurring_kind(),
        interval in 1u32..5,
        start in any_date(),
    ) {
        let mut seed = create_test_seed("2025-01-01", kind, interval, None);
        seed.date = start;
        seed.repeat.end_date = Some(start + chrono::Duration::days(400));

        let first = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();
        let second = generate_repeat_events(&seed, &RecurrenceConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_delete_removes_exactly_one_member(
        kind in recurring_kind(),
        start in any_date(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut seed = create_test_seed("2025-01-01", kind, 1, None);
        seed.date = start;
        seed.repeat.end_date = Some(start + chrono::Duration::days(1500));

        let config = RecurrenceConfig::default();
        let full = generate_repeat_events(&seed, &config).unwrap();
        let target = full[pick.index(full.len())].date;
        let rest = delete_repeat_event(&seed, target, &config).unwrap();

        prop_assert_eq!(rest.len(), full.len() - 1);
        prop_assert!(rest.iter().all(|e| e.date != target));
        prop_assert!(rest.iter().all(|e| e.repeat == seed.repeat));
    }

    #[test]
    fn prop_modify_only_touches_date_and_repeat(
        kind in recurring_kind(),
        start in any_date(),
        target in any_date(),
    ) {
        let mut original = create_test_seed("2025-01-01", kind, 2, None);
        original.date = start;
        let snapshot = original.clone();

        let modified = modify_repeat_event(&original, target);

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(modified.date, target);
        prop_assert_eq!(modified.repeat.kind, RepeatType::None);
        prop_assert_eq!(
            EventDraft { date: start, repeat: original.repeat.clone(), ..modified },
            original
        );
    }
}

/// Helper function to create a file-backed repository in a temp directory
async fn setup_test_repo() -> (JsonRepository, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("events.json");

    let repository = JsonRepository::open(&path, RecurrenceEngine::with_defaults())
        .await
        .expect("Failed to open test store");

    (repository, temp_dir)
}

#[tokio::test]
async fn test_series_workflow_survives_reopen() {
    let (repo, temp_dir) = setup_test_repo().await;

    let seed = create_test_seed("2025-01-01", RepeatType::Daily, 1, Some("2025-01-05"));
    let created = repo.save_repeat_events(seed).await.unwrap();
    assert_eq!(created.len(), 5);
    let series_id = created[0].draft.series_id.unwrap();

    repo.update_repeat_occurrence(created[1].id, None).await.unwrap();
    let remaining = repo.delete_repeat_occurrence(created[2].id).await.unwrap();
    assert_eq!(remaining.len(), 3);

    drop(repo);
    let reopened = JsonRepository::open(temp_dir.path().join("events.json"), RecurrenceEngine::with_defaults())
        .await
        .unwrap();

    let all = reopened.list_events().await.unwrap();
    assert_eq!(all.len(), 4);

    let detached = reopened.find_event_by_id(created[1].id).await.unwrap().unwrap();
    assert_eq!(detached.draft.repeat.kind, RepeatType::None);
    assert_eq!(detached.draft.date, date("2025-01-02"));

    let series: Vec<String> = reopened
        .find_series(series_id)
        .await
        .unwrap()
        .iter()
        .map(|e| format_date(e.draft.date))
        .collect();
    assert_eq!(series, ["2025-01-01", "2025-01-04", "2025-01-05"]);
}

#[tokio::test]
async fn test_open_missing_file_is_empty() {
    let (repo, _temp_dir) = setup_test_repo().await;
    assert!(repo.list_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_corrupt_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("events.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonRepository::open(&path, RecurrenceEngine::with_defaults()).await;
    assert!(matches!(result, Err(CoreError::Serialization(_))));
}

#[tokio::test]
async fn test_store_file_layout() {
    let (repo, temp_dir) = setup_test_repo().await;
    let seed = create_test_seed("2025-10-15", RepeatType::None, 0, None);
    repo.add_event(seed).await.unwrap();

    let contents = std::fs::read_to_string(temp_dir.path().join("events.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let stored = &value["events"][0];
    assert_eq!(stored["title"], "Test event 1");
    assert_eq!(stored["date"], "2025-10-15");
    assert_eq!(stored["repeat"]["type"], "none");
    assert!(stored["id"].is_string());
}

#[tokio::test]
async fn test_failed_write_leaves_store_unchanged() {
    let (repo, temp_dir) = setup_test_repo().await;
    let seed = create_test_seed("2025-01-01", RepeatType::Daily, 1, Some("2025-01-03"));
    let created = repo.save_repeat_events(seed).await.unwrap();
    let series_id = created[0].draft.series_id.unwrap();

    // A directory where the store file belongs makes every write fail.
    let path = temp_dir.path().join("events.json");
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let single = create_test_seed("2025-02-01", RepeatType::None, 0, None);
    assert!(matches!(repo.add_event(single).await, Err(CoreError::Io(_))));
    assert!(repo.update_repeat_occurrence(created[0].id, None).await.is_err());
    assert!(repo.delete_repeat_occurrence(created[1].id).await.is_err());
    assert!(repo.delete_series(series_id).await.is_err());
    assert!(repo.delete_events(&[created[2].id]).await.is_err());

    let all = repo.list_events().await.unwrap();
    assert_eq!(all, created);
    assert!(all.iter().all(|e| e.draft.repeat.kind == RepeatType::Daily));
    assert_eq!(repo.find_series(series_id).await.unwrap().len(), 3);
}

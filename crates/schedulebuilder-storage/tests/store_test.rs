// Storage round-trip tests against a real Postgres instance.
// Run with: DATABASE_URL=postgres://... cargo test --test store_test -- --ignored

use chrono::NaiveDate;
use schedulebuilder_storage::{CreateScheduleEvent, Database, UpdateScheduleEvent};

async fn test_db() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for storage tests");
    let db = Database::from_url(&url).await.expect("connect");
    db.migrate().await.expect("migrate");
    db
}

fn sample_event(title: &str) -> CreateScheduleEvent {
    CreateScheduleEvent {
        title: title.to_string(),
        date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        day: Some("Friday".to_string()),
        start_time: Some("10:00".to_string()),
        end_time: Some("11:00".to_string()),
        description: Some("storage test fixture".to_string()),
        color: Some("#4CAF50".to_string()),
        recurring: false,
        recurrence_type: None,
    }
}

#[tokio::test]
#[ignore]
async fn test_create_then_get_returns_equal_fields() {
    let db = test_db().await;

    let created = db.create_event(sample_event("roundtrip")).await.unwrap();
    let fetched = db.get_event(created.id).await.unwrap().expect("present");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "roundtrip");
    assert_eq!(fetched.date, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    assert_eq!(fetched.day.as_deref(), Some("Friday"));
    assert_eq!(fetched.start_time.as_deref(), Some("10:00"));
    assert!(!fetched.recurring);

    db.delete_event(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_delete_then_get_is_absent() {
    let db = test_db().await;

    let created = db.create_event(sample_event("to delete")).await.unwrap();
    assert!(db.delete_event(created.id).await.unwrap());
    assert!(db.get_event(created.id).await.unwrap().is_none());

    // Deleting again reports nothing removed
    assert!(!db.delete_event(created.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_list_by_date_matches_exact_date_only() {
    let db = test_db().await;

    let on_date = db.create_event(sample_event("on date")).await.unwrap();
    let mut other = sample_event("other date");
    other.date = Some(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    let off_date = db.create_event(other).await.unwrap();

    let matches = db
        .list_events_by_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .await
        .unwrap();
    assert!(matches.iter().any(|e| e.id == on_date.id));
    assert!(matches.iter().all(|e| {
        e.date == Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }));

    // A date with no events yields an empty list, not an error
    let none = db
        .list_events_by_date(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap())
        .await
        .unwrap();
    assert!(none.is_empty());

    db.delete_event(on_date.id).await.unwrap();
    db.delete_event(off_date.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_list_by_day_is_case_sensitive_exact_match() {
    let db = test_db().await;

    let created = db.create_event(sample_event("friday slot")).await.unwrap();

    let matches = db.list_events_by_day("Friday").await.unwrap();
    assert!(matches.iter().any(|e| e.id == created.id));

    let lowercase = db.list_events_by_day("friday").await.unwrap();
    assert!(lowercase.iter().all(|e| e.id != created.id));

    db.delete_event(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_list_recurring_returns_only_flagged_events() {
    let db = test_db().await;

    let mut recurring = sample_event("weekly gym");
    recurring.recurring = true;
    recurring.recurrence_type = Some("weekly".to_string());
    let recurring = db.create_event(recurring).await.unwrap();
    let one_off = db.create_event(sample_event("one off")).await.unwrap();

    let flagged = db.list_recurring_events().await.unwrap();
    assert!(flagged.iter().any(|e| e.id == recurring.id));
    assert!(flagged.iter().all(|e| e.recurring));
    assert!(flagged.iter().all(|e| e.id != one_off.id));

    db.delete_event(recurring.id).await.unwrap();
    db.delete_event(one_off.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_all_mutable_fields() {
    let db = test_db().await;

    let created = db.create_event(sample_event("before")).await.unwrap();
    let updated = db
        .update_event(
            created.id,
            UpdateScheduleEvent {
                title: "after".to_string(),
                date: None,
                day: Some("Monday".to_string()),
                start_time: None,
                end_time: None,
                description: None,
                color: None,
                recurring: true,
                recurrence_type: Some("weekly".to_string()),
            },
        )
        .await
        .unwrap()
        .expect("present");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "after");
    // Full replace: absent optionals clear stored values
    assert!(updated.date.is_none());
    assert!(updated.start_time.is_none());
    assert_eq!(updated.day.as_deref(), Some("Monday"));
    assert!(updated.recurring);

    db.delete_event(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_id_returns_none_and_creates_nothing() {
    let db = test_db().await;

    let before = db.list_events().await.unwrap().len();
    let result = db
        .update_event(
            i64::MAX,
            UpdateScheduleEvent {
                title: "ghost".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(db.list_events().await.unwrap().len(), before);
}

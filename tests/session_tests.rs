//! Tests for the logging session controller: preload, save, cancel and the
//! no-refresh-on-failure rule.

use chrono::Datelike;
use volhours::core::session::{
    CancelTarget, LoggingSession, MSG_HOURS_LOGGED, MSG_SAVE_FAILED, SessionContext, SessionState,
};
use volhours::db::repository::HoursRepository;
use volhours::models::volunteer::Volunteer;
use volhours::utils::date;

mod common;
use common::{open_initialized, setup_test_db};

fn operator() -> SessionContext {
    SessionContext {
        operator: "test-operator".to_string(),
        is_admin: false,
    }
}

fn admin() -> SessionContext {
    SessionContext {
        operator: "test-admin".to_string(),
        is_admin: true,
    }
}

fn session_for(db_path: &str, ctx: SessionContext) -> LoggingSession {
    let repo = HoursRepository::new(db_path);
    let mut session = LoggingSession::new(ctx, repo);
    session.preload(Volunteer::new(7, "Maria", "Rossi"));
    session
}

#[test]
fn preload_binds_volunteer_and_resets_input() {
    let db_path = setup_test_db("session_preload");
    let _conn = open_initialized(&db_path);

    let session = session_for(&db_path, operator());

    assert_eq!(session.volunteer().map(|v| v.id), Some(7));
    assert_eq!(session.input_date(), date::today());
    assert_eq!(session.status(), "");
    assert!(session.series().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn successful_save_confirms_and_refreshes() {
    let db_path = setup_test_db("session_save");
    let _conn = open_initialized(&db_path);

    let mut session = session_for(&db_path, operator());

    // input date defaults to today, so the entry lands in the charted year
    assert!(session.save(5));
    assert_eq!(session.status(), MSG_HOURS_LOGGED);

    let series = session.series();
    assert_eq!(series.total(), 5);
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].month, date::today().month());
}

#[test]
fn rejected_save_shows_message_and_keeps_series() {
    let db_path = setup_test_db("session_rejected");
    let _conn = open_initialized(&db_path);

    let mut session = session_for(&db_path, operator());
    assert!(session.save(4));
    assert_eq!(session.series().total(), 4);

    // invalid hours: field-level message, chart untouched
    assert!(!session.save(-1));
    assert!(session.status().contains("Invalid hours"));
    assert_eq!(session.series().total(), 4);

    assert!(!session.save(25));
    assert!(session.status().contains("Invalid hours"));
    assert_eq!(session.series().total(), 4);
}

#[test]
fn persistence_failure_is_not_fatal_and_keeps_series() {
    // a directory is not an openable database file
    let bad_path = std::env::temp_dir().to_string_lossy().to_string();

    let mut session = session_for(&bad_path, operator());

    // the preload refresh failed silently: previous (empty) series kept
    assert!(session.series().is_empty());

    // a save converts the failure into the generic message, no panic
    assert!(!session.save(3));
    assert_eq!(session.status(), MSG_SAVE_FAILED);
    assert!(session.series().is_empty());
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn preload_clears_previous_status() {
    let db_path = setup_test_db("session_reload");
    let _conn = open_initialized(&db_path);

    let mut session = session_for(&db_path, operator());
    assert!(session.save(2));
    assert_eq!(session.status(), MSG_HOURS_LOGGED);

    session.preload(Volunteer::new(8, "Paolo", "Bianchi"));
    assert_eq!(session.status(), "");
    assert_eq!(session.volunteer().map(|v| v.id), Some(8));
}

#[test]
fn cancel_target_depends_on_operator_role() {
    let db_path = setup_test_db("session_cancel");
    let _conn = open_initialized(&db_path);

    let session = session_for(&db_path, admin());
    assert_eq!(session.cancel(), CancelTarget::VolunteerTable);

    let session = session_for(&db_path, operator());
    assert_eq!(session.cancel(), CancelTarget::EditVolunteer);
}

//! Library-level tests for the repository + aggregator pipeline.

use chrono::NaiveDate;
use volhours::core::aggregate::build_series;
use volhours::core::chart::render_series;
use volhours::db::queries::{insert_hours_entry, monthly_totals};
use volhours::db::repository::HoursRepository;
use volhours::models::hours_entry::HoursEntry;

mod common;
use common::{open_initialized, setup_test_db};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn save(conn: &rusqlite::Connection, volunteer_id: i32, d: NaiveDate, hours: i64) {
    let entry = HoursEntry::new(volunteer_id, d, hours).expect("valid entry");
    insert_hours_entry(conn, &entry).expect("insert entry");
}

#[test]
fn march_entries_sum_into_one_point() {
    let db_path = setup_test_db("agg_march");
    let conn = open_initialized(&db_path);

    save(&conn, 7, date(2024, 3, 5), 3);
    save(&conn, 7, date(2024, 3, 20), 5);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    assert_eq!(rows, vec![(3, 8)]);

    let series = build_series(2024, &rows);
    assert_eq!(series.points.len(), 1);
    assert_eq!(series.points[0].label, "March");
    assert_eq!(series.points[0].total_hours, 8);
}

#[test]
fn year_without_entries_yields_empty_series() {
    let db_path = setup_test_db("agg_empty");
    let conn = open_initialized(&db_path);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    assert!(rows.is_empty());

    let series = build_series(2024, &rows);
    assert!(series.is_empty());

    // an empty year renders a message, not an error
    let rendered = render_series(&series, 40);
    assert!(rendered.contains("No hours logged for 2024"));
}

#[test]
fn months_without_entries_are_absent() {
    let db_path = setup_test_db("agg_absent");
    let conn = open_initialized(&db_path);

    save(&conn, 7, date(2024, 1, 10), 2);
    save(&conn, 7, date(2024, 3, 11), 4);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|&(m, _)| m == 1 || m == 3));
    // never present with a zero value
    assert!(rows.iter().all(|&(_, total)| total > 0));
}

#[test]
fn points_are_ordered_by_month_number() {
    let db_path = setup_test_db("agg_order");
    let conn = open_initialized(&db_path);

    // inserted out of calendar order
    save(&conn, 7, date(2024, 12, 1), 1);
    save(&conn, 7, date(2024, 2, 1), 2);
    save(&conn, 7, date(2024, 7, 1), 3);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    let months: Vec<u32> = rows.iter().map(|&(m, _)| m).collect();
    assert_eq!(months, vec![2, 7, 12]);

    let series = build_series(2024, &rows);
    let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["February", "July", "December"]);
}

#[test]
fn aggregation_is_total_preserving() {
    let db_path = setup_test_db("agg_total");
    let conn = open_initialized(&db_path);

    let hours = [4, 6, 2, 8, 5];
    let dates = [
        date(2024, 1, 3),
        date(2024, 1, 17),
        date(2024, 5, 9),
        date(2024, 9, 30),
        date(2024, 12, 24),
    ];
    for (d, h) in dates.iter().zip(hours) {
        save(&conn, 7, *d, h);
    }

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    let series = build_series(2024, &rows);
    assert_eq!(series.total(), hours.iter().sum::<i64>());
}

#[test]
fn saving_twice_is_additive() {
    let db_path = setup_test_db("agg_additive");
    let conn = open_initialized(&db_path);

    // same volunteer, same date: no uniqueness constraint, totals add up
    save(&conn, 7, date(2024, 6, 15), 4);
    save(&conn, 7, date(2024, 6, 15), 4);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    assert_eq!(rows, vec![(6, 8)]);
}

#[test]
fn totals_are_scoped_to_volunteer_and_year() {
    let db_path = setup_test_db("agg_scope");
    let conn = open_initialized(&db_path);

    save(&conn, 7, date(2024, 4, 1), 5);
    save(&conn, 7, date(2023, 4, 1), 9);
    save(&conn, 8, date(2024, 4, 1), 11);

    let rows = monthly_totals(&conn, 7, 2024).expect("query totals");
    assert_eq!(rows, vec![(4, 5)]);
}

#[test]
fn negative_hours_are_rejected_before_persistence() {
    let db_path = setup_test_db("agg_negative");
    let conn = open_initialized(&db_path);

    let rejected = HoursEntry::new(7, date(2024, 3, 5), -1);
    assert!(rejected.is_err());

    // no persistence call happened: the table is untouched
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM hours_worked", [], |row| row.get(0))
        .expect("count rows");
    assert_eq!(count, 0);
}

#[test]
fn hours_above_daily_maximum_are_rejected() {
    assert!(HoursEntry::new(7, date(2024, 3, 5), 25).is_err());
    assert!(HoursEntry::new(7, date(2024, 3, 5), 24).is_ok());
    assert!(HoursEntry::new(7, date(2024, 3, 5), 0).is_ok());
}

#[test]
fn repository_roundtrip_via_file_db() {
    let db_path = setup_test_db("agg_repo");
    let _conn = open_initialized(&db_path);

    let repo = HoursRepository::new(&db_path);

    let entry = HoursEntry::new(7, date(2024, 10, 2), 6).expect("valid entry");
    repo.save(&entry).expect("save entry");

    let rows = repo.monthly_totals(7, 2024).expect("query totals");
    assert_eq!(rows, vec![(10, 6)]);
}

mod common;
use common::{ACTIVITY, TRACKER, activity_rows, e, n, t, tracker_rows};
use trackerpane::config::Config;
use trackerpane::core::ActivityIndex;
use trackerpane::db::log::load_log;
use trackerpane::errors::AppError;
use trackerpane::host::{Host, RowFormat, SqliteHost};
use trackerpane::models::CellValue;
use trackerpane::pane::{Pane, PaneEvent, UserAction};

fn loaded_host() -> SqliteHost {
    let mut host = SqliteHost::in_memory().expect("open store");
    host.import_sheet(TRACKER, &tracker_rows()).expect("import tracker");
    host.import_sheet(ACTIVITY, &activity_rows()).expect("import activity");
    host.set_property("Report", "itcomm-tracker").expect("set property");
    host
}

#[test]
fn test_used_range_is_rectangular_and_anchored() {
    let host = loaded_host();
    let rows = host.used_range(ACTIVITY).expect("used range");

    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.len() == 7));
    assert_eq!(rows[3][4], t("Tracker ID"));
    assert_eq!(rows[4][1], n(45296.0));
    assert_eq!(rows[1][0], e());
}

#[test]
fn test_unknown_sheet_is_an_error() {
    let host = loaded_host();
    assert!(matches!(
        host.used_range("Budget"),
        Err(AppError::SheetNotFound(_))
    ));
}

#[test]
fn test_write_row_and_read_back() {
    let mut host = loaded_host();
    let values = vec![n(45306.0), e(), e(), n(1.0), t("Called vendor"), CellValue::Bool(true)];

    host.write_row(ACTIVITY, 8, 1, &values).expect("write");
    let rows = host.used_range(ACTIVITY).expect("used range");

    assert_eq!(rows.len(), 9);
    assert_eq!(rows[8][1], n(45306.0));
    assert_eq!(rows[8][5], t("Called vendor"));
    assert_eq!(rows[8][6], CellValue::Bool(true));
    assert_eq!(rows[0].len(), 7);
}

#[test]
fn test_writing_empty_clears_cell() {
    let mut host = loaded_host();
    host.write_row(ACTIVITY, 4, 5, &[e()]).expect("write");

    let rows = host.used_range(ACTIVITY).expect("used range");
    assert_eq!(rows[4][5], e());
}

#[test]
fn test_properties_and_selection() {
    let mut host = loaded_host();
    assert_eq!(
        host.custom_property("Report").unwrap().as_deref(),
        Some("itcomm-tracker")
    );
    assert_eq!(host.custom_property("Owner").unwrap(), None);

    assert_eq!(host.active_sheet().unwrap(), "");
    assert_eq!(host.selected_row().unwrap(), None);

    host.select(TRACKER, Some(4)).expect("select");
    assert_eq!(host.active_sheet().unwrap(), TRACKER);
    assert_eq!(host.selected_row().unwrap(), Some(4));
}

#[test]
fn test_row_format_round_trip() {
    let mut host = loaded_host();
    let format = RowFormat::activity_row(1, 7, 1);

    host.format_row(ACTIVITY, 8, &format).expect("format");
    assert_eq!(host.row_format(ACTIVITY, 8).unwrap(), Some(format));
    assert_eq!(host.row_format(ACTIVITY, 9).unwrap(), None);
}

#[test]
fn test_reimport_replaces_sheet() {
    let mut host = loaded_host();
    host.import_sheet(ACTIVITY, &[vec![t("only")]]).expect("import");

    let rows = host.used_range(ACTIVITY).expect("used range");
    assert_eq!(rows, vec![vec![t("only")]]);
}

#[test]
fn test_pane_over_sqlite_store() {
    let mut host = loaded_host();
    host.select(TRACKER, Some(4)).expect("select");

    let mut pane = Pane::new(Config::with_database(":memory:"), ActivityIndex::new());
    pane.start(&mut host);
    assert_eq!(pane.state().timeline.len(), 2);

    pane.handle(&mut host, PaneEvent::UserAction(UserAction::AddActivity));
    pane.handle(
        &mut host,
        PaneEvent::UserAction(UserAction::SaveActivity {
            date: chrono::NaiveDate::from_ymd_opt(2024, 2, 1),
            description: "Swapped fuser".to_string(),
        }),
    );

    assert_eq!(pane.state().timeline.len(), 3);
    assert_eq!(pane.state().timeline[2].date, "1-Feb-2024");
    assert!(host.row_format(ACTIVITY, 8).unwrap().is_some());

    let log = load_log(host.conn()).expect("log");
    assert!(log.iter().any(|l| l.operation == "rebuild"));
    assert!(log.iter().any(|l| l.operation == "add"));
}

#[test]
fn test_failed_row_write_leaves_no_partial_row() {
    let mut host = loaded_host();
    host.conn()
        .execute_batch(
            "CREATE TRIGGER reject_col3 BEFORE INSERT ON cells
             WHEN NEW.row = 8 AND NEW.col = 3
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .expect("create trigger");

    let values = vec![n(45306.0), t("x"), t("y"), n(1.0), t("Called vendor")];
    assert!(host.write_row(ACTIVITY, 8, 1, &values).is_err());

    let rows = host.used_range(ACTIVITY).expect("used range");
    assert_eq!(rows.len(), 8);
}

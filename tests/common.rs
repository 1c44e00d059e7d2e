#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use trackerpane::config::Config;
use trackerpane::core::ActivityIndex;
use trackerpane::host::MemoryHost;
use trackerpane::models::CellValue;
use trackerpane::pane::Pane;

pub const TRACKER: &str = "IT Tracker";
pub const ACTIVITY: &str = "Activity";

/// Serial day counts used by the fixtures.
pub const JAN_05_2024: i64 = 45296;
pub const JAN_06_2024: i64 = 45297;
pub const JAN_09_2024: i64 = 45300;

pub fn tp(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("trackerpane");
    cmd.env("TRACKERPANE_HOME", home);
    cmd
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> (String, String) {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_trackerpane_home", name));
    fs::create_dir_all(&home).ok();

    let mut db = env::temp_dir();
    db.push(format!("{}_trackerpane.sqlite", name));
    let db_path = db.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    (home.to_string_lossy().to_string(), db_path)
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn write_temp(name: &str, content: &str) -> String {
    let p = temp_out(name, "csv");
    fs::write(&p, content).expect("write temp csv");
    p
}

pub fn n(v: f64) -> CellValue {
    CellValue::Number(v)
}

pub fn t(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

pub fn e() -> CellValue {
    CellValue::Empty
}

/// Tracker sheet: headers on row 4 from column B.
pub fn tracker_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec![e(), t("IT Tracker")],
        vec![],
        vec![],
        vec![
            e(),
            t("ID"),
            t("Issue"),
            t("Description"),
            t("Status"),
            t("Assigned To"),
            t("Due Date"),
        ],
        vec![
            e(),
            n(1.0),
            t("Printer offline"),
            t("3rd floor printer"),
            t("Open"),
            t("Ann"),
            t("2024-01-10"),
        ],
        vec![e(), n(2.0), t("VPN drops"), t("Remote users"), t("Closed")],
        vec![e(), n(2.5), t("Half issue"), t("Not a real id")],
        vec![e(), e(), t("No id"), t("Draft row")],
    ]
}

/// Activity sheet: headers on row 4, date in B, id in E, text in F.
pub fn activity_rows() -> Vec<Vec<CellValue>> {
    vec![
        vec![e(), t("Activity log")],
        vec![],
        vec![],
        vec![
            e(),
            t("Date Start"),
            t("Time"),
            t("Type"),
            t("Tracker ID"),
            t("Activity"),
            t("Notes"),
        ],
        vec![e(), n(JAN_05_2024 as f64), e(), e(), n(1.0), t("Rebooted printer")],
        vec![e(), n(JAN_06_2024 as f64), e(), e(), n(2.0), t("Reset tunnel")],
        vec![e(), n(JAN_09_2024 as f64), e(), e(), n(1.0), t("Replaced toner")],
        vec![e(), n(45301.0), e(), e(), e(), t("Orphan note")],
    ]
}

pub fn tracker_host() -> MemoryHost {
    MemoryHost::new()
        .with_sheet(TRACKER, tracker_rows())
        .with_sheet(ACTIVITY, activity_rows())
        .with_property("Report", "itcomm-tracker")
}

pub fn test_config() -> Config {
    Config::with_database(":memory:")
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// Pane started on `host` with the tracker sheet active and `row` selected.
pub fn started_pane(host: &mut MemoryHost, row: Option<usize>) -> Pane {
    host.select(TRACKER, row);
    let mut pane = Pane::new(test_config(), ActivityIndex::new()).with_today(today());
    pane.start(host);
    pane
}

pub const TRACKER_CSV: &str = "\
,IT Tracker
,
,
,ID,Issue,Description,Status,Assigned To,Due Date
,1,Printer offline,3rd floor printer,Open,Ann,2024-01-10
,2,VPN drops,Remote users,Closed,,
";

pub const ACTIVITY_CSV: &str = "\
,Activity log
,
,
,Date Start,Time,Type,Tracker ID,Activity,Notes
,45296,,,1,Rebooted printer,
,45297,,,2,Reset tunnel,
,45300,,,1,Replaced toner,
";

/// Initialize a tracker store and load both sheets through the CLI.
pub fn init_store_with_data(name: &str) -> (String, String) {
    let (home, db) = setup_test_db(name);

    tp(&home)
        .args(["--db", &db, "--test", "init", "--report", "itcomm-tracker"])
        .assert()
        .success();

    let tracker = write_temp(&format!("{name}_tracker"), TRACKER_CSV);
    let activity = write_temp(&format!("{name}_activity"), ACTIVITY_CSV);

    tp(&home)
        .args(["--db", &db, "import", "--sheet", TRACKER, "--file", &tracker])
        .assert()
        .success();
    tp(&home)
        .args(["--db", &db, "import", "--sheet", ACTIVITY, "--file", &activity])
        .assert()
        .success();

    (home, db)
}

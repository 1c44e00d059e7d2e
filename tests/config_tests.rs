mod common;
use common::temp_out;
use std::fs;
use std::path::Path;
use trackerpane::config::Config;
use trackerpane::errors::AppError;

fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_out(name, "conf");
    fs::write(&path, yaml).expect("write config");
    path
}

#[test]
fn test_partial_config_fills_defaults() {
    let path = write_config("cfg_partial", "tracker_sheet: Issues\n");
    let cfg = Config::load_from(Path::new(&path)).expect("partial config loads");

    assert_eq!(cfg.tracker_sheet, "Issues");
    assert_eq!(cfg.activity_sheet, "Activity");
    assert_eq!(cfg.database, Config::database_file().to_string_lossy());
    assert_eq!(cfg.id_tolerance, 0.0);
    assert!(!cfg.strict_headers);
}

#[test]
fn test_missing_config_gives_defaults() {
    let path = temp_out("cfg_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).expect("defaults");
    assert_eq!(cfg.tracker_header_row, 3);
    assert_eq!(cfg.activity_data_offset, 4);
}

#[test]
fn test_id_tolerance_must_stay_below_half() {
    for (name, value) in [
        ("cfg_tol_half", "0.5"),
        ("cfg_tol_nan", ".nan"),
        ("cfg_tol_inf", ".inf"),
        ("cfg_tol_neg", "-0.1"),
    ] {
        let path = write_config(name, &format!("id_tolerance: {value}\n"));
        let res = Config::load_from(Path::new(&path));
        assert!(
            matches!(res, Err(AppError::Config(ref msg)) if msg.contains("id_tolerance")),
            "id_tolerance {value} should be rejected"
        );
    }

    let path = write_config("cfg_tol_ok", "id_tolerance: 0.000001\n");
    let cfg = Config::load_from(Path::new(&path)).expect("small tolerance loads");
    assert_eq!(cfg.id_tolerance, 0.000001);
}

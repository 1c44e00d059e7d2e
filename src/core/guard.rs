/// Name of the custom document property identifying a tracker workbook.
pub const REPORT_PROPERTY: &str = "Report";

/// Value the property must hold.
pub const REPORT_VALUE: &str = "itcomm-tracker";

/// Message shown instead of the pane when the workbook is not a tracker.
pub const WRONG_FILE_MESSAGE: &str =
    "This workbook is not an IT tracker report. Open the tracker workbook to use this pane.";

/// True only for an exact match; a missing property never matches.
pub fn is_correct_file(property: Option<&str>, expected: &str) -> bool {
    property == Some(expected)
}

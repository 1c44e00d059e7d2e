use crate::core::issue::parse_issue_id;
use crate::core::layout::ActivityLayout;
use crate::models::{Activity, CellValue, IssueId};
use crate::utils::date::serial_to_day_count;
use std::collections::HashMap;

/// Activities grouped by issue id, in source row order.
///
/// The index is only ever replaced wholesale by [`ActivityIndex::rebuild`];
/// there is no incremental insert. After a rebuild it reflects exactly the
/// snapshot it was built from.
#[derive(Debug, Default, Clone)]
pub struct ActivityIndex {
    by_issue: HashMap<IssueId, Vec<Activity>>,
    rows: usize,
}

/// Counters from the last rebuild, used for the internal log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    pub indexed: usize,
    pub skipped_empty: usize,
    pub skipped_invalid: usize,
}

impl ActivityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the index with the activities found in `rows`.
    ///
    /// Rows before `header_offset` are skipped. Rows whose key cell is empty
    /// are excluded; so are keys that are not whole numbers, since no issue
    /// can ever select them.
    pub fn rebuild(
        &mut self,
        rows: &[Vec<CellValue>],
        layout: &ActivityLayout,
        header_offset: usize,
        tolerance: f64,
    ) -> RebuildSummary {
        let mut by_issue: HashMap<IssueId, Vec<Activity>> = HashMap::new();
        let mut summary = RebuildSummary::default();

        for row in rows.iter().skip(header_offset) {
            let key = match row.get(layout.issue_id) {
                Some(k) if !k.is_empty() => k,
                _ => {
                    summary.skipped_empty += 1;
                    continue;
                }
            };

            let Some(issue_id) = parse_issue_id(key, tolerance) else {
                summary.skipped_invalid += 1;
                continue;
            };

            let date = row
                .get(layout.date)
                .and_then(CellValue::as_number)
                .and_then(serial_to_day_count);
            let description = row
                .get(layout.description)
                .map(CellValue::as_text)
                .unwrap_or_default();

            by_issue
                .entry(issue_id)
                .or_default()
                .push(Activity::new(issue_id, date, description));
            summary.indexed += 1;
        }

        self.by_issue = by_issue;
        self.rows = summary.indexed;
        summary
    }

    /// Activities for `issue_id`, empty when there are none.
    pub fn lookup(&self, issue_id: IssueId) -> &[Activity] {
        self.by_issue
            .get(&issue_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn issue_count(&self) -> usize {
        self.by_issue.len()
    }

    pub fn clear(&mut self) {
        self.by_issue.clear();
        self.rows = 0;
    }
}

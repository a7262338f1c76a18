//! Edit-history replay.
//!
//! A publication's edit log is an ordered list of per-field change rows.
//! Replaying the log up to a version yields the field values the record
//! had at that version; diffing two replayed snapshots yields the set of
//! fields that changed between the two versions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::activity::EditRecord;

/// One field that differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDiff {
    pub field: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Fold the edit log into the per-field values as of `version`.
///
/// Records must be ordered by (version, id) ascending, which is how the
/// repository returns them; for each field the last write at or before
/// the cutoff wins. Fields never touched by the log are absent.
pub fn snapshot_at(records: &[EditRecord], version: i32) -> BTreeMap<String, Option<String>> {
    records
        .iter()
        .filter(|r| r.version <= version)
        .fold(BTreeMap::new(), |mut snapshot, record| {
            snapshot.insert(record.field.clone(), record.new_value.clone());
            snapshot
        })
}

/// Per-field differences between the snapshots at `from_version` and
/// `to_version`. A field missing from one side is reported with `None`
/// on that side.
pub fn diff_between(records: &[EditRecord], from_version: i32, to_version: i32) -> Vec<FieldDiff> {
    let before = snapshot_at(records, from_version);
    let after = snapshot_at(records, to_version);

    let mut fields: Vec<&String> = before.keys().chain(after.keys()).collect();
    fields.sort();
    fields.dedup();

    fields
        .into_iter()
        .filter_map(|field| {
            let from = before.get(field).cloned().flatten();
            let to = after.get(field).cloned().flatten();
            if from != to {
                Some(FieldDiff {
                    field: field.clone(),
                    from,
                    to,
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i32, version: i32, field: &str, old: Option<&str>, new: Option<&str>) -> EditRecord {
        EditRecord {
            id,
            publication_id: 1,
            version,
            field: field.to_string(),
            old_value: old.map(str::to_string),
            new_value: new.map(str::to_string),
            edited_by: 7,
            edited_at: chrono::Utc::now(),
        }
    }

    fn sample_log() -> Vec<EditRecord> {
        vec![
            record(1, 1, "title", Some("Draft title"), Some("First title")),
            record(2, 1, "year", None, Some("2023")),
            record(3, 2, "title", Some("First title"), Some("Second title")),
            record(4, 3, "abstract", None, Some("An abstract")),
            record(5, 3, "year", Some("2023"), Some("2024")),
        ]
    }

    #[test]
    fn snapshot_empty_before_any_edit() {
        assert!(snapshot_at(&sample_log(), 0).is_empty());
    }

    #[test]
    fn snapshot_takes_last_write_before_cutoff() {
        let log = sample_log();

        let v1 = snapshot_at(&log, 1);
        assert_eq!(v1.get("title"), Some(&Some("First title".to_string())));
        assert_eq!(v1.get("year"), Some(&Some("2023".to_string())));
        assert_eq!(v1.get("abstract"), None);

        let v3 = snapshot_at(&log, 3);
        assert_eq!(v3.get("title"), Some(&Some("Second title".to_string())));
        assert_eq!(v3.get("year"), Some(&Some("2024".to_string())));
        assert_eq!(v3.get("abstract"), Some(&Some("An abstract".to_string())));
    }

    #[test]
    fn snapshot_beyond_last_version_equals_latest() {
        let log = sample_log();
        assert_eq!(snapshot_at(&log, 3), snapshot_at(&log, 99));
    }

    #[test]
    fn diff_reports_changed_fields_only() {
        let log = sample_log();
        let changes = diff_between(&log, 1, 2);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].field, "title");
        assert_eq!(changes[0].from.as_deref(), Some("First title"));
        assert_eq!(changes[0].to.as_deref(), Some("Second title"));
    }

    #[test]
    fn diff_reports_introduced_fields_with_empty_from() {
        let log = sample_log();
        let changes = diff_between(&log, 0, 3);

        let abstract_change = changes.iter().find(|c| c.field == "abstract").unwrap();
        assert_eq!(abstract_change.from, None);
        assert_eq!(abstract_change.to.as_deref(), Some("An abstract"));
    }

    #[test]
    fn diff_of_equal_versions_is_empty() {
        let log = sample_log();
        assert!(diff_between(&log, 2, 2).is_empty());
    }

    #[test]
    fn tie_within_version_resolved_by_row_order() {
        // Two writes to the same field in the same version: row order wins.
        let log = vec![
            record(1, 1, "title", None, Some("A")),
            record(2, 1, "title", Some("A"), Some("B")),
        ];
        let snap = snapshot_at(&log, 1);
        assert_eq!(snap.get("title"), Some(&Some("B".to_string())));
    }

    #[test]
    fn diff_is_sorted_by_field_name() {
        let log = sample_log();
        let changes = diff_between(&log, 0, 3);
        let names: Vec<_> = changes.iter().map(|c| c.field.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

use std::fmt::Write;

use changed_tests_core::TestSelection;
use changed_tests_operations::{MergeBase, ResolvedRevision};

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_comparison(&self, resolved: &ResolvedRevision) -> String {
        match &resolved.merge_base {
            MergeBase::Ancestor { sha } => format!(
                "Comparing against revision '{}' (merge base {sha}).",
                resolved.revision
            ),
            MergeBase::Revision { .. } => {
                format!("Comparing against revision '{}'.", resolved.revision)
            }
            MergeBase::Unrelated => format!(
                "Comparing against revision '{}' (no common history).",
                resolved.revision
            ),
        }
    }

    fn format_found(&self, selection: &TestSelection) -> String {
        format!(
            "Found {} test files associated with changes.",
            selection.len()
        )
    }

    fn format_selection(&self, selection: &TestSelection) -> String {
        let mut output = String::new();
        for file in selection.files() {
            let _ = writeln!(output, "{}", file.display());
        }
        output
    }
}

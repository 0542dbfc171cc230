use changed_tests_core::TestSelection;
use changed_tests_operations::ResolvedRevision;

pub(crate) trait OutputFormatter {
    fn format_comparison(&self, resolved: &ResolvedRevision) -> String;
    fn format_found(&self, selection: &TestSelection) -> String;
    fn format_selection(&self, selection: &TestSelection) -> String;
}

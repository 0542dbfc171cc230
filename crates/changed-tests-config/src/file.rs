use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) source_suffix: Option<String>,
    pub(crate) test_suffix: Option<String>,
    pub(crate) initializer: Option<String>,
    pub(crate) global_test: Option<GlobalTestValue>,
    pub(crate) default_revisions: Option<Vec<String>>,
    pub(crate) runner: Option<Vec<String>>,
    pub(crate) seed_env: Option<String>,
    #[serde(default)]
    pub(crate) env: IndexMap<String, String>,
}

/// `global-test = "path/to/test.py"` or `global-test = false`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GlobalTestValue {
    Path(String),
    Enabled(bool),
}

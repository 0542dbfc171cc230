use std::path::{Path, PathBuf};

use changed_tests_core::{
    DEFAULT_GLOBAL_TEST, DEFAULT_INITIALIZER, DEFAULT_REVISIONS, DEFAULT_RUNNER, DEFAULT_SEED_ENV,
    DEFAULT_SOURCE_SUFFIX, DEFAULT_TEST_SUFFIX, GlobalTestRule, SelectionRules, TestNaming,
};
use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::file::{ConfigFile, GlobalTestValue};

#[derive(Debug, Clone)]
pub struct Config {
    rules: SelectionRules,
    default_revisions: Vec<String>,
    runner: Vec<String>,
    seed_env: String,
    env: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: SelectionRules {
                naming: TestNaming::default(),
                global_test: Some(GlobalTestRule::default()),
            },
            default_revisions: DEFAULT_REVISIONS.iter().map(ToString::to_string).collect(),
            runner: DEFAULT_RUNNER.iter().map(ToString::to_string).collect(),
            seed_env: DEFAULT_SEED_ENV.to_string(),
            env: IndexMap::new(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn selection_rules(&self) -> &SelectionRules {
        &self.rules
    }

    /// Revisions probed in order when none is given on the command line.
    #[must_use]
    pub fn default_revisions(&self) -> &[String] {
        &self.default_revisions
    }

    /// Runner program followed by its fixed leading arguments. Never empty.
    #[must_use]
    pub fn runner(&self) -> &[String] {
        &self.runner
    }

    #[must_use]
    pub fn seed_env(&self) -> &str {
        &self.seed_env
    }

    /// Extra environment variables for the runner process.
    #[must_use]
    pub fn env(&self) -> &IndexMap<String, String> {
        &self.env
    }
}

fn non_empty(
    value: Option<String>,
    default: &str,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.is_empty() => Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            field,
            reason: "must not be empty",
        }),
        Some(v) => Ok(v),
        None => Ok(default.to_string()),
    }
}

fn build_config(file: ConfigFile, path: &Path) -> Result<Config, ConfigError> {
    let defaults = Config::default();

    let source_suffix = non_empty(file.source_suffix, DEFAULT_SOURCE_SUFFIX, "source-suffix", path)?;
    let test_suffix = non_empty(file.test_suffix, DEFAULT_TEST_SUFFIX, "test-suffix", path)?;
    if source_suffix == test_suffix {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            field: "test-suffix",
            reason: "must differ from source-suffix",
        });
    }
    let initializer = non_empty(file.initializer, DEFAULT_INITIALIZER, "initializer", path)?;

    let global_test = match file.global_test {
        None | Some(GlobalTestValue::Enabled(true)) => {
            Some(GlobalTestRule::new(initializer, DEFAULT_GLOBAL_TEST))
        }
        Some(GlobalTestValue::Enabled(false)) => None,
        Some(GlobalTestValue::Path(p)) if p.is_empty() => {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                field: "global-test",
                reason: "must be a path or false",
            });
        }
        Some(GlobalTestValue::Path(p)) => Some(GlobalTestRule::new(initializer, PathBuf::from(p))),
    };

    let runner = match file.runner {
        Some(runner) if runner.first().is_none_or(String::is_empty) => {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                field: "runner",
                reason: "must name a program",
            });
        }
        Some(runner) => runner,
        None => defaults.runner,
    };

    let seed_env = non_empty(file.seed_env, DEFAULT_SEED_ENV, "seed-env", path)?;

    Ok(Config {
        rules: SelectionRules {
            naming: TestNaming::new(source_suffix, test_suffix),
            global_test,
        },
        default_revisions: file.default_revisions.unwrap_or(defaults.default_revisions),
        runner,
        seed_env,
        env: file.env,
    })
}

/// Parses configuration from TOML text. `path` is used in error messages.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML, contains unknown keys, or
/// holds invalid values.
pub fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    build_config(file, path)
}

/// Loads `explicit` if given, otherwise `.changed-tests.toml` in
/// `repo_root`, falling back to defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if an explicit file cannot be read, or if any file
/// read fails to parse.
pub fn load_config(repo_root: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = repo_root.join(crate::CONFIG_FILE_NAME);
            if !path.is_file() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_config(&content, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        parse_config(toml, Path::new(".changed-tests.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() -> anyhow::Result<()> {
        let config = parse("")?;

        assert_eq!(config.runner(), ["pytest"]);
        assert_eq!(
            config.default_revisions(),
            ["upstream/main", "origin/main", "main"]
        );
        assert_eq!(config.seed_env(), "CIRQ_TESTING_RANDOM_SEED");
        assert_eq!(config.selection_rules().naming, TestNaming::default());
        assert_eq!(
            config.selection_rules().global_test,
            Some(GlobalTestRule::default())
        );
        assert!(config.env().is_empty());
        Ok(())
    }

    #[test]
    fn all_keys() -> anyhow::Result<()> {
        let toml = r#"
source-suffix = ".rs"
test-suffix = "_tests.rs"
initializer = "mod.rs"
global-test = "tests/api_tests.rs"
default-revisions = ["origin/develop"]
runner = ["python", "-m", "pytest"]
seed-env = "TEST_SEED"

[env]
PYTHONPATH = "cirq-core"
TZ = "UTC"
"#;
        let config = parse(toml)?;

        let rules = config.selection_rules();
        assert_eq!(rules.naming, TestNaming::new(".rs", "_tests.rs"));
        assert_eq!(
            rules.global_test,
            Some(GlobalTestRule::new("mod.rs", "tests/api_tests.rs"))
        );
        assert_eq!(config.default_revisions(), ["origin/develop"]);
        assert_eq!(config.runner(), ["python", "-m", "pytest"]);
        assert_eq!(config.seed_env(), "TEST_SEED");
        let env: Vec<_> = config.env().iter().collect();
        assert_eq!(
            env,
            [
                (&"PYTHONPATH".to_string(), &"cirq-core".to_string()),
                (&"TZ".to_string(), &"UTC".to_string())
            ]
        );
        Ok(())
    }

    #[test]
    fn global_test_can_be_disabled() -> anyhow::Result<()> {
        let config = parse("global-test = false")?;

        assert!(config.selection_rules().global_test.is_none());
        Ok(())
    }

    #[test]
    fn global_test_true_keeps_default() -> anyhow::Result<()> {
        let config = parse("global-test = true\ninitializer = \"__init__.pyi\"")?;

        assert_eq!(
            config.selection_rules().global_test,
            Some(GlobalTestRule::new(
                "__init__.pyi",
                "cirq-core/cirq/protocols/json_serialization_test.py"
            ))
        );
        Ok(())
    }

    #[test]
    fn empty_runner_is_rejected() {
        let result = parse("runner = []");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "runner",
                ..
            })
        ));
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let result = parse("source-suffix = \"\"");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "source-suffix",
                ..
            })
        ));
    }

    #[test]
    fn identical_suffixes_are_rejected() {
        let result = parse("source-suffix = \".py\"\ntest-suffix = \".py\"");

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "test-suffix",
                ..
            })
        ));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let result = parse("runer = [\"pytest\"]");

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_default_file_gives_defaults() -> anyhow::Result<()> {
        let dir = TempDir::new()?;

        let config = load_config(dir.path(), None)?;

        assert_eq!(config.runner(), ["pytest"]);
        Ok(())
    }

    #[test]
    fn default_file_is_read_from_repo_root() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(
            dir.path().join(crate::CONFIG_FILE_NAME),
            "runner = [\"tox\", \"--\"]",
        )?;

        let config = load_config(dir.path(), None)?;

        assert_eq!(config.runner(), ["tox", "--"]);
        Ok(())
    }

    #[test]
    fn missing_explicit_file_is_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let explicit = dir.path().join("nope.toml");

        let result = load_config(dir.path(), Some(&explicit));

        assert!(matches!(result, Err(ConfigError::Read { path, .. }) if path == explicit));
        Ok(())
    }

    #[test]
    fn explicit_file_overrides_default_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(crate::CONFIG_FILE_NAME), "seed-env = \"A\"")?;
        let explicit = dir.path().join("ci.toml");
        fs::write(&explicit, "seed-env = \"B\"")?;

        let config = load_config(dir.path(), Some(&explicit))?;

        assert_eq!(config.seed_env(), "B");
        Ok(())
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_config("runner = ", Path::new("/repo/.changed-tests.toml"))
            .expect_err("invalid toml should fail");

        assert!(err.to_string().contains("/repo/.changed-tests.toml"));
    }
}

mod args;
mod naming;
mod seed;
mod selection;

pub const DEFAULT_SOURCE_SUFFIX: &str = ".py";
pub const DEFAULT_TEST_SUFFIX: &str = "_test.py";
pub const DEFAULT_INITIALIZER: &str = "__init__.py";
pub const DEFAULT_GLOBAL_TEST: &str = "cirq-core/cirq/protocols/json_serialization_test.py";
pub const DEFAULT_REVISIONS: &[&str] = &["upstream/main", "origin/main", "main"];
pub const DEFAULT_RUNNER: &[&str] = &["pytest"];
pub const DEFAULT_SEED_ENV: &str = "CIRQ_TESTING_RANDOM_SEED";

pub use args::InvocationArgs;
pub use naming::{GlobalTestRule, TestNaming};
pub use seed::{RandomSeed, SeedSource};
pub use selection::{SelectionRules, TestSelection};

mod file_probe;
mod git_provider;
mod test_runner;

pub use file_probe::FileProbe;
pub use git_provider::GitProvider;
pub use test_runner::TestRunner;

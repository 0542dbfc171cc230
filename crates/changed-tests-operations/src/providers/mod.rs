mod file_probe;
mod git;
mod process;

pub use file_probe::FileSystemProbe;
pub use git::Git2Provider;
pub use process::ProcessTestRunner;

mod resolve;
mod run;
mod select;

pub use resolve::{ResolveInput, ResolveRevisionOperation};
pub use run::{RunInput, RunOperation, RunOutcome};
pub use select::{SelectInput, SelectOperation, SelectOutput};

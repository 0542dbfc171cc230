/// Splits the raw positional arguments into an optional revision and the
/// arguments forwarded to the test runner.
///
/// The first argument is the revision unless it looks like a flag, in which
/// case every argument belongs to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationArgs {
    pub revision: Option<String>,
    pub runner_args: Vec<String>,
}

impl InvocationArgs {
    #[must_use]
    pub fn parse(args: Vec<String>) -> Self {
        let mut args = args.into_iter();
        match args.next() {
            None => Self::default(),
            Some(first) if is_flag_like(&first) => Self {
                revision: None,
                runner_args: std::iter::once(first).chain(args).collect(),
            },
            Some(first) if first.is_empty() => Self {
                revision: None,
                runner_args: args.collect(),
            },
            Some(first) => Self {
                revision: Some(first),
                runner_args: args.collect(),
            },
        }
    }
}

#[must_use]
fn is_flag_like(arg: &str) -> bool {
    arg.starts_with('-')
}

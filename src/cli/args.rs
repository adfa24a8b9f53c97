//! Command-line argument parsing.
//!
//! Hand-parsed: the flag set is small and fixed.

use crate::preview::Viewer;
use crate::spec::SpecFormat;

/// Options that shape the TUI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub format: Option<SpecFormat>,
    pub viewer: Option<Viewer>,
    pub no_preview_server: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(RunOptions),
    /// Unusable arguments, with the reason
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else. Values may be given
/// as `--format json` or `--format=json`.
///
/// # Examples
///
/// ```
/// use specdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["specdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    let mut options = RunOptions::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg, None),
        };
        match flag.as_str() {
            "--format" | "--viewer" => {
                let Some(value) = inline.or_else(|| iter.next()) else {
                    return CliCommand::Invalid(format!("{} requires a value", flag));
                };
                let parsed = if flag == "--format" {
                    value.parse().map(|f| options.format = Some(f))
                } else {
                    value.parse().map(|v| options.viewer = Some(v))
                };
                if let Err(reason) = parsed {
                    return CliCommand::Invalid(reason);
                }
            }
            "--no-preview-server" => options.no_preview_server = true,
            other => return CliCommand::Invalid(format!("unknown argument '{}'", other)),
        }
    }
    CliCommand::RunTui(options)
}

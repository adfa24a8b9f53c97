//! CLI entry handling.
//!
//! Called early in main() so `--version`/`--help` exit before the terminal
//! is touched:
//!
//! ```ignore
//! use specdeck::cli::{parse_args, run_cli_command};
//!
//! let options = match run_cli_command(parse_args(std::env::args())) {
//!     Ok(options) => options,
//!     Err(message) => {
//!         eprintln!("{}", message);
//!         std::process::exit(2);
//!     }
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, USAGE, VERSION};

/// Execute informational commands; return the run options otherwise.
///
/// `Version` and `Help` never return. `Invalid` yields the message to print.
pub fn run_cli_command(command: CliCommand) -> Result<RunOptions, String> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui(options) => Ok(options),
        CliCommand::Invalid(reason) => Err(format!(
            "error: {}\n\nRun 'specdeck --help' for usage.",
            reason
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_options() {
        let options = RunOptions {
            no_preview_server: true,
            ..RunOptions::default()
        };
        assert_eq!(run_cli_command(CliCommand::RunTui(options.clone())), Ok(options));
    }

    #[test]
    fn test_invalid_returns_message() {
        let err = run_cli_command(CliCommand::Invalid("unknown argument '-x'".to_string()))
            .unwrap_err();
        assert!(err.contains("unknown argument '-x'"));
        assert!(err.contains("--help"));
    }
}

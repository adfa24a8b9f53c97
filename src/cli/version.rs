//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: specdeck [OPTIONS]

Edit an OpenAPI specification in the terminal, with an LLM assistant and a
browser preview.

Options:
  --format <yaml|json>              Initial text format (default: yaml)
  --viewer <redoc|swagger|rapidoc>  Initial preview viewer (default: redoc)
  --no-preview-server               Do not start the local preview server
  -h, --help                        Print help
  -V, --version                     Print version

Environment:
  OPENAI_API_KEY            API key for the assistant
  SPECDECK_OPENAI_BASE_URL  Chat completions base URL
  SPECDECK_MODEL            Model name (default: gpt-3.5-turbo)
  SPECDECK_PREVIEW_PORT     Preview server port (default: ephemeral)
  SPECDECK_LOG              Log filter (default: specdeck=info)
";

pub fn version_line() -> String {
    format!("specdeck {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("specdeck "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--format", "--viewer", "--no-preview-server", "--help", "--version"] {
            assert!(USAGE.contains(flag), "{}", flag);
        }
    }
}

//! Host argument parsing via clap.
//!
//! Only the host's own options are interpreted here; every other token is
//! passed through untouched for the dispatcher to tokenize.

use clap::Parser;

/// Demo application built on the kli toolkit.
#[derive(Debug, Parser)]
#[command(name = "kli", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Path to config file (default: ./kli.toml or ~/.config/kli/kli.toml).
    #[arg(long = "kli-config", value_name = "PATH")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Command and arguments handed to the dispatcher.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn host_options_are_consumed() {
        let args = Args::parse_from(["kli", "--kli-config", "my.toml", "--no-color", "greet", "Bob"]);
        assert_eq!(args.config.as_deref(), Some("my.toml"));
        assert!(args.no_color);
        assert_eq!(args.tokens, ["greet", "Bob"]);
    }

    #[test]
    fn command_options_pass_through() {
        let args = Args::parse_from(["kli", "greet", "--shout", "-h", "--name=Ann"]);
        assert_eq!(args.tokens, ["greet", "--shout", "-h", "--name=Ann"]);
        assert!(args.config.is_none());
    }

    #[test]
    fn no_tokens_means_interactive() {
        let args = Args::parse_from(["kli"]);
        assert!(args.tokens.is_empty());
        assert!(!args.no_color);
    }
}

use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version = get_version())]
#[command(about = "Personal library catalog for the command line", long_about = None)]
pub struct Cli {
    /// CSV file holding the catalog [default: library.csv]
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Directory containing config.json
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(cli.store.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_store_and_verbose() {
        let cli =
            Cli::try_parse_from(["bookshelf", "--store", "books.csv", "-v"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("books.csv")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["bookshelf", "list"]).is_err());
    }
}

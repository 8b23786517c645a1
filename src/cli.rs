use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "shelfmark",
    about = "A personal-library cataloger with typo-tolerant search"
)]
pub struct Cli {
    /// Override the library file path
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log warnings and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a document to the library
    Add(AddArgs),
    /// Search the library
    Search(SearchArgs),
    /// List every document
    List(ListArgs),
    /// Show one document by id
    Show(ShowArgs),
    /// Replace fields of an existing document
    Edit(EditArgs),
    /// Remove a document by id
    Rm(RmArgs),
    /// Show library path and statistics
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Add --

#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Document title
    pub name: String,

    /// Author (repeatable)
    #[arg(short = 'a', long = "author")]
    pub authors: Vec<String>,

    /// Source: a path, URL, or opaque reference (repeatable)
    #[arg(short = 's', long = "source")]
    pub sources: Vec<String>,

    /// Tag (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Language
    #[arg(short = 'l', long, default_value = "")]
    pub lang: String,
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Query tokens: bare text, or prefixed like title:, au:, tag:, id:
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Whole-string matches only; no substring or fuzzy matching
    #[arg(short, long)]
    pub exact: bool,

    /// Number of results to return
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Return every match, ignoring --count
    #[arg(long)]
    pub all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output only document ids (one per line)
    #[arg(long)]
    pub ids: bool,
}

// -- List --

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Show --

#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Document id
    pub id: u64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Edit --

#[derive(Debug, Parser)]
pub struct EditArgs {
    /// Document id
    pub id: u64,

    /// Replace the title
    #[arg(long)]
    pub name: Option<String>,

    /// Replace the author list (repeatable)
    #[arg(short = 'a', long = "author")]
    pub authors: Vec<String>,

    /// Replace the source list (repeatable)
    #[arg(short = 's', long = "source")]
    pub sources: Vec<String>,

    /// Replace the tag list (repeatable)
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Replace the language
    #[arg(short = 'l', long)]
    pub lang: Option<String>,
}

// -- Rm --

#[derive(Debug, Parser)]
pub struct RmArgs {
    /// Document id
    pub id: u64,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "shelfmark",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["shelfmark", "search", "go", "au:pike"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, vec!["go", "au:pike"]);
                assert_eq!(args.count, 10);
                assert!(!args.exact);
                assert!(!args.all);
                assert!(!args.json);
                assert!(!args.ids);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_add_with_repeated_fields() {
        let cli = Cli::parse_from([
            "shelfmark", "add", "SICP", "-a", "Abelson", "-a", "Sussman",
            "-t", "lisp", "-s", "books/sicp.pdf", "-l", "en",
        ]);
        match cli.command {
            Command::Add(args) => {
                assert_eq!(args.name, "SICP");
                assert_eq!(args.authors, vec!["Abelson", "Sussman"]);
                assert_eq!(args.tags, vec!["lisp"]);
                assert_eq!(args.sources, vec!["books/sicp.pdf"]);
                assert_eq!(args.lang, "en");
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn search_requires_at_least_one_token() {
        assert!(Cli::try_parse_from(["shelfmark", "search"]).is_err());
    }

    #[test]
    fn global_library_flag_is_accepted_anywhere() {
        let cli = Cli::parse_from([
            "shelfmark", "list", "--library", "/tmp/lib.json",
        ]);
        assert_eq!(cli.library, Some(PathBuf::from("/tmp/lib.json")));
    }
}

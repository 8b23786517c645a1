use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shelfmark::{
    cli::{
        AddArgs, Cli, Command, EditArgs, ListArgs, RmArgs, ShowArgs,
        StatusArgs,
    },
    data_dir,
    error::{Error, Result},
    library::{Library, Source},
    persist, search,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("SHELFMARK_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Open the library file. `allow_missing` lets commands that can start
/// from an empty library (add, status) run before the file exists.
fn open_library(path: &Path, allow_missing: bool) -> Result<Library> {
    if path.exists() {
        persist::load(path)
    } else if allow_missing {
        Ok(Library::new())
    } else {
        Err(Error::Persistence {
            path: path.to_path_buf(),
            reason: "file does not exist".to_string(),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let path = data_dir::resolve_library_path(cli.library.as_deref())?;

    match cli.command {
        Command::Add(args) => {
            let mut library = open_library(&path, true)?;
            cmd_add(&mut library, args);
            persist::save(&path, &library)?;
        }
        Command::Search(args) => {
            let library = open_library(&path, false)?;
            let hits = search::execute_search(&args, &library)?;
            if args.json {
                search::format_json(&hits)?;
            } else if args.ids {
                search::format_ids(&hits);
            } else {
                search::format_human(&hits);
            }
        }
        Command::List(args) => {
            let library = open_library(&path, false)?;
            cmd_list(&library, &args)?;
        }
        Command::Show(args) => {
            let library = open_library(&path, false)?;
            cmd_show(&library, &args)?;
        }
        Command::Edit(args) => {
            let mut library = open_library(&path, false)?;
            cmd_edit(&mut library, args)?;
            persist::save(&path, &library)?;
        }
        Command::Rm(args) => {
            let mut library = open_library(&path, false)?;
            cmd_rm(&mut library, &args);
            persist::save(&path, &library)?;
        }
        Command::Status(args) => {
            let library = open_library(&path, true)?;
            cmd_status(&library, &path, &args);
        }
        Command::Completions(_) => unreachable!("handled above"),
    }

    Ok(())
}

fn cmd_add(library: &mut Library, args: AddArgs) {
    let sources = args.sources.iter().map(|s| Source::classify(s)).collect();
    let doc = library.add(args.name, args.authors, sources, args.tags, args.lang);
    println!("Added #{} {}", doc.id, doc.name);
}

fn cmd_list(library: &Library, args: &ListArgs) -> Result<()> {
    if args.json {
        let docs: Vec<_> = library.iter().collect();
        println!("{}", serde_json::to_string_pretty(&docs)?);
        return Ok(());
    }

    if library.is_empty() {
        println!("Library is empty.");
        return Ok(());
    }
    for doc in library.iter() {
        print_document(doc);
    }
    println!("\n{} document(s)", library.len());
    Ok(())
}

fn cmd_show(library: &Library, args: &ShowArgs) -> Result<()> {
    let doc = library.get(args.id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(doc)?);
    } else {
        print_document(doc);
    }
    Ok(())
}

fn cmd_edit(library: &mut Library, args: EditArgs) -> Result<()> {
    let mut doc = library.get(args.id)?.clone();

    if let Some(name) = args.name {
        doc.name = name;
    }
    if !args.authors.is_empty() {
        doc.authors = args.authors;
    }
    if !args.sources.is_empty() {
        doc.sources =
            args.sources.iter().map(|s| Source::classify(s)).collect();
    }
    if !args.tags.is_empty() {
        doc.tags = args.tags;
    }
    if let Some(lang) = args.lang {
        doc.lang = lang;
    }

    let id = doc.id;
    library.update(doc)?;
    println!("Updated #{id}");
    Ok(())
}

fn cmd_rm(library: &mut Library, args: &RmArgs) {
    // Removal is idempotent; an absent id is not an error.
    if library.remove(args.id) {
        println!("Removed #{}", args.id);
    } else {
        println!("Nothing to remove: no document #{}", args.id);
    }
}

fn cmd_status(library: &Library, path: &Path, args: &StatusArgs) {
    if args.json {
        println!(
            "{{\"library\":{},\"documents\":{}}}",
            serde_json::json!(path.display().to_string()),
            library.len()
        );
    } else {
        println!("Library: {}", path.display());
        println!("Documents: {}", library.len());
    }
}

fn print_document(doc: &shelfmark::Document) {
    println!("#{} {}", doc.id, doc.name);
    if !doc.authors.is_empty() {
        println!("  authors: {}", doc.authors.join(", "));
    }
    for source in &doc.sources {
        println!("  source: {source}");
    }
    if !doc.tags.is_empty() {
        println!("  tags: {}", doc.tags.join(", "));
    }
    if !doc.lang.is_empty() {
        println!("  lang: {}", doc.lang);
    }
}

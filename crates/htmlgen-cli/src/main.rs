use clap::{Parser, Subcommand};
use htmlgen::{Document, Generator};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "htmlgen")]
#[command(about = "htmlgen: build HTML 5 documents from the command line")]
#[command(version)]
struct Cli {
    /// Log more detail (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a complete HTML document
    Page {
        /// Document title
        #[arg(long, default_value = "")]
        title: String,

        /// Document language
        #[arg(long, default_value = "en")]
        lang: String,

        /// Stylesheet URL (repeatable)
        #[arg(long = "stylesheet")]
        stylesheets: Vec<String>,

        /// Script URL (repeatable)
        #[arg(long = "script")]
        scripts: Vec<String>,

        /// Read additional body content from a file
        #[arg(long)]
        body_file: Option<String>,

        /// Insert body content as markup instead of escaping it
        #[arg(long)]
        raw: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Body text
        text: Vec<String>,
    },

    /// Escape text for use in HTML
    Escape {
        /// Escape for a double-quoted attribute value instead of content
        #[arg(long)]
        attribute: bool,

        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Page {
            title,
            lang,
            stylesheets,
            scripts,
            body_file,
            raw,
            output,
            text,
        } => {
            let mut body = text;
            if let Some(path) = body_file {
                body.push(read_source(&path));
            }
            let page = PageOptions {
                title,
                lang,
                stylesheets,
                scripts,
                body,
                raw,
            };
            cmd_page(&page, output.as_deref());
        }
        Command::Escape { attribute, text } => cmd_escape(&text, attribute),
    }
}

/// Level from `-v` flags, overridden by `RUST_LOG` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

struct PageOptions {
    title: String,
    lang: String,
    stylesheets: Vec<String>,
    scripts: Vec<String>,
    body: Vec<String>,
    raw: bool,
}

fn build_page(page: &PageOptions) -> Document {
    let mut doc = Document::with_title(&page.title).with_language(&page.lang);
    doc.add_stylesheets(page.stylesheets.iter().map(String::as_str));
    doc.add_scripts(page.scripts.iter().map(String::as_str));
    for text in &page.body {
        if page.raw {
            doc.append_body_raw(text);
        } else {
            doc.append_body(text);
        }
    }
    tracing::debug!(
        stylesheets = page.stylesheets.len(),
        scripts = page.scripts.len(),
        body = page.body.len(),
        "built page"
    );
    doc
}

fn cmd_page(page: &PageOptions, output: Option<&Path>) {
    let html = build_page(page).render();

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &html) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
            eprintln!("Built: {}", path.display());
        }
        None => println!("{html}"),
    }
}

fn cmd_escape(text: &str, attribute: bool) {
    if attribute {
        println!("{}", htmlgen::escape_attribute(text));
    } else {
        println!("{}", htmlgen::escape_text(text));
    }
}

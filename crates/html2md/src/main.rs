//! html2md - extract Markdown-flavored text from HTML

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use html2md::{dump_tree, Html2MdService, Options, Source};

#[derive(Parser)]
#[command(name = "html2md")]
#[command(
    version,
    about = "Extract text from HTML with blank-line separated blocks and Markdown tables",
    long_about = None
)]
#[command(after_help = "EXAMPLES:
    html2md page.html                      Convert a local file
    cat page.html | html2md -              Convert standard input
    html2md -u https://example.com         Fetch and convert a web page
    html2md -s \"<h1>Test</h1><p>Text</p>\"  Convert a literal string")]
struct Cli {
    /// HTML file, or '-' for standard input
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// URL to fetch
    #[arg(short, long)]
    url: Option<String>,

    /// HTML string (or path of an HTML file)
    #[arg(short, long)]
    string: Option<String>,

    /// Write the result to a file instead of standard output
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Drop this tag and its content (repeatable)
    #[arg(long = "ignore", value_name = "TAG")]
    ignore: Vec<String>,

    /// Render this tag even if it is ignored by default (repeatable)
    #[arg(long = "keep", value_name = "TAG")]
    keep: Vec<String>,

    /// Print the parsed tree to standard error
    #[arg(long)]
    dump_tree: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::default().with_dump_tree(self.dump_tree);
        for tag in &self.ignore {
            options = options.ignore(tag);
        }
        for tag in &self.keep {
            options = options.unignore(tag);
        }
        options
    }

    fn source(&self) -> Source {
        Source::from_args(
            self.input.as_deref(),
            self.url.as_deref(),
            self.string.as_deref(),
        )
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = cli.source().read()?;
    let service = Html2MdService::with_options(cli.options());

    let document = service.parse(&html);
    if cli.dump_tree {
        eprintln!("{}", dump_tree(&document));
    }

    let mut text = service.convert_document(&document);
    text.push('\n');

    match &cli.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("cannot write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("cannot write to standard output")?;
        }
    }

    Ok(())
}

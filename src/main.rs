use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use make_abnf::{Config, DEFAULT_OUTPUT, DEFAULT_SOURCE, Layout, run};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar source carrying the ABNF directives
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// File the rendered ABNF is written to
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Blank columns before definitions and block comments
    #[arg(long, value_name = "N", default_value_t = Layout::MARGIN)]
    margin: usize,

    /// Column at which `=` ends on rule definitions
    #[arg(long, value_name = "N", default_value_t = Layout::INDENT)]
    indent: usize,

    /// Column used to align keyword comments
    #[arg(long, value_name = "N", default_value_t = Layout::KEYWORD_INDENT)]
    keyword_indent: usize,

    /// Log progress
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            source: args.source,
            output: args.output,
            layout: Layout {
                margin: args.margin,
                indent: args.indent,
                keyword_indent: args.keyword_indent,
            },
        }
    }
}

fn main() {
    let args = Args::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(args);
    match run(&config) {
        Ok(summary) => {
            println!(
                "{} created ({} grammar line{}, {} keyword{}).",
                summary.output.display(),
                summary.grammar_lines,
                if summary.grammar_lines == 1 { "" } else { "s" },
                summary.keywords,
                if summary.keywords == 1 { "" } else { "s" }
            );
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

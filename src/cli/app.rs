//! Main CLI application structure
//!
//! The binary runs a fixed walkthrough of the store in a single process:
//! a handful of adds, a listing, a completion, a completion of an unknown
//! ID, and a final listing. There is no persistence, so there is nothing a
//! second invocation could usefully operate on.

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::sink::ConsoleSink;
use crate::domain::{Filter, ItemId, Priority, TodoStore};
use crate::render;

#[derive(Parser)]
#[command(name = "tick")]
#[command(author, version, about = "A minimal in-memory to-do list demo")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// View shown in the final listing; unknown keywords mean "all"
    #[arg(long, default_value = "all", value_parser = parse_filter)]
    pub filter: Filter,
}

fn parse_filter(s: &str) -> Result<Filter, std::convert::Infallible> {
    Ok(Filter::from_keyword(s))
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tick starting");
    demo(&output, cli.filter)?;
    output.verbose("done");

    Ok(())
}

/// Runs the canonical walkthrough against a fresh store
fn demo(output: &Output, filter: Filter) -> Result<()> {
    let mut store = TodoStore::with_sink(Box::new(ConsoleSink::new(output.is_text())));

    store.add("Learn Rust", Priority::High);
    store.add("Build a web app", Priority::Medium);
    store.add("Write tests", Priority::High);
    store.add("Deploy to production", Priority::Low);

    if output.is_text() {
        output.blank();
        print!("{}", render::render(&store.list(Filter::All)));
        output.blank();
    }

    let outcome = store.complete(ItemId::new(1));
    output.verbose(&format!("complete(1) -> {:?}", outcome));

    let outcome = store.complete(ItemId::new(99));
    output.verbose(&format!("complete(99) -> {:?}", outcome));

    if output.is_json() {
        output.data(&store.list(filter));
    } else {
        output.blank();
        print!("{}", render::render(&store.list(filter)));
    }

    Ok(())
}

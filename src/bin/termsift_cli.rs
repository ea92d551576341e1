//! termsift CLI - search query normalizer and filter builder
//!
//! # Examples
//!
//! ```bash
//! # Show the terms a query splits into
//! termsift normalize '  some random  words "with   quotes  "'
//!
//! # Build the filter expression over two fields
//! termsift build 'red car' -f title -f brand__title
//!
//! # Filter JSON Lines records
//! termsift filter 'red car' -i products.jsonl -f title -f brand__title
//!
//! # Emit PostgreSQL
//! termsift sql 'red car' -f title --dialect postgres
//! ```

use clap::Parser;
use termsift::cli::output::print_error;
use termsift::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "termsift=warn".into());
    let json = std::env::var("TERMSIFT_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    // Logs go to stderr so stdout stays clean for command output
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

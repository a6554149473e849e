// src/bin/localize_html.rs
//! Rewrites every `<time datetime="...">` element of an HTML file (or stdin)
//! to its local time-of-day label and writes the result to stdout.
use anyhow::{Context, Result};
use std::{env, io::Read};
use timelabel::application::{queries::labels::LocalizeOptions, services::ApplicationServices};
use timelabel::config::AppConfig;
use timelabel::infrastructure::document::HtmlDocument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "localize failed");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    let source = match env::args().nth(1) {
        Some(path) if path != "-" => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    let services = ApplicationServices::new(config.timezone(), config.label_options());
    let mut document = HtmlDocument::parse(source);
    let report = services
        .label_queries
        .localize_document(&mut document, LocalizeOptions::default());

    print!("{}", document.render());
    tracing::info!(total = report.total(), "done");
    Ok(())
}

fn init_tracing() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

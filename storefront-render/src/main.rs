//! storefront-render binary entry point
//!
//! Developed by The Go Commerce Team (c)2025

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use storefront_render::{MetaOverrides, default_out, resolve_meta, write_page};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "storefront-render")]
#[command(about = "Pre-render the Go Commerce landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file (parent directories are created)
    #[arg(short, long, default_value_os_t = default_out())]
    out: PathBuf,

    /// JSON file with page metadata (title, description, lang)
    #[arg(short, long)]
    meta: Option<PathBuf>,

    /// Override the document title
    #[arg(long)]
    title: Option<String>,

    /// Override the meta description
    #[arg(long)]
    description: Option<String>,

    /// Override the `<html lang>` attribute
    #[arg(long)]
    lang: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let overrides = MetaOverrides {
        title: args.title,
        description: args.description,
        lang: args.lang,
    };
    let meta = resolve_meta(args.meta.as_deref(), overrides).context("resolving page metadata")?;
    info!(title = %meta.title, lang = %meta.lang, "rendering landing page");

    let bytes = write_page(&meta, &args.out)
        .with_context(|| format!("rendering to {}", args.out.display()))?;
    info!("Wrote {} ({} bytes)", args.out.display(), bytes);

    Ok(())
}

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Publishing tools for the Meridian site: content validation and static
//! path manifest generation.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use meridian_catalog::{CatalogGraph, Locale};
use meridian_content::{ContentResolver, loader};
use meridian_manifest::write_manifests;

#[derive(Parser)]
#[command(name = "meridian", about = "Publishing tools for the Meridian site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the catalog and every content bundle; the publish gate.
    Validate,
    /// Enumerate every valid path and write the JSON manifests.
    Manifest(ManifestArgs),
}

#[derive(Args)]
struct ManifestArgs {
    /// Directory the manifests are written into; created when missing.
    #[arg(long, value_name = "DIR")]
    out: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli.command) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Validate => validate(),
        Command::Manifest(args) => manifest(args),
    }
}

fn build_resolver() -> Result<ContentResolver> {
    let catalog = CatalogGraph::new().context("catalog validation failed")?;
    Ok(ContentResolver::new(Arc::new(catalog)))
}

fn validate() -> Result<()> {
    let resolver = build_resolver()?;
    let catalog = resolver.catalog();

    for locale in Locale::ALL {
        let loaded = loader::load(*locale)
            .with_context(|| format!("bundle for locale '{locale}' failed to load"))?;
        if loaded.fallback {
            bail!("bundle for locale '{locale}' is unavailable");
        }
        for (industry, content) in &loaded.dictionary.industries {
            let expected = catalog.solutions_for_industry(industry);
            let agrees = content
                .solutions
                .iter()
                .map(String::as_str)
                .eq(expected.iter().copied());
            if !agrees {
                bail!(
                    "locale '{locale}' industry '{industry}' lists solutions that diverge from the catalog"
                );
            }
        }
    }

    println!(
        "ok: {} locales, {} solutions, {} industries, {} markets",
        Locale::ALL.len(),
        catalog.solutions().len(),
        catalog.industries().len(),
        catalog.markets().len()
    );
    Ok(())
}

fn manifest(args: &ManifestArgs) -> Result<()> {
    let resolver = build_resolver()?;
    fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create '{}'", args.out.display()))?;
    let summary = write_manifests(&resolver, &args.out)
        .with_context(|| format!("failed to write manifests into '{}'", args.out.display()))?;
    println!(
        "wrote {} solution paths, {} industry paths, {} page paths to {}",
        summary.solutions,
        summary.industries,
        summary.pages,
        args.out.display()
    );
    Ok(())
}

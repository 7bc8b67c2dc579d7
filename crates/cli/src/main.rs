//! openapi-rdf CLI
//!
//! Command-line interface for converting Swagger/OpenAPI documents to RDF.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use openapi_rdf_generator::{OutputFormat, RdfGenerator};
use openapi_rdf_parser::openapi::base_iri;
use openapi_rdf_parser::{ApiLoader, GraphStats, MapperOptions};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
const LOG_ENV: &str = "OPENAPI_RDF_LOG";

#[derive(Parser)]
#[command(name = "openapi-rdf")]
#[command(version, about = "Convert Swagger/OpenAPI documents into RDF ontologies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an API document into an RDF file
    #[command(after_help = "EXAMPLES:\n  \
        # Convert to RDF/XML\n  \
        openapi-rdf convert petstore.json petstore.rdf\n\n  \
        # Convert to Turtle under a chosen base IRI\n  \
        openapi-rdf convert petstore.json petstore.ttl \\\n    \
        --format turtle \\\n    \
        --base https://example.org/petstore/\n\n  \
        # Include OWL declarations of the vocabulary terms used\n  \
        openapi-rdf convert petstore.json petstore.rdf --vocabulary")]
    Convert {
        /// Path to the Swagger 2.0 / OpenAPI 3.x JSON document
        input: PathBuf,

        /// Path of the RDF file to write
        output: PathBuf,

        /// Output serialization
        #[arg(short, long, value_enum, default_value_t = FormatArg::Rdfxml)]
        format: FormatArg,

        /// Base IRI for generated resources (derived from the title if not specified)
        #[arg(short, long)]
        base: Option<String>,

        /// Declare the classes and properties used as OWL terms
        #[arg(long)]
        vocabulary: bool,
    },

    /// Map an API document and print a summary of the resulting graph
    #[command(after_help = "EXAMPLES:\n  \
        openapi-rdf inspect petstore.json\n\n  \
        # Show mapping details\n  \
        openapi-rdf inspect petstore.json --verbose")]
    Inspect {
        /// Path to the Swagger 2.0 / OpenAPI 3.x JSON document
        input: PathBuf,

        /// Base IRI for generated resources (derived from the title if not specified)
        #[arg(short, long)]
        base: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// RDF/XML
    Rdfxml,
    /// Turtle
    Turtle,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Rdfxml => OutputFormat::RdfXml,
            FormatArg::Turtle => OutputFormat::Turtle,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            base,
            vocabulary,
        } => {
            let options = mapper_options(base).with_vocabulary(vocabulary);
            convert_command(
                input.as_path(),
                output.as_path(),
                format.into(),
                &options,
                cli.verbose,
            )?;
        },
        Commands::Inspect { input, base } => {
            inspect_command(input.as_path(), &mapper_options(base), cli.verbose)?;
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

fn mapper_options(base: Option<String>) -> MapperOptions {
    match base {
        Some(base) => MapperOptions::default().with_base_iri(base),
        None => MapperOptions::default(),
    }
}

fn convert_command(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    options: &MapperOptions,
    verbose: bool,
) -> Result<()> {
    println!(
        "{} Converting {} to {}",
        "→".cyan(),
        input.display().to_string().yellow(),
        format.to_string().yellow()
    );

    let loader = ApiLoader::from_file(input).context("Failed to load API document")?;
    let doc = loader.document();
    let base = base_iri(doc, options).context("Failed to map API document")?;
    if verbose {
        println!("  Spec version: {}", doc.spec_version().unwrap_or("unknown"));
        println!("  Title: {}", doc.title().unwrap_or("(untitled)"));
        println!("  Base IRI: {}", base.as_str());
    }

    println!("{} Mapping document...", "→".cyan());
    let graph = loader
        .map(options)
        .context("Failed to map API document")?;
    let stats = GraphStats::from_graph(&graph);
    println!(
        "{} Mapped {} resources ({} triples)",
        "✓".green(),
        stats.resources,
        stats.triples
    );

    if verbose {
        print_stats(&stats);
    }

    println!("{} Writing {}...", "→".cyan(), output.display());
    RdfGenerator::new(graph)
        .generate_to_file(output, format)
        .context("Failed to write RDF output")?;

    println!("\n{}", "✓ Conversion complete!".green().bold());
    println!("  Output: {}", output.display().to_string().yellow());

    Ok(())
}

fn inspect_command(input: &Path, options: &MapperOptions, verbose: bool) -> Result<()> {
    println!("{} Loading {}...", "→".cyan(), input.display());
    let loader = ApiLoader::from_file(input).context("Failed to load API document")?;
    let doc = loader.document();

    println!("{} Mapping document...", "→".cyan());
    let graph = loader
        .map(options)
        .context("Failed to map API document")?;
    let base = base_iri(doc, options).context("Failed to map API document")?;

    println!("\n{}", "API Document:".bold());
    println!("  Spec version: {}", doc.spec_version().unwrap_or("unknown"));
    println!("  Title: {}", doc.title().unwrap_or("(untitled)"));
    println!("  Base IRI: {}", base.as_str());

    let stats = GraphStats::from_graph(&graph);
    print_stats(&stats);

    if verbose {
        println!("\n{}", "Paths:".bold());
        for (template, item) in &doc.paths {
            let methods: Vec<String> = item
                .operations()
                .into_iter()
                .map(|(method, _)| method.as_upper().to_string())
                .collect();
            println!("  {} {}", template.cyan(), methods.join(", "));
        }
    }

    Ok(())
}

fn print_stats(stats: &GraphStats) {
    println!("\n{}", "Statistics:".bold());
    println!("  Paths: {}", stats.paths);
    println!("  Operations: {}", stats.operations);
    println!("  Parameters: {}", stats.parameters);
    println!("  Request bodies: {}", stats.request_bodies);
    println!("  Responses: {}", stats.responses);
    println!("  Schemas: {}", stats.schemas);
    println!("  Security schemes: {}", stats.security_schemes);
    println!("  Tags: {}", stats.tags);
    println!("  Resources: {}", stats.resources);
    println!("  Triples: {}", stats.triples);
}

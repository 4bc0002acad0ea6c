//! Planning Center POCO generator CLI
//!
//! Command-line harness around the API reference extraction engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use pco_poco_generator_common::PRODUCTS;
use pco_poco_generator_reference::ApiReferenceClient;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_BASE_ADDRESS: &str = "https://api.planningcenteronline.com/";

#[derive(Parser)]
#[command(name = "pco-poco-generator")]
#[command(version, about = "Inspect Planning Center API reference metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base address of the documentation API
    #[arg(long, global = true, default_value = DEFAULT_BASE_ADDRESS)]
    base_address: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products documented upstream
    Products,

    /// List documentation versions for a product
    #[command(after_help = "EXAMPLES:\n  \
        pco-poco-generator versions calendar")]
    Versions {
        /// Product identifier (e.g. "calendar", "people")
        product: String,
    },

    /// List resource types for a product version
    #[command(after_help = "EXAMPLES:\n  \
        pco-poco-generator resources people --version 2022-07-07\n\n  \
        # Latest version when --version is omitted\n  \
        pco-poco-generator resources people")]
    Resources {
        /// Product identifier
        product: String,

        /// Documentation version (latest if not specified)
        #[arg(long)]
        version: Option<String>,
    },

    /// List the attributes of one resource, with mapped types
    #[command(after_help = "EXAMPLES:\n  \
        pco-poco-generator attributes people person --version 2022-07-07")]
    Attributes {
        /// Product identifier
        product: String,

        /// Resource identifier (e.g. "person")
        resource: String,

        /// Documentation version (latest if not specified)
        #[arg(long)]
        version: Option<String>,
    },

    /// Print a resource's example payload
    #[command(after_help = "EXAMPLES:\n  \
        pco-poco-generator example calendar conflict --version 2022-07-07")]
    Example {
        /// Product identifier
        product: String,

        /// Resource identifier
        resource: String,

        /// Documentation version (latest if not specified)
        #[arg(long)]
        version: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base = Url::parse(&cli.base_address)
        .with_context(|| format!("invalid base address: {}", cli.base_address))?;
    let client = ApiReferenceClient::new(base);

    match cli.command {
        Commands::Products => {
            for product in PRODUCTS {
                println!("{product}");
            }
        }
        Commands::Versions { product } => {
            println!("{} Fetching versions for {}", "→".cyan(), product.yellow());
            for version in client.versions(&product).await? {
                println!("{version}");
            }
        }
        Commands::Resources { product, version } => {
            let version = resolve_version(&client, &product, version).await?;
            println!(
                "{} Fetching resources for {} @ {}",
                "→".cyan(),
                product.yellow(),
                version.yellow()
            );
            for resource in client.resources(&product, &version).await? {
                println!("{}  {}", resource.id.green(), resource.description);
            }
        }
        Commands::Attributes {
            product,
            resource,
            version,
        } => {
            let version = resolve_version(&client, &product, version).await?;
            println!(
                "{} Fetching attributes for {}/{} @ {}",
                "→".cyan(),
                product.yellow(),
                resource.yellow(),
                version.yellow()
            );
            for attr in client.attributes(&product, &version, &resource).await? {
                println!(
                    "{}: {}  ({})",
                    attr.name.green(),
                    attr.mapped_type.rust_type(),
                    attr.source_type
                );
            }
        }
        Commands::Example {
            product,
            resource,
            version,
        } => {
            let version = resolve_version(&client, &product, version).await?;
            let example = client.example(&product, &version, &resource).await?;
            println!("{}", serde_json::to_string_pretty(&example)?);
        }
    }

    Ok(())
}

async fn resolve_version(
    client: &ApiReferenceClient,
    product: &str,
    version: Option<String>,
) -> Result<String> {
    match version {
        Some(version) => Ok(version),
        None => client
            .latest_version(product)
            .await
            .with_context(|| format!("could not resolve latest version for {product}")),
    }
}

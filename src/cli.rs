use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::bind::bind;
use crate::load_config::{load_config, BindArgs};

/// CLI for unit-binder: fetch a unit's topic PDFs and bind them into one document.
#[derive(Parser)]
#[clap(
    name = "unit-binder",
    version,
    about = "Download every topic PDF of a unit and bind them into a single document"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download all topic PDFs of a unit and merge them into one file
    Bind {
        /// Unit identifier whose topics are fetched
        #[clap(long)]
        unit: String,
        /// Authorization key; falls back to the BINDER_AUTH_KEY environment variable
        #[clap(long)]
        auth_key: Option<String>,
        /// File name for the merged document
        #[clap(long, default_value = "Merged_Document.pdf")]
        output: String,
        /// Directory for downloaded and merged PDFs
        #[clap(long, default_value = "pdfs")]
        output_dir: PathBuf,
        /// API base URL; falls back to BINDER_API_URL, then the production host
        #[clap(long)]
        api_url: Option<String>,
        /// Write the rendered download link (an HTML anchor) to this file
        #[clap(long)]
        link_out: Option<PathBuf>,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Bind {
            unit,
            auth_key,
            output,
            output_dir,
            api_url,
            link_out,
        } => {
            let config = load_config(BindArgs {
                unit,
                auth_key,
                output,
                output_dir,
                api_url,
            })?;
            config.trace_loaded();

            let client = ApiClient::new(&config.api_url, &config.auth_key);
            println!("Bind starting for unit {}...", config.request.unit_id);

            let report = bind(&client, &config.request).await?;
            match &report.artifact {
                Some(artifact) => {
                    println!(
                        "Bound {} of {} topics into {}",
                        report.downloaded.len(),
                        report.topics_listed,
                        config.request.output_dir.join(&artifact.file_name).display()
                    );
                    if let Some(link_path) = link_out {
                        std::fs::write(&link_path, artifact.download_link("Download the bound PDF"))?;
                        println!("Download link written to {}", link_path.display());
                    }
                }
                None => {
                    println!(
                        "No topic in unit {} carried a PDF; nothing was bound.",
                        report.unit_id
                    );
                }
            }
            Ok(())
        }
    }
}

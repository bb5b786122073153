use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use typeful_client::{ContentClient, DEFAULT_ENVIRONMENT, DEFAULT_HOST};
use typeful_codegen::Generator;

/// Extension trait for exiting on fetch errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typeful_client::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typeful")]
#[command(version)]
#[command(about = "Generate TypeScript definitions from Contentful content types")]
pub(crate) struct Cli {
    /// Contentful space id
    space_id: String,

    /// Content Delivery API access token
    access_token: String,

    /// Output file path
    #[arg(short, long, default_value = "./contentfulTypes.d.ts")]
    output: PathBuf,

    /// Contentful environment id to use
    #[arg(short, long, default_value = DEFAULT_ENVIRONMENT)]
    environment: String,

    /// Name prefix for generated interfaces
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Contentful host (cdn.contentful.com, preview.contentful.com)
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Ignored field(s): a single field id or comma separated list of field ids
    #[arg(short, long, value_delimiter = ',')]
    ignore: Vec<String>,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let client = ContentClient::builder(&self.space_id, &self.access_token)
            .host(&self.host)
            .environment(&self.environment)
            .build();

        // The output file is not touched until the fetch has succeeded.
        let content_types = client.content_types().await.unwrap_or_exit();

        let rendered = Generator::new(&content_types)
            .prefix(&self.prefix)
            .ignore(&self.ignore)
            .render();

        for warning in &rendered.warnings {
            eprintln!("{warning}");
        }

        rendered
            .write_to(&self.output)
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        println!("Generated to {}", self.output.display());

        Ok(())
    }
}

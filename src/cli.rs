use clap::Parser;
use order_lister::application::dto::{OutputFormat, RepositorySource};
use order_lister::config::ConfigFile;
use std::path::PathBuf;

/// List orders from a JSON file or an order service
#[derive(Parser, Debug)]
#[command(name = "order-lister")]
#[command(version)]
#[command(about = "List orders from a JSON file or an order service", long_about = None)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// JSON file containing an array of orders [default: orders.json]
    #[arg(short, long, value_name = "FILE", conflicts_with = "url")]
    pub source: Option<PathBuf>,

    /// Base URL of an order service exposing GET /orders
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./order-lister.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct ListingOptions {
    pub format: OutputFormat,
    pub source: RepositorySource,
    pub output: Option<PathBuf>,
}

impl ListingOptions {
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Self {
        let format = args
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();

        let source = Self::source_from(args.source.clone(), args.url.clone())
            .or_else(|| config.and_then(|c| Self::source_from(c.source.clone(), c.url.clone())))
            .unwrap_or_default();

        let output = args
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()));

        Self {
            format,
            source,
            output,
        }
    }

    fn source_from(path: Option<PathBuf>, url: Option<String>) -> Option<RepositorySource> {
        match (path, url) {
            (Some(path), _) => Some(RepositorySource::File(path)),
            (None, Some(url)) => Some(RepositorySource::Http(url)),
            (None, None) => None,
        }
    }
}

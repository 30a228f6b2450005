//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use vellum_sample::Format;

/// Hypermedia writer demo over the in-memory sample domain.
#[derive(Parser, Debug)]
#[command(name = "vellum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a page of people
    People(PageArgs),
    /// Render a single person
    Person(SingleArgs),
    /// Render a page of blog postings
    BlogPostings(PageArgs),
    /// Render a single blog posting
    BlogPosting(SingleArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Base server URL used for generated links
    #[arg(long, default_value = "http://localhost:8080")]
    pub server_url: String,

    /// Accept-Language header value for localized fields
    #[arg(long)]
    pub accept_language: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::JsonLd)]
    pub format: FormatArg,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct PageArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(long, default_value_t = 5)]
    pub per_page: usize,
}

#[derive(Args, Debug)]
pub struct SingleArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Resource id
    pub id: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    /// JSON-LD with the schema.org vocabulary
    JsonLd,
    /// HAL
    Hal,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::JsonLd => Format::JsonLd,
            FormatArg::Hal => Format::Hal,
        }
    }
}

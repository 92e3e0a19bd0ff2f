//! CLI for md2wx - Markdown to WeChat HTML converter

use clap::Parser;
use md2wx::{ConvertOptions, ImageHandling, MarkdownToWechat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file path
    input: PathBuf,

    /// Output HTML file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Keep links outside WeChat as styled text instead of numbered citations
    #[arg(long)]
    no_footnotes: bool,

    /// Parse plain CommonMark without tables, strikethrough and task lists
    #[arg(long)]
    no_gfm: bool,

    /// Embed local images as base64 data URIs
    #[arg(long, conflicts_with = "skip_images")]
    inline_images: bool,

    /// Drop images from the output
    #[arg(long)]
    skip_images: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let image_handling = if args.skip_images {
        ImageHandling::Skip
    } else if args.inline_images {
        ImageHandling::Inline
    } else {
        ImageHandling::Keep
    };

    let options = ConvertOptions {
        enable_footnotes: !args.no_footnotes,
        gfm: !args.no_gfm,
        image_handling,
    };

    let converter = MarkdownToWechat::new(options);

    match converter.convert(&args.input) {
        Ok(html) => {
            if let Some(output) = args.output {
                if let Err(e) = std::fs::write(&output, &html) {
                    tracing::error!(path = %output.display(), error = %e, "Failed to write output");
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully converted to {:?}", output);
            } else {
                println!("{}", html);
            }
        }
        Err(e) => {
            eprintln!("Error converting Markdown: {}", e);
            std::process::exit(1);
        }
    }
}

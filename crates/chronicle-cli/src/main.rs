use anyhow::{Context, Result};
use chronicle_config::Config;
use chronicle_engine::{
    HtmlRenderer, MarkdownSerializer, RenderOptions, SegmentOptions, TableMatch, parse_table,
    parsing::blocks::kinds::TableMarker, segment_with,
};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chronicle")]
#[command(author, version)]
#[command(about = "Render, inspect and normalize Chronicle markdown notes")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (defaults to ~/.config/chronicle/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a note to an HTML fragment
    Render {
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Print the block list as JSON
    Blocks { file: Option<PathBuf> },
    /// Segment and write the note back as normalized markdown
    Markdown { file: Option<PathBuf> },
    /// List pipe tables with their byte offsets as JSON
    Tables {
        file: Option<PathBuf>,

        /// Print the note with every table replaced by a table marker line
        #[arg(long)]
        markers: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = Config::load_or_default(cli.config.as_deref())?;
    log::debug!("render settings: {:?}", config.render);

    match cli.command {
        Commands::Render { file } => {
            let text = read_input(file.as_deref())?;
            let renderer = HtmlRenderer::with_options(render_options(&config));
            println!("{}", renderer.render(text.as_str()));
        }
        Commands::Blocks { file } => {
            let text = read_input(file.as_deref())?;
            let blocks = segment_with(&text, &segment_options(&config));
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Commands::Markdown { file } => {
            let text = read_input(file.as_deref())?;
            let blocks = segment_with(&text, &segment_options(&config));
            let serializer = MarkdownSerializer::new(config.render.code_fallback_language.clone());
            println!("{}", serializer.serialize(&blocks));
        }
        Commands::Tables { file, markers } => {
            let text = read_input(file.as_deref())?;
            let tables = parse_table(&text);
            log::debug!("found {} table(s)", tables.len());
            if markers {
                print!("{}", replace_with_markers(&text, &tables)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn segment_options(config: &Config) -> SegmentOptions {
    SegmentOptions {
        max_quote_depth: config.render.max_quote_depth,
        soft_breaks: config.render.soft_breaks,
    }
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        image_placeholder_text: config.render.image_placeholder_text.clone(),
        segment: segment_options(config),
    }
}

/// Splices a marker line over each table, keeping the whitespace the table
/// match swallowed on either side.
fn replace_with_markers(text: &str, tables: &[TableMatch]) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for table in tables {
        let raw = table.raw.as_str();
        let lead = &raw[..raw.len() - raw.trim_start().len()];
        let trail = &raw[raw.trim_end().len()..];

        out.push_str(&text[last..table.span.start]);
        out.push_str(lead);
        out.push_str(&TableMarker::encode(&table.header, &table.body)?);
        out.push_str(trail);
        last = table.span.end;
    }
    out.push_str(&text[last..]);
    Ok(out)
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use jsonnav::config::Config;
use jsonnav::file::loader::{load_text_file, load_text_from_stdin};
use jsonnav::{JsonQuery, Navigate, PathCache};

/// jsonnav - Query JSON documents by dot/bracket path
#[derive(Parser)]
#[command(name = "jsonnav")]
#[command(version)]
#[command(about = "Query JSON documents by dot/bracket path", long_about = None)]
struct Cli {
    /// Path to look up, e.g. staff.groups[0].team_leader.name
    path: String,

    /// JSON file to read (omit to read from stdin); .gz files are decompressed
    file: Option<String>,

    /// How to interpret the located value
    #[arg(short = 'a', long = "as", value_enum, default_value_t = OutputKind::Raw)]
    kind: OutputKind,

    /// Printed when a path does not resolve to the requested kind
    #[arg(short, long)]
    default: Option<String>,

    /// Print JSON results on a single line
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    /// Any located node, printed as JSON
    Raw,
    String,
    Int,
    Bool,
    /// Array children, printed as a JSON array
    Array,
    /// Object node, printed as JSON
    Object,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the config file.
fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Resolves one path and renders the result as a line of output.
fn render<Q>(
    query: &Q,
    path: &str,
    kind: OutputKind,
    default: Option<&str>,
    pretty: bool,
) -> Result<String>
where
    Q: Navigate<Node = Value>,
{
    let output = match kind {
        OutputKind::String => query.get_string(path, default.unwrap_or(""))?,
        OutputKind::Int => {
            let fallback = default
                .map(str::parse::<i32>)
                .transpose()
                .context("--default must be a 32-bit integer")?
                .unwrap_or(0);
            query.get_int(path, fallback)?.to_string()
        }
        OutputKind::Bool => {
            let fallback = default
                .map(str::parse::<bool>)
                .transpose()
                .context("--default must be true or false")?
                .unwrap_or(false);
            query.get_bool(path, fallback)?.to_string()
        }
        OutputKind::Raw => match query.resolve(path)? {
            Some(node) => to_json(node, pretty)?,
            None => default.unwrap_or("null").to_string(),
        },
        OutputKind::Array => match query.get_array(path)? {
            Some(items) => to_json(items, pretty)?,
            None => default.unwrap_or("null").to_string(),
        },
        OutputKind::Object => match query.get_object(path)? {
            Some(node) => to_json(node, pretty)?,
            None => default.unwrap_or("null").to_string(),
        },
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    init_logging(&config);

    let text = match &cli.file {
        Some(path) => load_text_file(path)?,
        None => load_text_from_stdin()?,
    };
    let value: Value = serde_json::from_str(&text).context("Failed to parse JSON")?;

    let cache = PathCache::new(config.path_cache_capacity);
    let query = JsonQuery::over(&value).with_cache(Some(&cache));
    let pretty = config.pretty_output && !cli.compact;

    let line = render(&query, &cli.path, cli.kind, cli.default.as_deref(), pretty)
        .with_context(|| format!("Failed to query '{}'", cli.path))?;
    println!("{}", line);

    Ok(())
}

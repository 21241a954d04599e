use clap::{Parser, Subcommand, ValueEnum};
use coparse::coord::formatter;
use coparse::coord::ParseResult;

#[derive(Parser)]
#[command(name = "coparse")]
#[command(about = "Geographic coordinate parser and converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a coordinate query (DD, DM, DMS or UTM)
    Parse {
        /// Coordinate string, e.g. "-74.0060 40.7128" or "18n 583960 4507523"
        query: String,

        /// Include tokenizer and classifier diagnostics
        #[arg(short, long)]
        debug: bool,

        /// Output shape
        #[arg(short, long, value_enum, default_value = "simple")]
        format: OutputFormat,
    },

    /// Parse queries from a file, one per line
    Batch {
        /// Input file path
        file: String,

        /// Include tokenizer and classifier diagnostics
        #[arg(short, long)]
        debug: bool,

        /// Output shape
        #[arg(short, long, value_enum, default_value = "simple")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain success/result/display object
    Simple,
    /// GeoJSON FeatureCollection
    Geojson,
    /// CKAN datastore-like record set
    Ckan,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            query,
            debug,
            format,
        } => match parse_one(&query, debug, format) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Batch {
            file,
            debug,
            format,
        } => match parse_batch(&file, debug, format) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn render(result: &ParseResult, format: OutputFormat) -> serde_json::Value {
    match format {
        OutputFormat::Simple => formatter::to_simple(result),
        OutputFormat::Geojson => formatter::to_geojson(result),
        OutputFormat::Ckan => formatter::to_ckan(result),
    }
}

fn parse_one(
    query: &str,
    debug: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = coparse::parse(query, debug);
    let rendered = render(&result, format);
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}

fn parse_batch(
    file: &str,
    debug: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)?;

    // One result object per non-blank line, in input order
    for line in content.lines() {
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let result = coparse::parse(query, debug);
        let rendered = render(&result, format);
        println!("{}", serde_json::to_string(&rendered)?);
    }

    Ok(())
}

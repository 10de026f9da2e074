use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json2schema_core::{
    io, Converter, ConverterConfig, DefaultPseudoArrayHandler, NeverPseudoArray, UnionKeyword,
};
use serde_json::Value;
use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "json2schema")]
#[command(about = "Infer a JSON Schema from example documents and/or partial schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a JSON Schema from example documents and/or schema fragments
    Infer {
        /// Example JSON document (repeatable)
        #[arg(long = "example")]
        examples: Vec<PathBuf>,

        /// Partial JSON Schema fragment (repeatable)
        #[arg(long = "schema")]
        schemas: Vec<PathBuf>,

        /// Directory of example JSON documents
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Directory of partial JSON Schema fragments
        #[arg(long)]
        schemas_dir: Option<PathBuf>,

        /// Keyword used to group sibling variants when evidence conflicts
        #[arg(long, value_enum, default_value_t = UnionKeywordArg::AnyOf)]
        union_keyword: UnionKeywordArg,

        /// Model all-numeric-key objects as arrays with patternProperties
        #[arg(long, default_value_t = false)]
        pseudo_arrays: bool,

        /// URI emitted as `$schema` at the root
        #[arg(long)]
        schema_version: Option<String>,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum UnionKeywordArg {
    #[value(name = "any-of")]
    AnyOf,
    #[value(name = "one-of")]
    OneOf,
    #[value(name = "all-of")]
    AllOf,
}

impl From<UnionKeywordArg> for UnionKeyword {
    fn from(val: UnionKeywordArg) -> Self {
        match val {
            UnionKeywordArg::AnyOf => UnionKeyword::AnyOf,
            UnionKeywordArg::OneOf => UnionKeyword::OneOf,
            UnionKeywordArg::AllOf => UnionKeyword::AllOf,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Infer {
            examples,
            schemas,
            examples_dir,
            schemas_dir,
            union_keyword,
            pseudo_arrays,
            schema_version,
            output,
        } => {
            let mut config = ConverterConfig {
                union_keyword: union_keyword.into(),
                ..ConverterConfig::default()
            };
            if let Some(version) = schema_version {
                config.schema_version = version;
            }

            let mut converter = Converter::new(config);
            converter = if pseudo_arrays {
                converter.with_pseudo_array_handler(DefaultPseudoArrayHandler)
            } else {
                converter.with_pseudo_array_handler(NeverPseudoArray)
            };

            for path in &examples {
                let value = read_resource(path)?;
                converter.add_example(value);
            }
            for path in &schemas {
                let value = read_resource(path)?;
                converter.add_schema(value);
            }
            if let Some(dir) = &examples_dir {
                for value in io::load_examples_dir(dir).map_err(anyhow::Error::from)? {
                    converter.add_example(value);
                }
            }
            if let Some(dir) = &schemas_dir {
                for value in io::load_schemas_dir(dir).map_err(anyhow::Error::from)? {
                    converter.add_schema(value);
                }
            }

            let schema = converter
                .run()
                .map_err(|e| anyhow::Error::from(e).context("inference failed"))?;

            write_json(&schema, output.as_ref())?;
        }
    }

    Ok(())
}

fn read_resource(path: &PathBuf) -> Result<Value> {
    io::read_json_file(path)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn write_json(val: &Value, path: Option<&PathBuf>) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(stdio::stdout()))
    };

    serde_json::to_writer_pretty(&mut writer, val).context("failed to write JSON")?;
    writeln!(writer).context("failed to write trailing newline")?;

    Ok(())
}

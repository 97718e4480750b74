use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use flatview::{Error, Region, Value};
use flatview_compiler::compile_schema;

#[derive(Parser)]
#[command(name = "flatview-cli")]
#[command(about = "Compile layout schemas and decode flat memory snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a schema string and print its descriptor tree
    Check {
        /// Schema text, e.g. "f{x}f{y}[uu]*{cells}"
        schema: String,
    },

    /// Decode a snapshot file against a schema and print it as JSON
    Decode {
        /// Schema text describing the record layout
        #[arg(short, long)]
        schema: String,

        /// File holding the raw byte region
        #[arg(short, long)]
        input: PathBuf,

        /// Byte offset of the record inside the region
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { schema } => {
            let fields = compile_schema(schema)?;
            println!("{:#?}", fields);
            Ok(())
        }

        Commands::Decode { schema, input, offset } => {
            // Compile first so a defective schema fails before any I/O
            let fields = compile_schema(schema)?;
            let bytes = fs::read(input).map_err(Error::Io)?;

            let decoded = Value::decode(&fields, &Region::new(&bytes), *offset)?;
            for warning in &decoded.warnings {
                eprintln!("warning: {warning}");
            }

            println!("{}", serde_json::to_string_pretty(&decoded.value)?);
            Ok(())
        }
    }
}

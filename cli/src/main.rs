use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use protoline_compiler::{load_schema, to_json, EmptyInput, FieldIdCheck, ParseOptions, ProtoError};

#[derive(Parser)]
#[command(name = "protoline")]
#[command(about = "Read proto2-style schema files into a validated message model", long_about = None)]
struct Cli {
    /// Log parser decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ParseFlags {
    /// Input `.proto` file
    #[arg(short, long)]
    input: PathBuf,

    /// Check field ids after the whole file is read instead of per field
    #[arg(long)]
    deferred_id_check: bool,

    /// Fail when the file declares no message
    #[arg(long)]
    require_messages: bool,
}

impl ParseFlags {
    fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .field_ids(if self.deferred_id_check { FieldIdCheck::Deferred } else { FieldIdCheck::Incremental })
            .empty_input(if self.require_messages { EmptyInput::Reject } else { EmptyInput::Accept })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a `.proto` file and list its messages
    Check {
        #[command(flatten)]
        flags: ParseFlags,
    },

    /// Write the validated message model as JSON
    Dump {
        #[command(flatten)]
        flags: ParseFlags,

        /// Output `.json` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ProtoError> {
    match &cli.command {
        Commands::Check { flags } => {
            let messages = load_schema(&flags.input, flags.options())?;
            for m in &messages {
                println!(
                    "{}.{}: {} field(s), {} enum(s)",
                    m.package.as_deref().unwrap_or("<no package>"),
                    m.name,
                    m.fields.len(),
                    m.enums.len()
                );
            }
            println!("{} is valid", flags.input.display());
            Ok(())
        }

        Commands::Dump { flags, output } => {
            let messages = load_schema(&flags.input, flags.options())?;
            let json = to_json(&messages)?;
            if let Some(out_path) = output {
                fs::write(out_path, &json)?;
                println!("Message model written to {}", out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }
    }
}

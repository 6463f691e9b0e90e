mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bordsbok",
    version,
    about = "Convert seating-card booking reports into one row per guest"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a report workbook and write the restructured xlsx file
    Convert {
        /// Path to the report (xlsx, xlsm, xlsb, xls or ods)
        input_file: PathBuf,

        /// Output xlsx path (default: omstrukturerad_bordsbokning_<today>.xlsx)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Convert a report workbook and print the rows without writing a file
    Preview {
        /// Path to the report (xlsx, xlsm, xlsb, xls or ods)
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Maximum number of table rows to print (0 = all)
        #[arg(short = 'n', long, default_value_t = 50)]
        limit: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Convert { input_file, out } => commands::convert::run(input_file, out),
        Commands::Preview {
            input_file,
            output,
            limit,
        } => commands::preview::run(input_file, &output, limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

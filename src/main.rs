use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use splay_bst::workload::{self, Report, Workload};
use std::path::PathBuf;
use std::process;

/// Times bulk insert, search and delete runs against a splay tree.
#[derive(Parser, Debug)]
#[command(name = "splay-bench", version)]
struct Args {
    /// File with the comma-separated keys to insert
    #[arg(long)]
    insert: PathBuf,

    /// File with the comma-separated keys to search for
    #[arg(long)]
    search: PathBuf,

    /// File with the comma-separated keys to delete
    #[arg(long)]
    delete: PathBuf,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(args: &Args) -> workload::Result<Report> {
    let workload = Workload::load(&args.insert, &args.search, &args.delete)?;
    Ok(workload.run())
}

fn main() {
    let args = Args::parse();
    if TermLogger::init(
        args.level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Failed to initialize logger.");
    }

    match run(&args) {
        Ok(report) => {
            info!("{} keys left after the delete phase.", report.len);
            println!("{}", report);
        },
        Err(error) => {
            error!("{}", error);
            process::exit(1);
        },
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::quantity::lamports::Lamports;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Benchmark figures in TOML. The built-in figures are used when the file does not exist.
    #[clap(
        long = "benchmarks-path",
        env = "BENCHMARKS_PATH",
        default_value = "benchmarks.toml",
        global = true
    )]
    pub benchmarks_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the cost-efficiency dashboard of a transfer.
    #[clap(name = "dashboard")]
    Dashboard(DashboardArgs),

    /// Summarize the benchmark figures.
    #[clap(name = "benchmark")]
    Benchmark,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Transfer amount in lamports.
    #[clap(long = "amount-lamports", env = "AMOUNT_LAMPORTS")]
    pub amount: Lamports,

    /// Number of recipients.
    #[clap(
        long = "recipients",
        default_value = "1",
        env = "RECIPIENTS",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub n_recipients: u32,
}

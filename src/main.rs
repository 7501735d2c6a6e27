#![doc = include_str!("../README.md")]

mod benchmarks;
mod cli;
mod consts;
mod dashboard;
mod efficiency;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    benchmarks::Benchmarks,
    cli::{Args, Command},
    dashboard::display_dashboard,
    prelude::*,
    tables::{build_key_metrics_table, build_transfer_sizes_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let benchmarks = Benchmarks::read_from(&args.benchmarks_path)?;

    match args.command {
        Command::Dashboard(args) => {
            display_dashboard(&benchmarks, args.amount, args.n_recipients);
        }
        Command::Benchmark => {
            println!("{}", build_key_metrics_table(&benchmarks));
            println!("{}", build_transfer_sizes_table(&benchmarks.transfer_sizes));
        }
    }

    Ok(())
}

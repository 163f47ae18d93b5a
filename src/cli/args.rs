use crate::processors::Granularity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "citytemp-processor")]
#[command(about = "Time-bucketed aggregation pipeline for historical city temperature records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate the dataset and write the animation-ready output
    Process {
        #[arg(short, long, help = "Directory containing the dataset CSV")]
        data_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output file path, .json or .csv [default: output/citytemp-aggregated-{YYMMDD}.json]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "yearly")]
        granularity: Granularity,

        #[arg(
            long,
            help = "Let the consumer derive per-period color ranges instead of one global range"
        )]
        per_period_scale: bool,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },

    /// Run the pipeline and report statistics without writing output
    Validate {
        #[arg(short, long, help = "Directory containing the dataset CSV")]
        data_dir: PathBuf,

        #[arg(short, long, value_enum, default_value = "yearly")]
        granularity: Granularity,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,
    },
}

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{Granularity, TemperaturePipeline};
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::DatasetWriter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process {
            data_dir,
            output_file,
            granularity,
            per_period_scale,
            max_workers,
        } => {
            println!("Processing temperature dataset...");
            println!("Data directory: {}", data_dir.display());
            println!("Granularity: {}", granularity.label());

            let progress = ProgressReporter::new_spinner("Running pipeline...");

            let pipeline = build_pipeline(granularity, !per_period_scale, max_workers);
            let output = pipeline.run(&data_dir, Some(&progress))?;

            progress.finish_with_message(&format!(
                "Aggregated {} records from {}",
                output.records.len(),
                output.source_file
            ));

            print_summary(&output);

            let output_file = output_file.unwrap_or_else(generate_default_output_filename);

            // Create output directory if it doesn't exist
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            DatasetWriter::new().write(&output, &output_file)?;
            println!("Wrote {}", output_file.display());
        }

        Commands::Validate {
            data_dir,
            granularity,
            max_workers,
        } => {
            println!("Validating temperature dataset...");
            println!("Data directory: {}", data_dir.display());

            let progress = ProgressReporter::new_spinner("Running pipeline...");

            let pipeline = build_pipeline(granularity, true, max_workers);
            let output = pipeline.run(&data_dir, Some(&progress))?;

            progress.finish_with_message("Validation complete");

            print_summary(&output);
            println!("✅ Dataset produced a complete aggregate");
        }
    }

    Ok(())
}

fn build_pipeline(
    granularity: Granularity,
    use_global_scale: bool,
    max_workers: usize,
) -> TemperaturePipeline {
    TemperaturePipeline::new(granularity)
        .with_global_scale(use_global_scale)
        .with_max_workers(max_workers)
}

fn print_summary(output: &crate::processors::PipelineOutput) {
    let periods: std::collections::BTreeSet<&str> = output
        .records
        .iter()
        .map(|r| r.period_label.as_str())
        .collect();

    println!("\nSource file: {}", output.source_file);
    println!("Granularity: {}", output.granularity.label());
    println!("Aggregated records: {}", output.records.len());
    println!("Periods: {}", periods.len());

    match output.color_range {
        Some(range) => println!("Color range: {:.1}°C to {:.1}°C", range.min, range.max),
        None => println!("Color range: per-period (consumer-derived)"),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so they never interleave with the written output
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use combopt_explorer::config::ExplorerConfig;
use combopt_explorer::explorer::{self, kp, ssp, tsp};
use combopt_explorer::io;
use combopt_explorer::io::cli::{Cli, ProblemVariant};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: ExplorerConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ExplorerConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };

    info!("Successfully parsed ExplorerConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let input_file = args.input_file.as_deref();
    let mut rng = explorer::create_rng(config.prng_seed);

    match args.prob_var {
        ProblemVariant::TravellingSalesmanProblem => {
            let stem = explorer::instance_stem(input_file, "tsp")?;
            let ext_instance = tsp::load_or_generate(input_file, &config.tsp, &mut rng)?;
            let output = tsp::explore(ext_instance, args.algorithm, config)?;
            write_solution(&output, &args.solution_folder, &stem)
        }
        ProblemVariant::KnapsackProblem => {
            let stem = explorer::instance_stem(input_file, "kp")?;
            let ext_instance = kp::load_or_generate(input_file, &config.kp, &mut rng)?;
            let output = kp::explore(ext_instance, config)?;
            write_solution(&output, &args.solution_folder, &stem)
        }
        ProblemVariant::SubsetSumProblem => {
            let stem = explorer::instance_stem(input_file, "ssp")?;
            let puzzle = ssp::load_or_generate(input_file, &config.ssp, &mut rng)?;
            let output = ssp::explore(puzzle, args.selection, config)?;
            write_solution(&output, &args.solution_folder, &stem)
        }
    }
}

fn write_solution(output: &impl serde::Serialize, folder: &Path, stem: &str) -> Result<()> {
    let solution_path = folder.join(format!("sol_{stem}.json"));
    io::write_json(output, &solution_path)
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to load. If absent, one is generated from the config
    #[arg(short, long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub prob_var: ProblemVariant,
    #[arg(short, long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmChoice,
    /// Comma separated pool indices to verify against the subset sum target
    #[arg(long, value_name = "i,j,k", value_delimiter = ',', num_args = 0..)]
    pub selection: Option<Vec<usize>>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProblemVariant {
    #[value(name = "tsp")]
    TravellingSalesmanProblem,
    #[value(name = "kp")]
    KnapsackProblem,
    #[value(name = "ssp")]
    SubsetSumProblem,
}

/// Which TSP solvers to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmChoice {
    Exact,
    NearestNeighbor,
    /// Both, reporting the optimality gap of the heuristic
    Both,
}

impl AlgorithmChoice {
    pub fn runs_exact(&self) -> bool {
        matches!(self, AlgorithmChoice::Exact | AlgorithmChoice::Both)
    }

    pub fn runs_nearest_neighbor(&self) -> bool {
        matches!(self, AlgorithmChoice::NearestNeighbor | AlgorithmChoice::Both)
    }
}

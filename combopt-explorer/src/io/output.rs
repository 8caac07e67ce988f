use serde::{Deserialize, Serialize};

use combopt::probs::kp::io::ext_repr::{ExtKPInstance, ExtKPSolution};
use combopt::probs::ssp::io::ext_repr::{ExtSSPInstance, ExtSSPVerdict};
use combopt::probs::tsp::io::ext_repr::{ExtTSPInstance, ExtTSPSolution};

use crate::config::ExplorerConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TSPOutput {
    #[serde(flatten)]
    pub instance: ExtTSPInstance,
    pub solutions: Vec<ExtTSPSolution>,
    /// Relative excess of the nearest-neighbor tour over the optimum, only when both were computed
    pub gap: Option<f64>,
    pub config: ExplorerConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KPOutput {
    #[serde(flatten)]
    pub instance: ExtKPInstance,
    pub solution: ExtKPSolution,
    pub config: ExplorerConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SSPOutput {
    #[serde(flatten)]
    pub instance: ExtSSPInstance,
    pub verdict: ExtSSPVerdict,
    pub config: ExplorerConfig,
}

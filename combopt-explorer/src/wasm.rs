#![cfg(target_arch = "wasm32")]

use log::{Level, info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Date;

use combopt::probs::kp::io::ext_repr::ExtKPInstance;
use combopt::probs::ssp::io::ext_repr::ExtSSPInstance;
use combopt::probs::tsp::io::ext_repr::ExtTSPInstance;
use combopt::probs::ssp;

use crate::config::ExplorerConfig;
use crate::explorer;
use crate::io::cli::AlgorithmChoice;

fn to_js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{context}: {err}"))
}

fn decode_config(config_json: JsValue) -> ExplorerConfig {
    if config_json.is_null() || config_json.is_undefined() {
        return ExplorerConfig::default();
    }
    from_value(config_json).unwrap_or_else(|e| {
        warn!("Invalid config, using default. Reason: {e}");
        ExplorerConfig::default()
    })
}

/// Without a configured seed, the clock seeds the PRNG so every page load gets a fresh instance
fn create_rng(prng_seed: Option<u64>) -> SmallRng {
    SmallRng::seed_from_u64(prng_seed.unwrap_or_else(|| Date::now() as u64))
}

fn encode(value: &impl Serialize) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| to_js_error("Result encode error", e))
}

#[wasm_bindgen]
pub fn init_logger_wasm() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Info).is_ok() {
        info!("Logger initialized for WASM");
    }
}

#[wasm_bindgen]
pub fn generate_cities_wasm(config_json: JsValue) -> Result<JsValue, JsValue> {
    let config = decode_config(config_json);
    let mut rng = create_rng(config.prng_seed);
    let ext_instance = explorer::tsp::load_or_generate(None, &config.tsp, &mut rng)
        .map_err(|e| to_js_error("Generator error", e))?;
    encode(&ext_instance)
}

/// Solves the instance with the requested algorithm(s): `"exact"`, `"nearest-neighbor"` or `"both"`
#[wasm_bindgen]
pub fn solve_tsp_wasm(
    ext_instance_json: JsValue,
    algorithm: JsValue,
    config_json: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let ext_instance: ExtTSPInstance =
        from_value(ext_instance_json).map_err(|e| to_js_error("ExtTSPInstance decode error", e))?;
    let choice: AlgorithmChoice = if algorithm.is_undefined() || algorithm.is_null() {
        AlgorithmChoice::Both
    } else {
        from_value(algorithm).map_err(|e| to_js_error("Algorithm decode error", e))?
    };
    let config = decode_config(config_json);

    let output = explorer::tsp::explore(ext_instance, choice, config)
        .map_err(|e| to_js_error("Solver error", e))?;
    encode(&output)
}

#[wasm_bindgen]
pub fn solve_knapsack_wasm(
    ext_instance_json: JsValue,
    config_json: JsValue,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let ext_instance: ExtKPInstance =
        from_value(ext_instance_json).map_err(|e| to_js_error("ExtKPInstance decode error", e))?;
    let config = decode_config(config_json);

    let output = explorer::kp::explore(ext_instance, config)
        .map_err(|e| to_js_error("Solver error", e))?;
    encode(&output)
}

/// Generates a pool whose target is reachable. The witness is not revealed.
#[wasm_bindgen]
pub fn generate_number_pool_wasm(config_json: JsValue) -> Result<JsValue, JsValue> {
    let config = decode_config(config_json);
    let mut rng = create_rng(config.prng_seed);
    let instance = ssp::generator::generate_from_config(&mut rng, &config.ssp)
        .map(|(instance, _)| instance)
        .map_err(|e| to_js_error("Generator error", e))?;
    encode(&ssp::io::export_instance(&instance, "generated_ssp"))
}

#[wasm_bindgen]
pub fn verify_subset_sum_wasm(
    ext_instance_json: JsValue,
    selection_json: JsValue,
) -> Result<JsValue, JsValue> {
    let ext_instance: ExtSSPInstance =
        from_value(ext_instance_json).map_err(|e| to_js_error("ExtSSPInstance decode error", e))?;
    let selection: Vec<usize> =
        from_value(selection_json).map_err(|e| to_js_error("Selection decode error", e))?;

    let instance = ssp::io::import(&ext_instance).map_err(|e| to_js_error("Importer error", e))?;
    let verdict = ssp::verifier::verify_subset_sum(&instance, &selection)
        .map_err(|e| to_js_error("Verifier error", e))?;
    encode(&ssp::io::export(&selection, &verdict))
}

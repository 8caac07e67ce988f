use std::sync::LazyLock;

use web_time::Instant;

pub mod config;
pub mod explorer;
pub mod io;
pub mod wasm;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

//! # Cube World Entry Point
//!
//! Runs the headless engine driver.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- path/to/config.json
//! CUBE_WORLD_CONFIG=path/to/config.json cargo run --release
//! ```

use std::path::PathBuf;

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(cube_world::CONFIG_ENV_VAR).ok())
        .map(PathBuf::from);

    if cube_world::run(config_path.as_deref()).is_err() {
        std::process::exit(1);
    }
}

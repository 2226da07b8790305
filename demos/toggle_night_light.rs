//! Example: Toggle Night Light on/off.
//!
//! Run with: `cargo run --example toggle_night_light`

use nightlight_core::{Config, NightLight, NightLightError, open_store};

fn main() -> Result<(), NightLightError> {
    // Initialize logging (optional)
    env_logger::init();

    let config = Config::default();
    let night_light = NightLight::with_config(open_store(&config)?, &config);

    let state = night_light.get_state()?;
    println!(
        "Current state: enabled={}, strength={}% ({}K)",
        state.enabled, state.strength, state.kelvin
    );

    match night_light.toggle() {
        Ok(enabled) => println!("Night Light is now {}", if enabled { "on" } else { "off" }),
        Err(e) => eprintln!("Error toggling Night Light: {}", e),
    }

    Ok(())
}

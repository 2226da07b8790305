//! CLI subcommands.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::Subcommand;
use log::debug;
use nightlight_core::{
    Backend, BlobStore, Config, NightLight, NightLightError, NightLightState, Result, Validation,
    open_store,
};
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn Night Light on
    On,
    /// Turn Night Light off
    Off,
    /// Toggle Night Light on/off
    Toggle,
    /// Show current Night Light status
    Status,
    /// Print `true` or `false` depending on whether Night Light is on
    #[command(hide = true)]
    IsOn,
    /// Show or set strength (0 = coolest, 100 = warmest)
    Strength {
        /// New strength percentage
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: Option<u8>,
    },
    /// Check whether the Night Light registry values exist
    Supported,
}

/// Global command-line flags: write backend, prompting, validation and output format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub reg_exe: bool,
    pub no_prompt: bool,
    pub strict: bool,
    pub json: bool,
}

impl Options {
    fn config(self) -> Config {
        Config::default()
            .with_backend(if self.reg_exe {
                Backend::RegExe
            } else {
                Backend::Direct
            })
            .with_interactive(!self.no_prompt && io::stdin().is_terminal())
            .with_validation(if self.strict {
                Validation::Strict
            } else {
                Validation::Lenient
            })
    }
}

/// Map the legacy single-dash flags (`-turnon`, `-ison`, ...) onto subcommands.
pub fn rewrite_legacy_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| match arg.as_str() {
            "-turnon" => "on".to_string(),
            "-turnoff" => "off".to_string(),
            "-toggle" => "toggle".to_string(),
            "-ison" => "is-on".to_string(),
            _ => arg,
        })
        .collect()
}

#[derive(Serialize)]
struct StatusOutput {
    enabled: bool,
    strength: u8,
    kelvin: f64,
}

impl From<NightLightState> for StatusOutput {
    fn from(state: NightLightState) -> Self {
        Self {
            enabled: state.enabled,
            strength: state.strength,
            kelvin: state.kelvin,
        }
    }
}

pub fn run(command: Option<Command>, options: Options) -> Result<()> {
    let config = options.config();
    debug!("config: {:?}", config);
    let mut out = io::stdout().lock();
    let store = match open_store(&config) {
        Ok(store) => store,
        Err(e) => return report_open_failure(command.as_ref(), e, &mut out),
    };
    let night_light = NightLight::with_config(store, &config);

    let stdin = io::stdin();
    execute(
        &night_light,
        command,
        &config,
        options.json,
        &mut stdin.lock(),
        &mut out,
    )
}

/// `supported` answers `false` when there is no store at all; every other
/// command reports the error.
fn report_open_failure(
    command: Option<&Command>,
    err: NightLightError,
    out: &mut impl Write,
) -> Result<()> {
    match (command, err) {
        (Some(Command::Supported), NightLightError::NotSupported) => {
            writeln!(out, "false")?;
            Ok(())
        }
        (_, err) => Err(err),
    }
}

fn execute<S: BlobStore>(
    night_light: &NightLight<S>,
    command: Option<Command>,
    config: &Config,
    json: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Some(Command::On) => night_light.enable()?,
        Some(Command::Off) => night_light.disable()?,
        Some(Command::Toggle) => {
            let enabled = night_light.toggle()?;
            writeln!(out, "{}", on_off(enabled))?;
        }
        Some(Command::IsOn) => writeln!(out, "{}", night_light.is_enabled()?)?,
        Some(Command::Status) => {
            let state = night_light.get_state()?;
            if json {
                let json = serde_json::to_string_pretty(&StatusOutput::from(state))
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            } else {
                writeln!(out, "Night Light  {}", on_off(state.enabled))?;
                writeln!(out, "Strength     {}% ({}K)", state.strength, state.kelvin)?;
            }
        }
        Some(Command::Strength { percent: None }) => {
            writeln!(out, "{}%", night_light.strength()?)?;
        }
        Some(Command::Strength {
            percent: Some(percent),
        }) => {
            night_light.set_strength(i32::from(percent))?;
        }
        Some(Command::Supported) => writeln!(out, "{}", night_light.supported())?,
        None if config.interactive => {
            let enabled = night_light.is_enabled()?;
            if confirm(enabled, input, out)? {
                night_light.toggle()?;
            }
        }
        None => {
            night_light.toggle()?;
        }
    }
    Ok(())
}

fn confirm(enabled: bool, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    if enabled {
        write!(out, "Night light is enabled.\nDo you want to turn it off? (y/n) ")?;
    } else {
        write!(out, "Night light is disabled.\nDo you want to turn it on? (y/n) ")?;
    }
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightlight_core::{MockStore, StoreKey};

    fn exec(
        night_light: &NightLight<MockStore>,
        command: Option<Command>,
        interactive: bool,
        input: &str,
    ) -> String {
        let config = Config::default().with_interactive(interactive);
        let mut out = Vec::new();
        execute(
            night_light,
            command,
            &config,
            false,
            &mut input.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn legacy_rewrite_leaves_other_args() {
        let args = rewrite_legacy_args(["nightlight", "-turnon", "--strict"].map(String::from));
        assert_eq!(args, ["nightlight", "on", "--strict"]);
    }

    #[test]
    fn toggle_prints_new_state() {
        let night_light = NightLight::new(MockStore::new());
        assert_eq!(exec(&night_light, Some(Command::Toggle), false, ""), "on\n");
        assert_eq!(exec(&night_light, Some(Command::IsOn), false, ""), "true\n");
    }

    #[test]
    fn status_text() {
        let night_light = NightLight::new(MockStore::new());
        let out = exec(&night_light, Some(Command::Status), false, "");
        assert!(out.contains("Night Light  off"));
        assert!(out.contains("Strength     38% (4500K)"));
    }

    #[test]
    fn status_json() {
        let night_light = NightLight::new(MockStore::new());
        let mut out = Vec::new();
        execute(
            &night_light,
            Some(Command::Status),
            &Config::default(),
            true,
            &mut "".as_bytes(),
            &mut out,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["enabled"], false);
        assert_eq!(value["strength"], 38);
    }

    #[test]
    fn strength_show_and_set() {
        let night_light = NightLight::new(MockStore::new());
        exec(
            &night_light,
            Some(Command::Strength { percent: Some(90) }),
            false,
            "",
        );
        assert_eq!(
            exec(&night_light, Some(Command::Strength { percent: None }), false, ""),
            "90%\n"
        );
    }

    #[test]
    fn prompt_yes_toggles() {
        let night_light = NightLight::new(MockStore::new());
        let out = exec(&night_light, None, true, "Y\n");
        assert!(out.starts_with("Night light is disabled."));
        assert!(night_light.is_enabled().unwrap());
    }

    #[test]
    fn prompt_no_leaves_state() {
        let night_light = NightLight::new(MockStore::new());
        exec(&night_light, None, true, "n\n");
        assert!(night_light.store().writes().is_empty());
    }

    #[test]
    fn no_prompt_toggles_silently() {
        let night_light = NightLight::new(MockStore::new());
        assert_eq!(exec(&night_light, None, false, ""), "");
        assert_eq!(night_light.store().writes().len(), 1);
        assert_eq!(night_light.store().writes()[0].0, StoreKey::State);
    }

    #[test]
    fn supported_without_store_prints_false() {
        let mut out = Vec::new();
        report_open_failure(
            Some(&Command::Supported),
            NightLightError::NotSupported,
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "false\n");
    }

    #[test]
    fn other_commands_without_store_fail() {
        let mut out = Vec::new();
        let err = report_open_failure(Some(&Command::Status), NightLightError::NotSupported, &mut out)
            .unwrap_err();
        assert!(matches!(err, NightLightError::NotSupported));
        assert!(out.is_empty());

        let err = report_open_failure(
            Some(&Command::Supported),
            NightLightError::PermissionDenied,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, NightLightError::PermissionDenied));
    }

    #[test]
    fn supported_reports_missing_keys() {
        let night_light = NightLight::new(MockStore::empty());
        assert_eq!(exec(&night_light, Some(Command::Supported), false, ""), "false\n");
    }
}

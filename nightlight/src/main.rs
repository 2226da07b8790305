//! Night Light CLI: turn the Windows blue-light filter on/off and set its strength.

use clap::Parser;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "nightlight",
    version,
    about = "Toggle Windows 10/11 Night Light from the command line"
)]
struct Args {
    /// Write through reg.exe instead of the registry API (for packaged installs)
    #[arg(long, global = true)]
    reg_exe: bool,

    /// Never ask for confirmation
    #[arg(long, global = true)]
    no_prompt: bool,

    /// Require the 43 42 01 00 sequence to appear exactly twice in the state value
    #[arg(long, global = true)]
    strict: bool,

    /// Output as JSON (for status)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<cli::Command>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse_from(cli::rewrite_legacy_args(std::env::args()));
    let options = cli::Options {
        reg_exe: args.reg_exe,
        no_prompt: args.no_prompt,
        strict: args.strict,
        json: args.json,
    };

    if let Err(e) = cli::run(args.command, options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// SPDX-License-Identifier: MPL-2.0
use plant_identifier::app::{self, Flags};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

const USAGE: &str = "\
Usage: plant_identifier [OPTIONS]

Options:
  --lang <LOCALE>               UI language (e.g. en-US, fr)
  --config-dir <DIR>            Directory holding settings.toml
  --camera-permission <MODE>    granted, denied or prompt
  --log-level <LEVEL>           off, error, warn, info, debug or trace
  -h, --help                    Print this help
";

fn parse_args() -> Result<(Flags, LevelFilter), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let log_level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or(LevelFilter::Warn);
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        camera_permission: args
            .opt_value_from_str("--camera-permission")?
            .unwrap_or_default(),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok((flags, log_level))
}

fn main() -> iced::Result {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{USAGE}");
        return Ok(());
    }

    let (flags, log_level) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("plant_identifier")
        .build();
    let _ = TermLogger::init(log_level, log_config, TerminalMode::Stderr, ColorChoice::Auto);

    log::info!("starting with {flags:?}");
    app::run(flags)
}

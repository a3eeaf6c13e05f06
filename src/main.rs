// SPDX-License-Identifier: MPL-2.0
// Prevents a console window from opening on Windows release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced_base64::app::{self, paths, Flags};

const HELP: &str = "\
IcedBase64 - Base64 encoder and decoder

USAGE:
  iced_base64 [OPTIONS] [TEXT]

OPTIONS:
  -h, --help              Print this help and exit
      --lang <LOCALE>     Interface language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml

ARGS:
  <TEXT>                  Text pre-filled in the source field

ENVIRONMENT:
  ICED_BASE64_CONFIG_DIR  Same as --config-dir
  RUST_LOG                Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = parse_flags(args);
    paths::init_cli_override(flags.config_dir.clone());

    log::debug!("starting with {flags:?}");
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Flags {
    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let text = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Flags {
        lang,
        config_dir,
        text,
    }
}

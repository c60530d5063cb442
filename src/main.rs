// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::logging;

const HELP: &str = "\
Art Space - a tiny artwork gallery

USAGE:
  art_space [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  ART_SPACE_CONFIG_DIR  Config directory (overridden by --config-dir)
  ART_SPACE_LOG         Log filter, e.g. debug or art_space=trace
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

// SPDX-License-Identifier: MPL-2.0
use clock_catalog::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
Clock catalog

USAGE:
  clock_catalog [OPTIONS] [ROUTE]

ARGS:
  ROUTE                   Initial page, e.g. / or /product/black

OPTIONS:
  --lang <ID>             Interface language (e.g. en-US, fr)
  --i18n-dir <DIR>        Directory with extra Fluent .ftl files
  --config-dir <DIR>      Directory holding settings.toml
  --catalog <FILE>        Catalog TOML file replacing the built-in one
  --media-root <DIR>      Directory media sources are resolved against
  -h, --help              Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_os_str("--catalog", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        media_root: args.opt_value_from_os_str("--media-root", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        route: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
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

    tracing::info!("clock catalog v{}", env!("CARGO_PKG_VERSION"));
    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

//! Layered settings: config files in the order given, then `BITBADGES_TX__*` environment
//! variables. Paths that don't point at a file are skipped.

use std::path::{Path, PathBuf};

use bitbadges_sdk::config::Config;
use config::{Environment, File};
use error_stack::{report, Result, ResultExt};
use tracing::debug;

use crate::error::Error;

pub const ENV_PREFIX: &str = "BITBADGES_TX";

pub fn load(paths: &[PathBuf]) -> Result<Config, Error> {
    let sources = paths.iter().filter_map(|path| existing_file(path));

    let builder = sources.fold(config::Config::builder(), |builder, path| {
        debug!(path = %path.display(), "reading config file");
        builder.add_source(File::from(path))
    });

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|layers| layers.try_deserialize::<Config>())
        .map_err(|err| report!(err))
        .change_context(Error::LoadConfig)
        .attach_printable_lazy(|| format!("{{ paths = {paths:?} }}"))
}

fn existing_file(path: &Path) -> Option<PathBuf> {
    let path = under_home(path)?;
    path.is_file().then_some(path)
}

/// Resolves a leading `~` against the user's home directory.
fn under_home(path: &Path) -> Option<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
        Err(_) => Some(path.to_path_buf()),
    }
}

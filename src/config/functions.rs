//! Functions that wrap up JSON loading and saving of configurations.

use std::fs::{DirBuilder, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use std::convert::TryFrom;

use super::{Error, NetworkConfig, RawNetworkConfig};

// Parsed unchecked first, out-of-range values become `Error::Invalid`
pub(crate) fn load_str(s: &str) -> Result<NetworkConfig, Error> {
    let raw: RawNetworkConfig = serde_json::from_str(s)?;
    NetworkConfig::try_from(raw).map_err(Into::into)
}

pub(crate) fn load_file<P: AsRef<Path>>(path: P) -> Result<NetworkConfig, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let raw: RawNetworkConfig = serde_json::from_reader(reader)?;
    NetworkConfig::try_from(raw).map_err(Into::into)
}

pub(crate) fn to_string(config: &NetworkConfig) -> Result<String, Error> {
    serde_json::to_string_pretty(config).map_err(Into::into)
}

/// Recursively creates missing directories if `create_dirs` is `true`.
pub(crate) fn to_file<P: AsRef<Path>>(
    config: &NetworkConfig,
    path: P,
    create_dirs: bool,
) -> Result<(), Error> {
    let path = path.as_ref();

    if create_dirs {
        if let Some(parent) = path.parent() {
            DirBuilder::new().recursive(true).create(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)?;

    writer.flush()?;

    Ok(())
}

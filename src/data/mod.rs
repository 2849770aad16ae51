/// Shared winnow parsers for settings lines and template tokens
pub mod parser_utils;
/// Sectioned key/value settings documents
pub mod settings;

use std::borrow::Cow;
use std::io::{ErrorKind as IoErrorKind, Read};

use vfs::VfsPath;
use vfs::error::VfsErrorKind;

use crate::error::ErrorKind;

/// Shared settings (included audio assets).
pub const COMMON_SETTINGS_PATH: &str = "Database/Common.ini";

/// Enemy CAP and surface-to-air defense tuning.
pub const ENEMY_AIR_DEFENSE_PATH: &str = "Database/EnemyAirDefense.ini";

/// Mission, unit group and waypoint names.
pub const NAMES_PATH: &str = "Database/Names.ini";

/// Objective distance tuning.
pub const OBJECTIVES_PATH: &str = "Database/Objectives.ini";

/// Path of an included audio asset, relative to the data root.
pub fn ogg_asset_path(name: &str) -> String {
    format!("Include/Ogg/{name}.ogg")
}

/// Access to settings documents and assets by root-relative path.
///
/// This is the boundary to path resolution: implementors decide where the data
/// root lives.
pub trait DataFileLoader {
    /// Read a whole file. A file that does not exist must be reported as
    /// [`ErrorKind::MissingDocument`].
    fn get(&self, path: &str) -> Result<Cow<'static, [u8]>, ErrorKind>;

    /// Only a [`ErrorKind::MissingDocument`] counts as absent. The default
    /// reads the file, so loaders with a cheaper check should override it.
    fn file_exists(&self, path: &str) -> bool {
        !matches!(self.get(path), Err(ErrorKind::MissingDocument { .. }))
    }
}

pub struct DataFileWithCallback<F> {
    callback: F,
}

impl<F> DataFileWithCallback<F>
where
    F: Fn(&str) -> Result<Cow<'static, [u8]>, ErrorKind>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DataFileLoader for DataFileWithCallback<F>
where
    F: Fn(&str) -> Result<Cow<'static, [u8]>, ErrorKind>,
{
    fn get(&self, path: &str) -> Result<Cow<'static, [u8]>, ErrorKind> {
        (self.callback)(path)
    }
}

fn is_not_found(kind: &VfsErrorKind) -> bool {
    match kind {
        VfsErrorKind::FileNotFound => true,
        VfsErrorKind::IoError(e) => e.kind() == IoErrorKind::NotFound,
        _ => false,
    }
}

impl DataFileLoader for VfsPath {
    fn get(&self, path: &str) -> Result<Cow<'static, [u8]>, ErrorKind> {
        let missing = || ErrorKind::MissingDocument {
            document: path.to_string(),
        };

        let file = self.join(path).map_err(|_| missing())?;
        let mut reader = file.open_file().map_err(|e| {
            if is_not_found(e.kind()) {
                missing()
            } else {
                ErrorKind::IoError(std::io::Error::other(e.to_string()))
            }
        })?;

        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Cow::Owned(data))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.join(path)
            .and_then(|file| file.is_file())
            .unwrap_or_else(|e| !is_not_found(e.kind()))
    }
}

use std::path::{Path, PathBuf};

pub const DEFAULT_BASE: &str = "configs/cameras";
pub const DEFAULT_TARGET: &str = "thingino-camera.json";

/// Where to look for files to sort.
///
/// The layout is `<base>/<entry>/<target>`: one subdirectory per device
/// profile, each holding at most one target file.
#[derive(PartialEq, Debug, Clone)]
pub struct Config {
    pub base: PathBuf,
    pub target: String,
}

impl Config {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().into(),
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl AsRef<str>) -> Self {
        self.target = target.as_ref().to_owned();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.into(),
            target: DEFAULT_TARGET.into(),
        }
    }
}

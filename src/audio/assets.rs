//! Mapping from cue identifiers to sound files on disk.

use crate::games::tictactoe::Cue;
use std::path::{Path, PathBuf};

/// Resolves cues to asset paths under a base directory.
///
/// `open_cell/3` with extension `mp4` resolves to `{dir}/open_cell/3.mp4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueAssets {
    dir: PathBuf,
    extension: String,
}

impl CueAssets {
    /// Creates a resolver rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Base asset directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a cue plays.
    pub fn path_for(&self, cue: Cue) -> PathBuf {
        let mut path = self.dir.clone();
        for segment in cue.identifier().split('/') {
            path.push(segment);
        }
        path.set_extension(&self.extension);
        path
    }

    /// Resolves every cue and checks which files are present.
    pub fn inventory(&self) -> Vec<AssetStatus> {
        Cue::all()
            .into_iter()
            .map(|cue| {
                let path = self.path_for(cue);
                let present = path.is_file();
                AssetStatus { cue, path, present }
            })
            .collect()
    }
}

/// Where a cue's asset lives and whether it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStatus {
    /// The cue.
    pub cue: Cue,
    /// Resolved asset path.
    pub path: PathBuf,
    /// True when the file exists.
    pub present: bool,
}

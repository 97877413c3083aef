//! Artifact output for generated source files.

use std::io;
use std::path::{Path, PathBuf};

/// A write-once destination for rendered source artifacts.
///
/// Implementations receive the fully qualified name an artifact must be
/// persisted under (e.g. `io.rama.vehicle.VehicleBuilder`) and its complete
/// content. A failed write must not leave a partial artifact behind.
pub trait ArtifactSink {
    fn write(&self, qualified_name: &str, content: &str) -> io::Result<()>;
}

/// Filesystem sink laying artifacts out as a source tree.
///
/// `io.rama.vehicle.VehicleBuilder` becomes
/// `<root>/io/rama/vehicle/VehicleBuilder.java`, with parent directories
/// created on demand.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    extension: &'static str,
}

impl SourceTree {
    /// Create a sink rooted at the given directory, producing `.java` files.
    pub fn java(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "java",
        }
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an artifact with the given qualified name is written to.
    pub fn path_for(&self, qualified_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in qualified_name.split('.') {
            path.push(segment);
        }
        path.set_extension(self.extension);
        path
    }
}

impl ArtifactSink for SourceTree {
    fn write(&self, qualified_name: &str, content: &str) -> io::Result<()> {
        let path = self.path_for(qualified_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Stage next to the destination and rename into place, so the final
        // path holds either the full artifact or nothing.
        let staged = path.with_extension(format!("{}.tmp", self.extension));
        if let Err(e) = std::fs::write(&staged, content) {
            let _ = std::fs::remove_file(&staged);
            return Err(e);
        }
        std::fs::rename(&staged, &path)
    }
}

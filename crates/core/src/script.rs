//! Writing selected commands out as an executable script.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::{DEFAULT_SHEBANG, SCRIPT_EXTENSION};
use crate::error::{Error, Result};
use crate::selection::SelectionSet;

/// Writes scripts into a directory, each starting with the same shebang line.
#[derive(Debug, Clone)]
pub struct ScriptEmitter {
    pub directory: PathBuf,
    pub shebang: String,
}

impl Default for ScriptEmitter {
    fn default() -> Self {
        Self::new(".", DEFAULT_SHEBANG)
    }
}

impl ScriptEmitter {
    pub fn new(directory: impl Into<PathBuf>, shebang: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            shebang: shebang.into(),
        }
    }

    /// Path of the script for `name`: the name with `.sh` appended, verbatim.
    #[must_use]
    pub fn script_path(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.{SCRIPT_EXTENSION}"))
    }

    /// Renders the script: the shebang, then every selected command in list
    /// order. Selected indexes past the end of `commands` emit nothing.
    #[must_use]
    pub fn render_script(&self, selection: &SelectionSet, commands: &[String]) -> String {
        let mut script = format!("{}\n", self.shebang);
        for (index, command) in commands.iter().enumerate() {
            if selection.contains(index) {
                script.push_str(command);
                script.push('\n');
            }
        }

        script
    }

    /// Writes the script for `name` and adds the owner-execute bit.
    ///
    /// An existing file is truncated. A failure part way through leaves
    /// whatever was written on disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created, written, or have
    /// its permissions changed.
    pub fn write_script(
        &self,
        name: &str,
        selection: &SelectionSet,
        commands: &[String],
    ) -> Result<PathBuf> {
        let path = self.script_path(name);
        let script = self.render_script(selection, commands);
        debug!("Writing {} bytes to `{}`", script.len(), path.display());

        let mut file = File::create(&path).map_err(|e| script_error(&path, e))?;
        file.write_all(script.as_bytes())
            .map_err(|e| script_error(&path, e))?;

        make_owner_executable(&path)?;

        info!("Wrote script `{}`", path.display());
        Ok(path)
    }
}

/// Writes `<name>.sh` into the current directory with the default shebang.
///
/// # Errors
///
/// See [`ScriptEmitter::write_script`].
pub fn write_script(name: &str, selection: &SelectionSet, commands: &[String]) -> Result<PathBuf> {
    ScriptEmitter::default().write_script(name, selection, commands)
}

fn script_error(path: &Path, original: std::io::Error) -> Error {
    Error::io_error("script".to_string(), path.display().to_string(), original)
}

#[cfg(unix)]
fn make_owner_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    const OWNER_EXECUTE: u32 = 0o100;

    let mut permissions = fs::metadata(path)
        .map_err(|e| script_error(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | OWNER_EXECUTE);
    fs::set_permissions(path, permissions).map_err(|e| script_error(path, e))
}

#[cfg(not(unix))]
fn make_owner_executable(path: &Path) -> Result<()> {
    debug!(
        "Skipping execute permission for `{}` on this platform",
        path.display()
    );
    Ok(())
}

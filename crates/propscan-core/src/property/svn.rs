/// Property store backed by the `svn propget` command.
///
/// One blocking process per query, no timeout. Only whether stdout produced
/// at least one byte matters; the value itself is ignored.
use super::PropertyStore;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SvnPropertyStore {
    program: String,
}

impl SvnPropertyStore {
    /// Use `program` (e.g. `svn` or an absolute path to it) for queries.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl PropertyStore for SvnPropertyStore {
    fn has_property(&self, path: &Path, name: &str) -> bool {
        let output = Command::new(&self.program)
            .arg("propget")
            .arg(name)
            .arg(path)
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(o) => o,
            Err(e) => {
                warn!(
                    "Failed to run `{} propget {name} {}`: {e}",
                    self.program,
                    path.display()
                );
                return false;
            }
        };

        if !output.stderr.is_empty() {
            debug!(
                "{} propget {name} {}: {}",
                self.program,
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        // Exit status is ignored: a failing command that still writes to
        // stdout counts as "set".
        !output.stdout.is_empty()
    }
}

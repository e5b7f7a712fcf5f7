use std::path::{Path, PathBuf};

/// Well-known file locations under the base directory. Everything tally
/// touches lives here: the database, the YAML configs, and the CSV folder.
#[derive(Debug, Clone)]
pub struct Paths {
    base: PathBuf,
}

impl Paths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn db(&self) -> PathBuf {
        self.base.join("expenses.db")
    }

    pub fn config(&self) -> PathBuf {
        self.base.join("configs").join("config.yaml")
    }

    pub fn contacts(&self) -> PathBuf {
        self.base.join("configs").join("contacts.yaml")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Resolve a user-supplied CSV argument: an existing path is used
    /// as-is, anything else is looked up inside the data folder.
    pub fn resolve_csv(&self, file: &str) -> PathBuf {
        let direct = PathBuf::from(file);
        if direct.exists() {
            direct
        } else {
            self.data_dir().join(file)
        }
    }
}

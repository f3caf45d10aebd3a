use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::document::Document;

pub enum DocumentSink {
    Null,
    Directory { root: PathBuf },
}

impl DocumentSink {
    pub fn init_directory(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create output directory: {}", root.display()))?;

        Ok(Self::Directory {
            root: root.to_path_buf(),
        })
    }

    // sj_mepla.dat => sj_mepla.dat.json
    pub fn output_path(&self, source_file_name: &str) -> Option<PathBuf> {
        match self {
            Self::Null => None,
            Self::Directory { root } => Some(root.join(format!("{}.json", source_file_name))),
        }
    }

    pub fn save(&self, source_file_name: &str, document: &Document) -> Result<()> {
        if let Some(path) = self.output_path(source_file_name) {
            fs::write(&path, serde_json::to_string_pretty(document)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            tracing::info!(path = %path.display(), "saved");
        }

        Ok(())
    }
}

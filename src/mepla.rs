// SJ Mepla calculation output (sj_mepla.dat, sj_mepla.rep)
//
// Both files are laid out for a fixed-width printer: columns are only
// separated by runs of spaces or underscores, and the column positions are
// rebuilt into tab stops.

pub mod dat_parser;
pub mod layout;
pub mod number;
pub mod reader;
pub mod rep_parser;
pub mod tokenizer;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};

use crate::{
    document::Document,
    mepla::{dat_parser::parse_dat, reader::read_mepla_file, rep_parser::parse_rep},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeplaFileKind {
    Dat, // tag coded
    Rep, // rule/bullet coded
}

impl MeplaFileKind {
    pub fn of(name: &str) -> Option<Self> {
        match name {
            "dat" => Some(Self::Dat),
            "rep" => Some(Self::Rep),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        Self::of(&extension)
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Dat => "sj_mepla.dat",
            Self::Rep => "sj_mepla.rep",
        }
    }
}

pub fn convert(kind: MeplaFileKind, txt: &str) -> Document {
    match kind {
        MeplaFileKind::Dat => parse_dat(txt),
        MeplaFileKind::Rep => parse_rep(txt),
    }
}

pub fn convert_file(kind: MeplaFileKind, path: &Path) -> Result<Document> {
    let txt = read_mepla_file(path)?;
    let document = convert(kind, &txt);

    tracing::debug!(
        path = %path.display(),
        elements = document.len(),
        "converted"
    );

    Ok(document)
}

// regular files with a .dat or .rep extension, sorted by path
pub fn find_mepla_files(directory: &Path) -> Result<Vec<(MeplaFileKind, PathBuf)>> {
    let mut files = Vec::new();

    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        if let Some(kind) = MeplaFileKind::from_path(&path) {
            files.push((kind, path));
        }
    }

    files.sort_by(|a, b| a.1.cmp(&b.1));

    Ok(files)
}

// the canonical sj_mepla.* file when a kind is given, every mepla file otherwise
pub fn resolve_files(
    directory: &Path,
    kind: Option<MeplaFileKind>,
) -> Result<Vec<(MeplaFileKind, PathBuf)>> {
    ensure!(
        directory.is_dir(),
        "Not a directory: {}",
        directory.display()
    );

    match kind {
        Some(kind) => {
            let path = directory.join(kind.file_name());
            ensure!(path.is_file(), "File not found: {}", path.display());
            Ok(vec![(kind, path)])
        }
        None => find_mepla_files(directory),
    }
}

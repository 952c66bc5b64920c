//! Library folder scanner.
//!
//! Walks a media library and parses the name of every folder (and,
//! optionally, every file) it finds, producing the clean titles and season
//! hints a metadata lookup starts from.

use anyhow::Result;
use mediatitle_parser::{ParsedTitle, Parser};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// A parsed library entry.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    pub parsed: ParsedTitle,
}

/// Scanner for parsing the entries of a library directory.
#[derive(Debug, Clone)]
pub struct Scanner {
    parser: Parser,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(parser: Parser, config: ScanConfig) -> Self {
        Self { parser, config }
    }

    /// Parse every entry below `root`, sorted by file name at each level.
    ///
    /// The root itself is not parsed. Entries that cannot be read or whose
    /// names are not valid UTF-8 are logged and skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<ScanEntry>> {
        if !root.is_dir() {
            anyhow::bail!("Scan root is not a directory: {:?}", root);
        }

        info!("Scanning directory: {:?}", root);
        let mut results = Vec::new();

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(self.config.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_skipped_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let is_dir = entry.file_type().is_dir();
            if !is_dir && !self.keeps_file(entry.path()) {
                continue;
            }

            let Some(title) = entry_title(entry.path(), is_dir) else {
                warn!("Skipping entry with non UTF-8 name: {:?}", entry.path());
                continue;
            };

            let parsed = self.parser.parse(title);
            debug!(
                "Parsed {:?} -> {:?} (season {:?}, year {:?})",
                title,
                parsed.clean_title(),
                parsed.season_number(),
                parsed.year()
            );

            results.push(ScanEntry {
                path: entry.path().to_path_buf(),
                is_dir,
                parsed,
            });
        }

        info!("Parsed {} entries under {:?}", results.len(), root);
        Ok(results)
    }

    fn is_skipped_hidden(&self, entry: &DirEntry) -> bool {
        self.config.skip_hidden
            && entry
                .file_name()
                .to_str()
                .map(|name| name.starts_with('.'))
                .unwrap_or(false)
    }

    fn keeps_file(&self, path: &Path) -> bool {
        if !self.config.include_files {
            return false;
        }
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

/// The part of a path that carries the title: the whole name for a
/// directory, the stem for a file.
fn entry_title(path: &Path, is_dir: bool) -> Option<&str> {
    let name = if is_dir {
        path.file_name()
    } else {
        path.file_stem()
    };
    name.and_then(|n| n.to_str())
}

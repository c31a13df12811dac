use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use spdlog::{debug, info, warn};
use walkdir::WalkDir;

use crate::content::{Collection, ContentEntry};
use crate::content::content_file::ContentFile;

pub struct CollectionLoader {
    pub root_dir: PathBuf,
    pub collection: Collection,
}

impl CollectionLoader {
    pub fn new(content_dir: &Path, collection: Collection) -> Self {
        CollectionLoader {
            root_dir: content_dir.join(collection.dir_name()),
            collection,
        }
    }

    /// Every `*.md` file below the collection directory, at any depth.
    /// A collection without a directory is empty.
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        if !self.root_dir.is_dir() {
            debug!("No directory for collection {} at {}", self.collection, self.root_dir.display());
            return Ok(vec![]);
        }

        let mut files = vec![];
        for entry in WalkDir::new(&self.root_dir).follow_links(true) {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let is_markdown = entry.path().extension().map(|ext| ext == "md").unwrap_or(false);
            if is_markdown {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    /// Loads and validates every entry; entries come back ordered by id.
    pub fn load<D: DeserializeOwned>(&self) -> io::Result<Vec<ContentEntry<D>>> {
        let mut entries = vec![];
        for file_path in self.retrieve_files()? {
            debug!("Loading {} entry from {}", self.collection, file_path.display());
            let content_file = ContentFile::from_file(self.collection, &self.root_dir, file_path)?;
            entries.push(content_file.into_entry::<D>()?);
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        for id in duplicate_ids(&entries) {
            warn!("Duplicate id {} in collection {}. Later entries share its link", id, self.collection);
        }
        info!("Loaded {} entries for collection {}", entries.len(), self.collection);
        Ok(entries)
    }
}

/// Ids shared by more than one entry. `entries` must be sorted by id.
fn duplicate_ids<D>(entries: &[ContentEntry<D>]) -> Vec<&str> {
    let mut dups: Vec<&str> = vec![];
    for pair in entries.windows(2) {
        if pair[0].id == pair[1].id && dups.last() != Some(&pair[0].id.as_str()) {
            dups.push(pair[0].id.as_str());
        }
    }
    dups
}

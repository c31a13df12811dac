use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::content::{Collection, ContentEntry};
use crate::content::parsing_utils::{parse_front_matter, split_front_matter};
use crate::text_utils::slugify_str;

pub struct ContentFile {
    pub id: String,
    pub collection: Collection,
    pub file_path: PathBuf,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(collection: Collection, root_dir: &Path, file_path: PathBuf) -> io::Result<ContentFile> {
        let id = Self::id_from_path(root_dir, &file_path)?;
        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            id,
            collection,
            file_path,
            raw_content,
        })
    }

    /// `blog/2024/Hello World.md` under root `blog` gives `2024/hello-world`.
    fn id_from_path(root_dir: &Path, file_path: &Path) -> io::Result<String> {
        let relative = file_path.strip_prefix(root_dir).map_err(|_| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not inside {}", file_path.display(), root_dir.display()),
            )
        })?;

        let stem = relative.with_extension("");
        let segments: Vec<String> = stem
            .iter()
            .map(|segment| slugify_str(&segment.to_string_lossy()))
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("Could not build an id for {}", file_path.display()),
            ));
        }

        Ok(segments.join("/"))
    }

    pub fn into_entry<D: DeserializeOwned>(self) -> io::Result<ContentEntry<D>> {
        let (front, body) = split_front_matter(&self.file_path, &self.raw_content)?;
        let data = parse_front_matter::<D>(&self.file_path, front)?;
        let body = body.to_string();

        Ok(ContentEntry {
            id: self.id,
            collection: self.collection,
            data,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::content::PostData;
    use crate::test_data::POST_DATA;

    use super::*;

    #[test]
    fn test_id_from_path() {
        let root = PathBuf::from("content/blog");
        let id = ContentFile::id_from_path(&root, &PathBuf::from("content/blog/hello-world.md")).unwrap();
        assert_eq!(id, "hello-world");

        let id = ContentFile::id_from_path(&root, &PathBuf::from("content/blog/2024/My First Post.md")).unwrap();
        assert_eq!(id, "2024/my-first-post");

        let res = ContentFile::id_from_path(&root, &PathBuf::from("content/note/elsewhere.md"));
        assert_eq!(res.unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_into_entry() {
        let file = ContentFile {
            id: "what-i-learned".to_string(),
            collection: Collection::Blog,
            file_path: PathBuf::from("content/blog/what-i-learned.md"),
            raw_content: POST_DATA.to_string(),
        };

        let entry = file.into_entry::<PostData>().unwrap();
        assert_eq!(entry.id, "what-i-learned");
        assert_eq!(entry.collection, Collection::Blog);
        assert_eq!(entry.data.tags, ["Career", "Software Engineering"]);
        assert!(entry.body.contains("Someone asked me this question today"));
    }
}

//! Bookmark persistence: a three-line pointer into a story.
//!
//! ```text
//! #!BOOKMARK
//! <story file path>
//! <current room id>
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::loader::BOOKMARK_MAGIC;

/// A saved position: which story file, and which room to resume in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Path of the story file the bookmark points into, as written.
    pub story_path: String,
    /// Id of the room to resume from.
    pub room_id: String,
}

impl Bookmark {
    /// Create a bookmark for the given story and room.
    pub fn new(story_path: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            story_path: story_path.into(),
            room_id: room_id.into(),
        }
    }

    /// Read the two lines that follow the magic marker. `path` is only
    /// used for the error message.
    pub(crate) fn from_lines<'a>(
        path: &Path,
        mut lines: impl Iterator<Item = &'a str>,
    ) -> StoryResult<Self> {
        let truncated = || StoryError::TruncatedBookmark(path.to_path_buf());
        let story_path = lines.next().ok_or_else(truncated)?;
        let room_id = lines.next().ok_or_else(truncated)?;
        Ok(Self::new(story_path.trim(), room_id.trim()))
    }

    /// Load a bookmark file from disk.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default().trim();
        if first != BOOKMARK_MAGIC {
            return Err(StoryError::UnrecognizedHeader(first.to_string()));
        }
        Self::from_lines(path, lines)
    }

    /// Write the three-line bookmark format.
    pub fn save(&self, path: impl AsRef<Path>) -> StoryResult<()> {
        let path = path.as_ref();
        let contents = format!("{BOOKMARK_MAGIC}\n{}\n{}\n", self.story_path, self.room_id);
        fs::write(path, contents).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

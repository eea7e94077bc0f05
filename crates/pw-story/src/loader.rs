//! File-type dispatch between story and bookmark files.
//!
//! The first trimmed line decides: `#!STORY` hands the remaining lines to
//! the parser, `#!BOOKMARK` reads the story path and saved room id and
//! then loads the referenced story with its start room overridden.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bookmark::Bookmark;
use crate::error::{StoryError, StoryResult};
use crate::parser;
use crate::story::Story;

/// Magic first line of a story file.
pub const STORY_MAGIC: &str = "#!STORY";
/// Magic first line of a bookmark file.
pub const BOOKMARK_MAGIC: &str = "#!BOOKMARK";

/// A parsed story together with the path of the story file it came from.
///
/// When a bookmark was loaded, `story_path` is the story the bookmark
/// referenced, not the bookmark itself; saving progress mid-game needs
/// that distinction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedStory {
    /// The parsed story, start room already resolved.
    pub story: Story,
    /// Path of the story file itself.
    pub story_path: PathBuf,
}

/// Load a story from a path holding either a story file or a bookmark.
///
/// A bookmark is followed to the story it names and the saved room id
/// replaces the story's own start room. A bookmark naming another
/// bookmark is rejected with [`StoryError::UnrecognizedHeader`] on the
/// nested read; only story files are valid targets.
pub fn load(path: impl AsRef<Path>) -> StoryResult<LoadedStory> {
    let path = path.as_ref();
    let text = read(path)?;
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default().trim();

    if first == STORY_MAGIC {
        let story = parser::parse_lines(lines)?;
        Ok(LoadedStory {
            story,
            story_path: path.to_path_buf(),
        })
    } else if first == BOOKMARK_MAGIC {
        let bookmark = Bookmark::from_lines(path, lines)?;
        load_story(Path::new(&bookmark.story_path), Some(bookmark.room_id))
    } else {
        Err(StoryError::UnrecognizedHeader(first.to_string()))
    }
}

/// Load a file that must be a story file — the nested half of bookmark
/// dispatch.
fn load_story(path: &Path, start_room: Option<String>) -> StoryResult<LoadedStory> {
    let text = read(path)?;
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default().trim();
    if first != STORY_MAGIC {
        return Err(StoryError::UnrecognizedHeader(first.to_string()));
    }

    let mut story = parser::parse_lines(lines)?;
    if let Some(room) = start_room {
        story.start_room = room;
    }
    Ok(LoadedStory {
        story,
        story_path: path.to_path_buf(),
    })
}

fn read(path: &Path) -> StoryResult<String> {
    fs::read_to_string(path).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

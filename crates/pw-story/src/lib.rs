//! Story engine for Pfadweber choose-your-own-adventure files.
//!
//! Turns the plain-text story grammar into an in-memory graph of rooms and
//! weighted transitions, resolves transitions either deterministically or
//! by weighted random draw, and reads and writes the bookmark format used
//! to save a player's position.

/// Bookmark persistence.
pub mod bookmark;
/// Error types for story parsing and loading.
pub mod error;
/// File-type dispatch between story and bookmark files.
pub mod loader;
/// Line-oriented story grammar parser.
pub mod parser;
/// Terminal detection and weighted-random transition resolution.
pub mod resolver;
/// Rooms, transitions, and the parsed story graph.
pub mod story;

pub use bookmark::Bookmark;
pub use error::{StoryError, StoryResult};
pub use loader::{BOOKMARK_MAGIC, LoadedStory, STORY_MAGIC, load};
pub use parser::{parse_lines, parse_text};
pub use resolver::{auto_resolve, pick_weighted, terminal, total_weight};
pub use story::{Ending, Room, Story, Transition};

//! Rooms, transitions, and the parsed story graph.

use serde::{Deserialize, Serialize};

/// A node in the story graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier, unique within a story by convention. Uniqueness is not
    /// validated; lookups return the first match.
    pub id: String,
    /// Short title shown above the description.
    pub title: String,
    /// Narrative text, possibly multi-line. Empty is fine.
    pub description: String,
}

impl Room {
    /// Create a room with an empty description.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
        }
    }
}

/// Outcome of a terminal room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// The player completed the adventure.
    Success,
    /// The player failed (or quit) the adventure.
    Fail,
}

impl Ending {
    /// The sentinel line that marks this ending in a story file.
    pub fn as_sentinel(self) -> &'static str {
        match self {
            Ending::Success => "SUCCESS",
            Ending::Fail => "FAIL",
        }
    }

    /// Recognize a sentinel line. The match is exact; sentinels never
    /// start with `:` or `R`.
    pub fn from_sentinel(line: &str) -> Option<Self> {
        match line {
            "SUCCESS" => Some(Ending::Success),
            "FAIL" => Some(Ending::Fail),
            _ => None,
        }
    }
}

/// A directed edge out of a room, or a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Marks its room as an ending. Always the sole transition of the
    /// room's sequence.
    Terminal(Ending),
    /// An unweighted choice the player picks by hand.
    Plain {
        /// Choice text shown to the player.
        description: String,
        /// Id of the destination room.
        target: String,
    },
    /// A choice that takes part in the weighted random draw.
    Weighted {
        /// Choice text shown to the player.
        description: String,
        /// Id of the destination room.
        target: String,
        /// Weight as raw trimmed text from the story file. Whether it
        /// parses as an integer is the resolver's concern, not the
        /// parser's.
        weight: String,
    },
}

impl Transition {
    /// Choice text, or the ending sentinel for terminal transitions.
    pub fn description(&self) -> &str {
        match self {
            Transition::Terminal(ending) => ending.as_sentinel(),
            Transition::Plain { description, .. } | Transition::Weighted { description, .. } => {
                description
            }
        }
    }

    /// Id of the destination room, if this transition has one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Transition::Terminal(_) => None,
            Transition::Plain { target, .. } | Transition::Weighted { target, .. } => Some(target),
        }
    }

    /// Raw weight text, if this transition is weighted.
    pub fn weight(&self) -> Option<&str> {
        match self {
            Transition::Weighted { weight, .. } => Some(weight),
            _ => None,
        }
    }
}

/// A fully parsed story.
///
/// `rooms` and `transitions` are index-parallel: same length, same order,
/// grown together by the parser and never resized independently. A story
/// is built atomically per load and replaced wholesale on the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Rooms in source order.
    pub rooms: Vec<Room>,
    /// Per-room transition sequences, index-parallel to `rooms`.
    pub transitions: Vec<Vec<Transition>>,
    /// Id of the room play begins in. The first room of the file, unless
    /// a bookmark overrode it.
    pub start_room: String,
}

impl Story {
    /// Index of the first room with the given id.
    pub fn room_index(&self, id: &str) -> Option<usize> {
        self.rooms.iter().position(|room| room.id == id)
    }

    /// The first room with the given id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index(id).map(|index| &self.rooms[index])
    }

    /// Transition sequence of the first room with the given id.
    pub fn transitions_for(&self, id: &str) -> Option<&[Transition]> {
        self.room_index(id).map(|index| self.transitions[index].as_slice())
    }

    /// Re-serialize the story in the plain-text grammar, without the
    /// `#!STORY` magic line.
    ///
    /// Parsing the result yields an equal story (modulo the whitespace
    /// the parser trims anyway).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (room, transitions) in self.rooms.iter().zip(&self.transitions) {
            out.push_str(&format!("R{}: {}\n", room.id, room.title));
            if !room.description.is_empty() {
                out.push_str(&room.description);
                out.push('\n');
            }
            out.push_str(";;;\n");
            for transition in transitions {
                match transition {
                    Transition::Terminal(ending) => {
                        out.push_str(ending.as_sentinel());
                        out.push('\n');
                    }
                    Transition::Plain {
                        description,
                        target,
                    } => out.push_str(&format!(": {description} -> {target}\n")),
                    Transition::Weighted {
                        description,
                        target,
                        weight,
                    } => out.push_str(&format!(": {description} -> {target} ? {weight}\n")),
                }
            }
            out.push('\n');
        }
        out
    }
}

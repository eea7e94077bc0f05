//! Line-oriented story grammar parser.
//!
//! A three-state machine turns trimmed lines into rooms and their
//! transition sequences. The room list and the transition list grow in
//! lockstep, so the parallel-structure invariant holds by construction;
//! the final validation only has to reject empty results and rooms whose
//! sections never produced a transition.

use crate::error::{StoryError, StoryResult};
use crate::story::{Ending, Room, Story, Transition};

/// Delimiter line closing a room description.
const DESCRIPTION_END: &str = ";;;";

/// Where the state machine currently is in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first room header.
    Start,
    /// Accumulating description lines for the newest room.
    InDescription,
    /// Reading transition lines for the newest room.
    InTransitions,
}

/// Parse a full story text, without the magic line.
pub fn parse_text(text: &str) -> StoryResult<Story> {
    parse_lines(text.lines())
}

/// Parse a story from pre-split lines, without the magic line.
///
/// Lines are trimmed before classification. Outside a description, lines
/// whose first character is `#` are comments and blank lines are skipped;
/// inside a description both are narrative text. Error positions count
/// every line consumed, 1-based.
///
/// On success the room and transition lists are index-parallel and
/// non-empty, every room carries at least one transition, and
/// `start_room` is the first room's id.
pub fn parse_lines<'a, I>(lines: I) -> StoryResult<Story>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rooms: Vec<Room> = Vec::new();
    let mut transitions: Vec<Vec<Transition>> = Vec::new();
    let mut description: Vec<&str> = Vec::new();
    let mut state = ParseState::Start;

    for (index, raw) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            // A blank line is part of a description, noise anywhere else.
            if state == ParseState::InDescription {
                description.push("");
            }
            continue;
        }
        if line.starts_with('#') && state != ParseState::InDescription {
            continue;
        }

        match state {
            ParseState::Start => {
                let Some(room) = parse_room_header(line) else {
                    return Err(malformed(line_no, line));
                };
                open_room(&mut rooms, &mut transitions, room);
                state = ParseState::InDescription;
            }
            ParseState::InDescription => {
                if line == DESCRIPTION_END {
                    commit_description(&mut rooms, &mut description);
                    state = ParseState::InTransitions;
                } else {
                    description.push(line);
                }
            }
            ParseState::InTransitions => {
                if let Some(room) = parse_room_header(line) {
                    open_room(&mut rooms, &mut transitions, room);
                    state = ParseState::InDescription;
                } else if let Some(transition) = parse_transition(line) {
                    append_transition(&rooms, &mut transitions, transition)?;
                } else {
                    return Err(malformed(line_no, line));
                }
            }
        }
    }

    // A file ending mid-description still closes the room; the room then
    // fails the transition check below.
    if state == ParseState::InDescription {
        commit_description(&mut rooms, &mut description);
    }

    validate(&rooms, &transitions)?;

    let start_room = rooms
        .first()
        .map(|room| room.id.clone())
        .unwrap_or_default();

    Ok(Story {
        rooms,
        transitions,
        start_room,
    })
}

fn malformed(line_no: usize, line: &str) -> StoryError {
    StoryError::MalformedLine {
        line: line_no,
        text: line.to_string(),
    }
}

/// Push a new room and its empty transition sequence together.
fn open_room(rooms: &mut Vec<Room>, transitions: &mut Vec<Vec<Transition>>, room: Room) {
    rooms.push(room);
    transitions.push(Vec::new());
}

/// Join the accumulated description lines into the newest room.
fn commit_description(rooms: &mut [Room], description: &mut Vec<&str>) {
    if let Some(room) = rooms.last_mut() {
        room.description = description.join("\n").trim().to_string();
    }
    description.clear();
}

/// Append a transition to the newest room, rejecting any mix of a
/// terminal with other transitions.
fn append_transition(
    rooms: &[Room],
    transitions: &mut [Vec<Transition>],
    transition: Transition,
) -> StoryResult<()> {
    let Some(current) = transitions.last_mut() else {
        return Err(StoryError::StructuralInconsistency(
            "transition before any room".to_string(),
        ));
    };

    let is_terminal = matches!(transition, Transition::Terminal(_));
    let has_terminal = matches!(current.first(), Some(Transition::Terminal(_)));
    if has_terminal || (is_terminal && !current.is_empty()) {
        let id = rooms.last().map(|room| room.id.as_str()).unwrap_or("");
        return Err(StoryError::StructuralInconsistency(format!(
            "room {id} mixes a terminal transition with other transitions"
        )));
    }

    current.push(transition);
    Ok(())
}

/// Try to read `R<id>: <title>`; `None` if the line is not a room header.
fn parse_room_header(line: &str) -> Option<Room> {
    let rest = line.strip_prefix('R')?;
    let (id, title) = rest.split_once(':')?;
    Some(Room::new(id.trim(), title.trim()))
}

/// Classify a transition line; `None` if it matches no transition rule.
///
/// The description runs from the leading `:` to the first `-`; the target
/// follows the `->` arrow; a weighted line additionally splits the target
/// from the weight at the last `?`. Room ids are assumed not to contain
/// `?`, and the sentinels never start with `:`.
fn parse_transition(line: &str) -> Option<Transition> {
    if let Some(ending) = Ending::from_sentinel(line) {
        return Some(Transition::Terminal(ending));
    }

    let rest = line.strip_prefix(':')?;
    let dash = rest.find('-')?;
    let description = rest[..dash].trim().to_string();
    let after_arrow = rest[dash..].strip_prefix("->")?;

    if line.contains('?') {
        // A `?` that precedes the arrow leaves no room for a target.
        let question = after_arrow.rfind('?')?;
        Some(Transition::Weighted {
            description,
            target: after_arrow[..question].trim().to_string(),
            weight: after_arrow[question + 1..].trim().to_string(),
        })
    } else {
        Some(Transition::Plain {
            description,
            target: after_arrow.trim().to_string(),
        })
    }
}

/// Final structural checks: at least one room, and every room owns either
/// one terminal or one-or-more plain/weighted transitions.
fn validate(rooms: &[Room], transitions: &[Vec<Transition>]) -> StoryResult<()> {
    if rooms.is_empty() || rooms.len() != transitions.len() {
        return Err(StoryError::StructuralInconsistency(
            "no rooms in story".to_string(),
        ));
    }
    for (room, sequence) in rooms.iter().zip(transitions) {
        if sequence.is_empty() {
            return Err(StoryError::StructuralInconsistency(format!(
                "room {} has no transitions",
                room.id
            )));
        }
    }
    Ok(())
}

//! Parse a story or bookmark file and report its shape.

use std::path::Path;

use pw_story::terminal;

pub fn run(file: &Path) -> Result<(), String> {
    let loaded = pw_story::load(file).map_err(|e| e.to_string())?;
    let story = &loaded.story;

    let transition_count: usize = story.transitions.iter().map(Vec::len).sum();
    let ending_count = story
        .transitions
        .iter()
        .filter(|sequence| terminal(sequence.as_slice()).is_some())
        .count();

    println!("  Parsed '{}' successfully.", loaded.story_path.display());
    println!();
    println!(
        "  {} rooms, {} transitions, {} endings",
        story.rooms.len(),
        transition_count,
        ending_count
    );
    println!("  Start room: {}", story.start_room);

    Ok(())
}

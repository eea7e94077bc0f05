//! The interactive play loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pw_story::{Bookmark, Ending, LoadedStory, auto_resolve, terminal};

use crate::display;
use crate::prompt::{prompt_char, prompt_int, prompt_string};

/// Play a story or resume a bookmark, replaying on request.
pub fn run(file: &Path, seed: u64, width: usize) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    let mut rng = StdRng::seed_from_u64(seed);

    writeln!(writer, "Welcome to this choose your own adventure system!")
        .map_err(|e| e.to_string())?;

    loop {
        let loaded = pw_story::load(file).map_err(|e| e.to_string())?;
        play_once(&loaded, &mut rng, width, &mut reader, &mut writer)
            .map_err(|e| e.to_string())?;

        let again = prompt_char(&mut reader, &mut writer, "Do you want to try again? ")
            .map_err(|e| e.to_string())?;
        match again {
            Some(c) if c != 'n' => {}
            _ => break,
        }
    }

    writeln!(writer, "Thank you for playing!").map_err(|e| e.to_string())?;
    Ok(())
}

/// One complete run: from the start (or bookmarked) room to an ending.
/// Quitting counts as a failed ending; EOF on any prompt ends the run.
fn play_once<R: BufRead, W: Write>(
    loaded: &LoadedStory,
    rng: &mut StdRng,
    width: usize,
    reader: &mut R,
    writer: &mut W,
) -> io::Result<()> {
    let story = &loaded.story;
    let mut current = story.start_room.clone();

    loop {
        let Some(index) = story.room_index(&current) else {
            let warning = format!("No room with id {current} in this story.");
            writeln!(writer, "{}", warning.yellow())?;
            return finish(writer, Ending::Fail);
        };
        display::display_room(writer, &story.rooms[index], width)?;
        let transitions = story.transitions[index].as_slice();

        if let Some(ending) = terminal(transitions) {
            return finish(writer, ending);
        }

        if let Some(target) = auto_resolve(transitions, rng) {
            current = target.to_string();
            continue;
        }

        for (i, transition) in transitions.iter().enumerate() {
            writeln!(writer, "{i}) {}", transition.description())?;
        }

        let max = transitions.len() as i64 - 1;
        let Some(choice) = prompt_int(reader, writer, "Choose: ", -2, max)? else {
            return Ok(());
        };
        match choice {
            -1 => {
                let confirm =
                    prompt_char(reader, writer, "Are you sure you want to quit the adventure? ")?;
                match confirm {
                    Some('y') => return finish(writer, Ending::Fail),
                    Some(_) => {}
                    None => return Ok(()),
                }
            }
            -2 => {
                let prompt =
                    format!("Bookmarking current location: {current}. Enter bookmark filename: ");
                let Some(name) = prompt_string(reader, writer, &prompt)? else {
                    return Ok(());
                };
                let bookmark =
                    Bookmark::new(loaded.story_path.display().to_string(), current.clone());
                match bookmark.save(&name) {
                    Ok(()) => writeln!(writer, "Bookmark saved in {name}")?,
                    Err(_) => writeln!(writer, "Error saving bookmark in {name}")?,
                }
            }
            choice => {
                // prompt_int already bounded the index to the list.
                if let Some(target) = transitions[choice as usize].target() {
                    current = target.to_string();
                }
            }
        }
    }
}

fn finish<W: Write>(writer: &mut W, ending: Ending) -> io::Result<()> {
    match ending {
        Ending::Success => writeln!(
            writer,
            "Congratulations! You successfully completed the adventure!"
        ),
        Ending::Fail => writeln!(
            writer,
            "You failed to complete the adventure. Better luck next time!"
        ),
    }
}

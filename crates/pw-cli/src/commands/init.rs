//! Create a starter story file.

use std::fs;
use std::path::Path;

const TEMPLATE: &str = r"#!STORY
# A starter story. Outside a room description, lines beginning with '#'
# are comments. Each room is a header line, a description closed by a
# line of ';;;', and one or more transitions.

R1: At the Crossroads
Two paths diverge in front of you. The sunlit road smells of hay; the
forest path disappears into shadow.
;;;
: Take the sunlit road -> 2
: Slip into the dark forest -> 3

R2: The Sunlit Road
The road carries you home before dusk.
;;;
SUCCESS

# Weighted transitions resolve on their own: the engine draws a room in
# proportion to the weights after the '?'.
R3: The Dark Forest
Something rustles behind you, and the path forks.
;;;
: Run -> 4 ? 3
: Double back -> 2 ? 1

R4: Lost
You run in circles until nightfall swallows the trail.
;;;
FAIL
";

pub fn run(name: &str) -> Result<(), String> {
    let file = format!("{name}.story");
    let path = Path::new(&file);

    if path.exists() {
        return Err(format!("'{file}' already exists"));
    }

    fs::write(path, TEMPLATE).map_err(|e| format!("cannot write {file}: {e}"))?;

    println!("Created story '{file}'");
    println!();
    println!("Get started:");
    println!("  pw check {file}   # Parse it and report its shape");
    println!("  pw play {file}    # Play it");

    Ok(())
}

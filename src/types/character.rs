//! Illustrative characters
//!
//! A small roster of characters shown next to each fresh quote.

use rand::Rng;

/// A character drawn beside the current quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub name: &'static str,
    pub glyph: &'static str,
}

/// Every character the view knows how to draw
pub const ROSTER: &[Character] = &[
    Character { name: "Owl", glyph: "🦉" },
    Character { name: "Fox", glyph: "🦊" },
    Character { name: "Turtle", glyph: "🐢" },
    Character { name: "Cat", glyph: "🐱" },
    Character { name: "Panda", glyph: "🐼" },
    Character { name: "Octopus", glyph: "🐙" },
    Character { name: "Lion", glyph: "🦁" },
];

/// Pick a random character, avoiding `previous` when there is a choice.
pub fn pick(previous: Option<Character>) -> Character {
    pick_from(ROSTER, previous, &mut rand::rng())
}

fn pick_from<R: Rng + ?Sized>(
    roster: &[Character],
    previous: Option<Character>,
    rng: &mut R,
) -> Character {
    let candidates: Vec<Character> = match previous {
        Some(prev) if roster.len() > 1 => roster.iter().copied().filter(|c| *c != prev).collect(),
        _ => roster.to_vec(),
    };
    if candidates.is_empty() {
        return previous.unwrap_or(ROSTER[0]);
    }
    candidates[rng.random_range(0..candidates.len())]
}

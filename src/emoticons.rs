//! Emoticon code expansion.
//!
//! Turns `:shortcode:` codes (gemoji names, as used by GitHub and Slack) and a
//! handful of ASCII faces into unicode glyphs before a message is sent.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-z0-9_+\-]+):").expect("valid shortcode pattern"));

/// ASCII faces, only replaced when they form a whole space-separated word.
const ASCII_FACES: &[(&str, &str)] = &[
    (":)", "😃"),
    (":-)", "😃"),
    (":(", "😞"),
    (":-(", "😞"),
    (":D", "😄"),
    (";)", "😉"),
    (";-)", "😉"),
    (":P", "😛"),
    (":p", "😛"),
    (":O", "😮"),
    (":o", "😮"),
    ("<3", "❤"),
];

/// Expands every known emoticon code in `text`.
///
/// Unknown `:codes:` are kept as typed.
///
/// # Examples
///
/// ```
/// assert_eq!(expand("Hello :) there"), "Hello 😃 there");
/// ```
pub fn expand(text: &str) -> String {
    let text = text
        .split(' ')
        .map(|word| {
            ASCII_FACES
                .iter()
                .find(|(face, _)| *face == word)
                .map_or(word, |(_, glyph)| *glyph)
        })
        .collect::<Vec<_>>()
        .join(" ");

    SHORTCODE
        .replace_all(&text, |caps: &Captures| match emojis::get_by_shortcode(&caps[1]) {
            Some(emoji) => emoji.as_str().to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

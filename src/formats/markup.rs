/*!
 * Markup removal for cue text.
 *
 * SRT and WebVTT carry HTML-like tags (`<i>`, `<c.yellow>`, `<00:00:01.000>`),
 * ASS/SSA carries brace-delimited override blocks (`{\b1}`, `{\an8}`) and the
 * two-character `\N` hard line break.
 */

use regex::Regex;
use once_cell::sync::Lazy;

/// Any `<...>` tag, possibly spanning lines
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").unwrap()
});

/// Any `{...}` override block
static OVERRIDE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^}]*\}").unwrap()
});

/// Remove HTML-like tags; an unterminated `<` is left as text
pub fn strip_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// Remove ASS override blocks; an unterminated `{` is left as text
pub fn strip_override_blocks(text: &str) -> String {
    OVERRIDE_BLOCK_REGEX.replace_all(text, "").into_owned()
}

/// Turn ASS `\N` escapes into real line breaks
pub fn expand_hard_breaks(text: &str) -> String {
    text.replace("\\N", "\n")
}

//! # Transform Engine
//!
//! The pure text transform at the heart of AVS Replace: optional comment
//! stripping followed by ordered literal substitution.
//!
//! ## Philosophy
//!
//! - **Total**: any input string and any pair list produce an output;
//!   malformed pairs are skipped, never rejected
//! - **Literal, not pattern**: `find` text is escaped before matching, so
//!   regex metacharacters have no special meaning
//! - **Ordered**: each pair substitutes over the accumulated output of all
//!   prior pairs, so a later pair may match text an earlier pair produced

use avs_types::ReplacementPair;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

// The three comment styles, stripped unconditionally in this order, each
// pass running over the output of the previous one.
static MARKUP_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("static pattern"));
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("static pattern"));
static LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\r\n]*").expect("static pattern"));
// Runs of spaces/tabs left dangling before a line break collapse to one.
static TRAILING_BLANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+(\r?\n)").expect("static pattern"));

/// Applies the full transform: optional comment stripping, then every
/// pair in list order as a global literal substitution.
pub fn apply(text: &str, pairs: &[ReplacementPair], strip: bool) -> String {
    let mut output = if strip {
        strip_comments(text)
    } else {
        text.to_owned()
    };

    for pair in pairs {
        if !pair.has_find() {
            continue;
        }
        // An escaped literal always compiles; a pair that somehow does
        // not is skipped rather than failing the whole run.
        let Ok(matcher) = Regex::new(&regex::escape(&pair.find)) else {
            continue;
        };
        output = matcher
            .replace_all(&output, NoExpand(&pair.replace))
            .into_owned();
    }

    output
}

/// Removes markup comments, then block comments, then line comments, then
/// collapses trailing whitespace before line breaks to a single space.
pub fn strip_comments(text: &str) -> String {
    let pass1 = MARKUP_COMMENT.replace_all(text, "");
    let pass2 = BLOCK_COMMENT.replace_all(&pass1, "");
    let pass3 = LINE_COMMENT.replace_all(&pass2, "");
    TRAILING_BLANK.replace_all(&pass3, " $1").into_owned()
}

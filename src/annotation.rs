//! `size:` annotation parser.
//!
//! Parameter prose may carry a token linking a buffer to the identifier that
//! holds its length:
//!
//! ```text
//! annotation = "size:" IDENT
//! IDENT      = word-char+        ; letters, digits, underscore
//! ```
//!
//! The token is bounded by word boundaries and may sit anywhere in the
//! paragraph. Only the first token counts; later ones are ignored.

use regex::Regex;
use std::sync::LazyLock;

static RE_SIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bsize:(\w+)\b").unwrap());

/// Return the identifier of the first `size:` token in `text`.
pub fn find_size(text: &str) -> Option<&str> {
    let mut matches = RE_SIZE.captures_iter(text);
    let first = matches.next()?.get(1)?.as_str();

    let ignored = matches.count();
    if ignored > 0 {
        tracing::debug!(size = first, ignored, "multiple size annotations, using the first");
    }
    Some(first)
}

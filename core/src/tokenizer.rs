use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII punctuation plus ASCII digits; `[[:punct:]]` is ASCII-only in the regex crate.
    static ref STRIP: Regex = Regex::new(r"[[:punct:][:digit:]]").expect("valid regex");
}

/// Remove ASCII punctuation and ASCII digits, keeping every other character in order.
pub fn normalize(text: &str) -> String {
    STRIP.replace_all(text, "").into_owned()
}

/// Normalize, lower-case and split on whitespace. Tokens are returned in text order, duplicates included.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Canonical form of a hero name, shared by indexing and querying.
///
/// Spaces and hyphens are dropped, then the name is cut at its first `[`, or at its first `(` when
/// there is no `[` (`"Spider-Man (Peter Parker)"` becomes `"spiderman"`). The rest is normalized and
/// lower-cased.
pub fn prepare_hero_name(name: &str) -> String {
    let joined: String = name.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let head = match joined.find('[').or_else(|| joined.find('(')) {
        Some(cut) => &joined[..cut],
        None => joined.as_str(),
    };
    normalize(head).to_lowercase()
}

//! Display formatting for full names.

use std::sync::LazyLock;

use regex::Regex;

/// Titles stripped from the start of a name, tried in this order.
const TITLES: [&str; 10] = [
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam", "lord", "lady",
];

/// Returned for names with no tokens left after trimming and title removal.
///
/// Kept for compatibility with the directory's historical output. Callers
/// should treat it as an opaque placeholder, not a meaningful name.
pub const EMPTY_NAME_SENTINEL: &str = "undefined, ";

static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TITLES
        .iter()
        .map(|title| Regex::new(&format!(r"(?i)^{title}\.?\s+")).unwrap())
        .collect()
});

static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[IVX]+$").unwrap());

/// Format a full name as `"Last, First Middle"`.
///
/// One leading title (`Dr.`, `Mrs`, ...) is dropped. A trailing Roman numeral
/// suffix (`III`) stays attached after the given names:
///
/// - `"John Doe"` -> `"Doe, John"`
/// - `"Dr. John Smith III"` -> `"Smith, John III"`
/// - `"Madonna"` -> `"Madonna"`
/// - `""` -> [`EMPTY_NAME_SENTINEL`]
pub fn format_name(full_name: &str) -> String {
    let trimmed = full_name.trim();
    let clean = strip_title(trimmed);
    let parts: Vec<&str> = clean.split_whitespace().collect();

    match parts.as_slice() {
        [] => EMPTY_NAME_SENTINEL.to_string(),
        [single] => (*single).to_string(),
        [first, last] => format!("{last}, {first}"),
        [rest @ .., last_name, suffix] if is_roman_numeral(suffix) => {
            format!("{last_name}, {} {suffix}", rest.join(" "))
        }
        [rest @ .., last_name] => format!("{last_name}, {}", rest.join(" ")),
    }
}

/// Remove the first title in [`TITLES`] that prefixes `name`, if any.
fn strip_title(name: &str) -> &str {
    TITLE_PATTERNS
        .iter()
        .find_map(|re| re.find(name))
        .map_or(name, |m| &name[m.end()..])
}

fn is_roman_numeral(token: &str) -> bool {
    ROMAN_NUMERAL.is_match(token)
}

//! First-name extraction for campaign greetings.

use crate::columns::NAME_PLACEHOLDER;

/// Shortest first name kept as-is; anything shorter is replaced.
const MIN_NAME_CHARS: usize = 4;

/// Upper-cased first token of a contact name.
///
/// Blank names and first tokens of one to three characters become
/// [`NAME_PLACEHOLDER`]; length is counted in characters, not bytes.
///
/// # Examples
///
/// ```
/// use campanha_transform::first_name;
///
/// assert_eq!(first_name("maria clara souza"), "MARIA");
/// assert_eq!(first_name("jo"), "CANDIDATO");
/// assert_eq!(first_name("   "), "CANDIDATO");
/// ```
pub fn first_name(raw: &str) -> String {
    let Some(token) = raw.split_whitespace().next() else {
        return NAME_PLACEHOLDER.to_string();
    };
    let upper = token.to_uppercase();
    if upper.chars().count() < MIN_NAME_CHARS {
        NAME_PLACEHOLDER.to_string()
    } else {
        upper
    }
}

//! Hash and address shortening.

const HEAD: usize = 8;
const TAIL: usize = 6;

/// `"ABCDEFGH...UVWXYZ"`: first eight and last six characters.
///
/// Used for both transaction hashes and addresses. Identifiers too short to
/// benefit are returned unchanged.
pub fn truncate(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= HEAD + TAIL {
        return id.to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

pub mod url_validator;

/// Generate a short link identifier of the given length.
///
/// Each position is drawn independently and uniformly (with replacement)
/// from the 62-character alphanumeric alphabet, then the result is
/// normalized to uppercase. `rand::rng()` is a CSPRNG, so identifiers are
/// not externally guessable.
pub fn generate_short_link(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Check the syntactic contract for externally supplied identifiers:
/// exact configured length, alphanumeric characters only.
pub fn is_valid_short_link(link: &str, length: usize) -> bool {
    link.len() == length && link.chars().all(|c| c.is_ascii_alphanumeric())
}

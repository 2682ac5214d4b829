//! Entity identifier generation
//!
//! Identifiers are a kind prefix followed by a random alphanumeric suffix,
//! e.g. `album-Qm8ZkT1xV4cL9pWe`.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Prefix for album identifiers.
pub const ALBUM_ID_PREFIX: &str = "album-";
/// Prefix for song identifiers.
pub const SONG_ID_PREFIX: &str = "song-";

/// Length of the random part. 62^16 possible suffixes.
pub const ID_SUFFIX_LEN: usize = 16;

/// Generate a new identifier starting with `prefix`.
pub fn generate_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_carries_prefix_and_suffix() {
        let id = generate_id(ALBUM_ID_PREFIX);
        assert!(id.starts_with("album-"));
        let suffix = &id[ALBUM_ID_PREFIX.len()..];
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn album_and_song_prefixes_differ() {
        assert!(generate_id(SONG_ID_PREFIX).starts_with("song-"));
        assert!(!generate_id(SONG_ID_PREFIX).starts_with(ALBUM_ID_PREFIX));
    }

    #[test]
    fn ids_do_not_repeat() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id(SONG_ID_PREFIX)).collect();
        assert_eq!(ids.len(), 10_000);
    }
}

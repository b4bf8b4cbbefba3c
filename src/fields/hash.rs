//! FNV-1a hashing of header field text.

const INITIAL_STATE: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME: u64 = 0x0100_0000_01b3;

/// Hash bytes with each byte folded to ASCII lowercase.
///
/// Strings that differ only in ASCII case hash identically.
pub(super) const fn fold_case(bytes: &[u8]) -> u64 {
    let mut hash = INITIAL_STATE;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i].to_ascii_lowercase() as u64;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }

    hash
}

/// Hash bytes exactly as given.
pub(super) const fn exact(bytes: &[u8]) -> u64 {
    let mut hash = INITIAL_STATE;
    let mut i = 0;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(PRIME);
        i += 1;
    }

    hash
}

#[cfg(test)]
mod test {
    use super::*;

    const _: () = assert!(fold_case(b"Content-Type") == fold_case(b"content-type"));

    #[test]
    fn fold_case_ignores_ascii_case() {
        assert_eq!(fold_case(b"Host"), fold_case(b"HOST"));
        assert_eq!(fold_case(b"set-cookie"), fold_case(b"Set-Cookie"));
        assert_ne!(fold_case(b"host"), fold_case(b"host2"));
    }

    #[test]
    fn exact_is_case_sensitive() {
        assert_eq!(exact(b"text/html"), exact(b"text/html"));
        assert_ne!(exact(b"text/html"), exact(b"TEXT/HTML"));
    }
}

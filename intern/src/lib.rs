#![deny(unsafe_code)]

//! Interned string keys for hash-based containers.
//!
//! Host string types don't hash; [`Token`] makes their content usable as a
//! map key. Construction interns the content, hashing forwards to the
//! interned atom's hash, and equality is content equality (which, interned,
//! is a pointer comparison). Interning happens once per token, not on every
//! hash call.
//!
//! # Example
//!
//! ```
//! use arraybridge_intern::{Token, TokenMap};
//!
//! let mut weights: TokenMap<f64> = TokenMap::new();
//! weights.insert(Token::new("deformer"), 0.5);
//!
//! // A token built later from equal content finds the same entry.
//! assert_eq!(weights.get(&Token::new("deformer")), Some(&0.5));
//! ```

use core::fmt;

use string_cache::DefaultAtom;

/// An interned string key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    atom: DefaultAtom,
}

impl Token {
    /// Intern `content` and return its key.
    pub fn new(content: impl AsRef<str>) -> Self {
        Token {
            atom: DefaultAtom::from(content.as_ref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atom.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.atom
    }
}

/// The empty token.
impl Default for Token {
    fn default() -> Self {
        Token::new("")
    }
}

impl From<&str> for Token {
    fn from(content: &str) -> Self {
        Token::new(content)
    }
}

impl From<String> for Token {
    fn from(content: String) -> Self {
        Token::new(content)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&self.as_str()).finish()
    }
}

/// Hash map keyed by [`Token`].
pub type TokenMap<V> = hashbrown::HashMap<Token, V>;

/// Hash set of [`Token`]s.
pub type TokenSet = hashbrown::HashSet<Token>;

#[cfg(test)]
mod tests {
    use core::hash::{Hash, Hasher};
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(token: &Token) -> u64 {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn round_trips_content() {
        let token = Token::new("outMesh");
        assert_eq!(token.as_str(), "outMesh");
        assert!(!token.is_empty());
        assert!(Token::default().is_empty());
    }

    #[test]
    fn equality_is_content_equality() {
        let a = Token::new("translateX");
        let b = Token::from("translateX");
        let c = Token::new("translateY");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equal_content_hashes_identically() {
        let a = Token::new("worldMatrix");
        let b = Token::from(String::from("worldMatrix"));
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn map_lookup_by_fresh_token() {
        let mut map: TokenMap<i32> = TokenMap::new();
        map.insert(Token::new("alpha"), 1);
        map.insert(Token::new("beta"), 2);

        assert_eq!(map.get(&Token::new("alpha")), Some(&1));
        assert_eq!(map.get(&Token::new("beta")), Some(&2));
        assert_eq!(map.get(&Token::new("gamma")), None);
    }

    #[test]
    fn set_deduplicates() {
        let mut set = TokenSet::new();
        assert!(set.insert(Token::new("a")));
        assert!(!set.insert(Token::new("a")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_is_bare_content() {
        let token = Token::new("visibility");
        assert_eq!(token.to_string(), "visibility");
        assert_eq!(format!("{token:?}"), "Token(\"visibility\")");
    }
}

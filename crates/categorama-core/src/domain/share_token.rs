//! Share Token
//!
//! Short key under which a saved list is stored and through which it is
//! shared (`https://…/#<token>`). Tokens are random; with 62^7 possible
//! values no collision check is made.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::random::{random_string, MIXED_ALNUM};

pub const SHARE_TOKEN_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShareToken(String);

impl ShareToken {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(random_string(rng, MIXED_ALNUM, SHARE_TOKEN_LEN))
    }

    /// Read a token out of a URL fragment, with or without the leading `#`.
    /// Returns `None` for an empty fragment.
    pub fn from_fragment(fragment: &str) -> Option<Result<Self, DomainError>> {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment).trim();
        if raw.is_empty() {
            None
        } else {
            Some(raw.parse())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment form, `#<token>`
    pub fn to_fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl FromStr for ShareToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == SHARE_TOKEN_LEN && s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidInput(format!("not a share token: {:?}", s)))
        }
    }
}

impl TryFrom<String> for ShareToken {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShareToken> for String {
    fn from(token: ShareToken) -> Self {
        token.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_token_parses_back() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let token = ShareToken::generate(&mut rng);
            assert_eq!(token.as_str().len(), SHARE_TOKEN_LEN);
            assert_eq!(token.as_str().parse::<ShareToken>().unwrap(), token);
        }
    }

    #[test]
    fn test_rejects_wrong_shape() {
        assert!("abc".parse::<ShareToken>().is_err());
        assert!("abcdefgh".parse::<ShareToken>().is_err());
        assert!("abc-efg".parse::<ShareToken>().is_err());
    }

    #[test]
    fn test_from_fragment() {
        assert!(ShareToken::from_fragment("").is_none());
        assert!(ShareToken::from_fragment("#").is_none());

        let token = ShareToken::from_fragment("#aB3dE5g").unwrap().unwrap();
        assert_eq!(token.as_str(), "aB3dE5g");
        assert_eq!(token.to_fragment(), "#aB3dE5g");

        assert!(ShareToken::from_fragment("#nope").unwrap().is_err());
    }
}

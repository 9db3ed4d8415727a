// Weak ETag codec for stream versions.
//
// The version travels as the weak validator `W/"<version>"`: two carts at the
// same version are semantically equivalent even if their byte representation
// is not. A strong validator (a bare quoted value) is not a version token and
// is rejected.

use thiserror::Error;

use crate::shared::core::primitives::StreamVersion;
use crate::shared::core::validation::require_non_negative_integer;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ETagError {
    #[error("missing {0} header")]
    MissingPrecondition(&'static str),

    #[error("invalid If-Match token: {0}")]
    InvalidToken(String),
}

pub fn encode(version: StreamVersion) -> String {
    format!("W/\"{version}\"")
}

pub fn decode(token: &str) -> Result<StreamVersion, ETagError> {
    let digits = token
        .strip_prefix("W/\"")
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| ETagError::InvalidToken(token.to_string()))?;
    require_non_negative_integer("If-Match", digits)
        .map_err(|_| ETagError::InvalidToken(token.to_string()))
}

#[cfg(test)]
mod etag_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(42)]
    #[case(u64::MAX)]
    fn it_should_round_trip_every_version(#[case] version: StreamVersion) {
        assert_eq!(decode(&encode(version)), Ok(version));
    }

    #[rstest]
    fn it_should_encode_the_weak_validator_form() {
        assert_eq!(encode(0), "W/\"0\"");
        assert_eq!(encode(17), "W/\"17\"");
    }

    #[rstest]
    #[case("\"3\"")]
    #[case("3")]
    #[case("W/\"-1\"")]
    #[case("W/\"+1\"")]
    #[case("W/\"abc\"")]
    #[case("W/\"\"")]
    #[case("W/\"1")]
    #[case("w/\"1\"")]
    #[case("")]
    fn it_should_reject_malformed_and_strong_tokens(#[case] token: &str) {
        assert_eq!(
            decode(token),
            Err(ETagError::InvalidToken(token.to_string()))
        );
    }
}

// ABOUTME: Parser for compact special-dice notation like "a2, n1".
// ABOUTME: Each token adds one advantage or negative die to the pool.

use crate::config::{ClampNotice, DieConfig};
use crate::error::{Error, Result};

/// Parsed special dice plus any clamp notices raised along the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialDice {
    /// One configuration per valid token, in input order.
    pub configs: Vec<DieConfig>,
    /// Non-fatal corrections to over-the-max mark counts.
    pub notices: Vec<ClampNotice>,
}

/// Parse special-dice notation into die configurations.
///
/// Tokens are separated by commas and/or whitespace; empty tokens are
/// dropped. `aN` adds an advantage die with N plus faces and `nN` a
/// negative die with N minus faces, case-insensitive, with N clamped
/// into [1, 4]. Any other token fails the whole parse: no partial
/// configuration list is returned.
///
/// Empty input yields an empty list, meaning "no special dice".
pub fn parse_special_dice(input: &str) -> Result<SpecialDice> {
    let mut parsed = SpecialDice::default();

    let tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        let Some((kind, count)) = split_token(token) else {
            return Err(Error::MalformedToken(token.to_string()));
        };

        let (config, notice) = match kind {
            'a' => DieConfig::advantage(count),
            _ => DieConfig::negative(count),
        };

        parsed.configs.push(config);
        parsed.notices.extend(notice);
    }

    Ok(parsed)
}

/// Split a token into its kind letter and mark count.
///
/// Returns `None` unless the token is exactly one of `a`/`n` (either
/// case) followed by one or more ASCII digits.
fn split_token(token: &str) -> Option<(char, u32)> {
    let mut chars = token.chars();
    let kind = chars.next()?.to_ascii_lowercase();
    if kind != 'a' && kind != 'n' {
        return None;
    }

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let count = digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as u32));

    Some((kind, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_advantage_and_negative() {
        let parsed = parse_special_dice("a2, n1").unwrap();
        assert_eq!(
            parsed.configs,
            vec![
                DieConfig::Advantage { plus: 2 },
                DieConfig::Negative { minus: 1 },
            ]
        );
        assert!(parsed.notices.is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_special_dice("").unwrap(), SpecialDice::default());
        assert_eq!(parse_special_dice("  \t ").unwrap(), SpecialDice::default());
    }

    #[test]
    fn test_parse_case_insensitive_and_whitespace_separated() {
        let parsed = parse_special_dice("A2 N1  a1").unwrap();
        assert_eq!(
            parsed.configs,
            vec![
                DieConfig::Advantage { plus: 2 },
                DieConfig::Negative { minus: 1 },
                DieConfig::Advantage { plus: 1 },
            ]
        );
    }

    #[test]
    fn test_parse_mixed_separators() {
        let parsed = parse_special_dice(" a1,,  n2 , a3 ").unwrap();
        assert_eq!(parsed.configs.len(), 3);
    }

    #[test]
    fn test_parse_invalid_token_names_offender() {
        let err = parse_special_dice("a2, x9").unwrap_err();
        assert_eq!(err, Error::MalformedToken("x9".to_string()));
    }

    #[test]
    fn test_parse_invalid_token_aborts_whole_parse() {
        // Valid tokens after the bad one must not leak out either.
        let err = parse_special_dice("zz, a1").unwrap_err();
        assert_eq!(err, Error::MalformedToken("zz".to_string()));
    }

    #[test]
    fn test_parse_rejects_bare_letter_and_trailing_junk() {
        assert!(parse_special_dice("a").is_err());
        assert!(parse_special_dice("n").is_err());
        assert!(parse_special_dice("a2b").is_err());
        assert!(parse_special_dice("2a").is_err());
    }

    #[test]
    fn test_parse_clamps_high_count_with_notice() {
        let parsed = parse_special_dice("a9").unwrap();
        assert_eq!(parsed.configs, vec![DieConfig::Advantage { plus: 4 }]);
        assert_eq!(parsed.notices.len(), 1);
        assert_eq!(parsed.notices[0].requested, 9);
        assert_eq!(parsed.notices[0].used, 4);
    }

    #[test]
    fn test_parse_zero_count_resolves_to_one_silently() {
        let parsed = parse_special_dice("n0").unwrap();
        assert_eq!(parsed.configs, vec![DieConfig::Negative { minus: 1 }]);
        assert!(parsed.notices.is_empty());
    }

    #[test]
    fn test_parse_huge_count_saturates_then_clamps() {
        let parsed = parse_special_dice("a99999999999999999999").unwrap();
        assert_eq!(parsed.configs, vec![DieConfig::Advantage { plus: 4 }]);
        assert_eq!(parsed.notices.len(), 1);
    }
}

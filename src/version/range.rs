// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::SemanticVersion;
use crate::error::{PackMetaError, Result};
use std::fmt;
use std::str::FromStr;

/// A version constraint in interval notation.
///
/// | Notation      | Meaning         |
/// |---------------|-----------------|
/// | `1.0`         | 1.0 <= x        |
/// | `[1.0]`       | x == 1.0        |
/// | `(1.0,)`      | 1.0 < x         |
/// | `(,2.0]`      | x <= 2.0        |
/// | `[1.0,2.0)`   | 1.0 <= x < 2.0  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub min: Option<SemanticVersion>,
    pub min_inclusive: bool,
    pub max: Option<SemanticVersion>,
    pub max_inclusive: bool,
}

impl VersionRange {
    pub fn at_least(min: SemanticVersion) -> Self {
        Self {
            min: Some(min),
            min_inclusive: true,
            max: None,
            max_inclusive: false,
        }
    }

    pub fn exact(version: SemanticVersion) -> Self {
        Self {
            min: Some(version.clone()),
            min_inclusive: true,
            max: Some(version),
            max_inclusive: true,
        }
    }

    /// Parse a range that may be blank. Blank means "any version".
    pub fn parse_optional(input: &str) -> Result<Option<Self>> {
        if input.trim().is_empty() {
            Ok(None)
        } else {
            Self::from_str(input).map(Some)
        }
    }

    pub fn is_exact(&self) -> bool {
        self.min_inclusive && self.max_inclusive && self.min.is_some() && self.min == self.max
    }

    pub fn satisfies(&self, version: &SemanticVersion) -> bool {
        let above_min = match &self.min {
            Some(min) if self.min_inclusive => version >= min,
            Some(min) => version > min,
            None => true,
        };
        let below_max = match &self.max {
            Some(max) if self.max_inclusive => version <= max,
            Some(max) => version < max,
            None => true,
        };
        above_min && below_max
    }
}

fn parse_bound(bound: &str, input: &str) -> Result<Option<SemanticVersion>> {
    let bound = bound.trim();
    if bound.is_empty() {
        return Ok(None);
    }
    SemanticVersion::from_str(bound)
        .map(Some)
        .map_err(|_| PackMetaError::InvalidVersionRange(input.to_string()))
}

impl FromStr for VersionRange {
    type Err = PackMetaError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let invalid = || PackMetaError::InvalidVersionRange(s.to_string());

        if input.is_empty() {
            return Err(invalid());
        }

        let min_inclusive = match input.as_bytes()[0] {
            b'[' => true,
            b'(' => false,
            _ => {
                return SemanticVersion::from_str(input)
                    .map(Self::at_least)
                    .map_err(|_| invalid());
            }
        };

        if input.len() < 3 {
            return Err(invalid());
        }
        let max_inclusive = match input.as_bytes()[input.len() - 1] {
            b']' => true,
            b')' => false,
            _ => return Err(invalid()),
        };
        let inner = &input[1..input.len() - 1];

        let range = match inner.split_once(',') {
            None => {
                // Only the bracketed single version form "[1.0]" is allowed
                if !(min_inclusive && max_inclusive) {
                    return Err(invalid());
                }
                let version = parse_bound(inner, s)?.ok_or_else(invalid)?;
                Self::exact(version)
            }
            Some((min, max)) => {
                if max.contains(',') {
                    return Err(invalid());
                }
                Self {
                    min: parse_bound(min, s)?,
                    min_inclusive,
                    max: parse_bound(max, s)?,
                    max_inclusive,
                }
            }
        };

        match (&range.min, &range.max) {
            (None, None) => Err(invalid()),
            (Some(min), Some(max)) if min > max => Err(invalid()),
            (Some(min), Some(max)) if min == max && !(min_inclusive && max_inclusive) => {
                Err(invalid())
            }
            _ => Ok(range),
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            if let Some(version) = &self.min {
                return write!(f, "[{version}]");
            }
        }

        if let (Some(min), true, None) = (&self.min, self.min_inclusive, &self.max) {
            return write!(f, "{min}");
        }

        let open = if self.min_inclusive { '[' } else { '(' };
        let close = if self.max_inclusive { ']' } else { ')' };
        let min = self.min.as_ref().map(|v| v.to_string()).unwrap_or_default();
        let max = self.max.as_ref().map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{open}{min}, {max}{close}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemanticVersion {
        SemanticVersion::from_str(s).unwrap()
    }

    #[test]
    fn test_minimum_version_form() {
        let range = VersionRange::from_str("1.0").unwrap();
        assert_eq!(range, VersionRange::at_least(v("1.0")));
        assert!(range.satisfies(&v("1.0.0")));
        assert!(range.satisfies(&v("5.0.0")));
        assert!(!range.satisfies(&v("0.9.9")));
    }

    #[test]
    fn test_exact_form() {
        let range = VersionRange::from_str("[1.2.3]").unwrap();
        assert!(range.is_exact());
        assert!(range.satisfies(&v("1.2.3")));
        assert!(!range.satisfies(&v("1.2.4")));
        assert_eq!(range.to_string(), "[1.2.3]");
    }

    #[test]
    fn test_interval_forms() {
        let range = VersionRange::from_str("[1.0, 2.0)").unwrap();
        assert!(range.satisfies(&v("1.0")));
        assert!(range.satisfies(&v("1.9.9")));
        assert!(!range.satisfies(&v("2.0")));
        assert!(range.satisfies(&v("2.0.0-beta")));

        let range = VersionRange::from_str("(,2.0]").unwrap();
        assert_eq!(range.min, None);
        assert!(range.satisfies(&v("0.1")));
        assert!(range.satisfies(&v("2.0")));

        let range = VersionRange::from_str("(1.0,)").unwrap();
        assert!(!range.satisfies(&v("1.0")));
        assert!(range.satisfies(&v("1.0.1")));
    }

    #[test]
    fn test_invalid_ranges() {
        for input in [
            "", "[", "[]", "(,)", "[1.0", "1.0]", "(1.0)", "[2.0,1.0]", "(1.0,1.0]", "[a,b]",
            "[1.0,2.0,3.0]",
        ] {
            assert!(
                VersionRange::from_str(input).is_err(),
                "'{input}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(VersionRange::parse_optional("  ").unwrap(), None);
        assert!(VersionRange::parse_optional("[1.0]").unwrap().is_some());
        assert!(VersionRange::parse_optional("[x]").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["1.0.0", "[1.0.0]", "[1.0.0, 2.0.0)", "(, 3.0.0]", "(1.0.0, )"] {
            let range = VersionRange::from_str(input).unwrap();
            assert_eq!(range.to_string(), input);
            assert_eq!(VersionRange::from_str(&range.to_string()).unwrap(), range);
        }
    }
}

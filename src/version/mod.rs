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

pub mod range;

pub use range::VersionRange;

use crate::error::{PackMetaError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A NuGet-style semantic version: `major.minor.patch[.revision][-release][+metadata]`.
///
/// Missing minor and patch components parse as 0, so `1.2` and `1.2.0` are the
/// same version. A fourth component is kept as `revision` and printed back only
/// when it was present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub revision: Option<u32>,
    pub release: Option<String>,
    pub metadata: Option<String>,
}

impl SemanticVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            revision: None,
            release: None,
            metadata: None,
        }
    }

    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn is_prerelease(&self) -> bool {
        self.release.is_some()
    }

    /// SemVer 2.0.0 only features: dotted release labels or build metadata.
    pub fn is_semver2(&self) -> bool {
        self.metadata.is_some()
            || self
                .release
                .as_deref()
                .is_some_and(|release| release.contains('.'))
    }

    /// Version string without build metadata and without a zero revision.
    pub fn to_normalized_string(&self) -> String {
        let mut normalized = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(revision) = self.revision.filter(|r| *r != 0) {
            normalized.push_str(&format!(".{revision}"));
        }
        if let Some(release) = &self.release {
            normalized.push_str(&format!("-{release}"));
        }
        normalized
    }

    /// Check that the release and metadata labels would parse back unchanged.
    pub fn validate(&self) -> Result<()> {
        let labels = [self.release.as_deref(), self.metadata.as_deref()];
        if labels.into_iter().flatten().all(is_valid_label) {
            Ok(())
        } else {
            Err(PackMetaError::InvalidVersionFormat(self.to_string()))
        }
    }

    fn numeric_key(&self) -> (u32, u32, u32, u32) {
        (
            self.major,
            self.minor,
            self.patch,
            self.revision.unwrap_or(0),
        )
    }
}

fn parse_numeric_component(component: &str, input: &str) -> Result<u32> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PackMetaError::InvalidVersionFormat(input.to_string()));
    }
    component
        .parse::<u32>()
        .map_err(|_| PackMetaError::InvalidVersionFormat(input.to_string()))
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.split('.').all(|identifier| {
            !identifier.is_empty()
                && identifier
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        })
}

impl FromStr for SemanticVersion {
    type Err = PackMetaError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let invalid = || PackMetaError::InvalidVersionFormat(s.to_string());

        let (rest, metadata) = match input.split_once('+') {
            Some((rest, metadata)) => {
                if !is_valid_label(metadata) {
                    return Err(invalid());
                }
                (rest, Some(metadata.to_string()))
            }
            None => (input, None),
        };

        let (core, release) = match rest.split_once('-') {
            Some((core, release)) => {
                if !is_valid_label(release) {
                    return Err(invalid());
                }
                (core, Some(release.to_string()))
            }
            None => (rest, None),
        };

        let components: Vec<&str> = core.split('.').collect();
        if components.is_empty() || components.len() > 4 {
            return Err(invalid());
        }

        let major = parse_numeric_component(components[0], s)?;
        let minor = match components.get(1) {
            Some(component) => parse_numeric_component(component, s)?,
            None => 0,
        };
        let patch = match components.get(2) {
            Some(component) => parse_numeric_component(component, s)?,
            None => 0,
        };
        let revision = match components.get(3) {
            Some(component) => Some(parse_numeric_component(component, s)?),
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
            revision,
            release,
            metadata,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if let Some(revision) = self.revision {
            write!(f, ".{revision}")?;
        }
        if let Some(release) = &self.release {
            write!(f, "-{release}")?;
        }
        if let Some(metadata) = &self.metadata {
            write!(f, "+{metadata}")?;
        }
        Ok(())
    }
}

fn compare_identifiers(left: &str, right: &str) -> Ordering {
    let left_numeric = left.bytes().all(|b| b.is_ascii_digit());
    let right_numeric = right.bytes().all(|b| b.is_ascii_digit());

    match (left_numeric, right_numeric) {
        (true, true) => {
            let left = left.trim_start_matches('0');
            let right = right.trim_start_matches('0');
            left.len().cmp(&right.len()).then_with(|| left.cmp(right))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left
            .to_ascii_lowercase()
            .cmp(&right.to_ascii_lowercase()),
    }
}

fn compare_release(left: Option<&str>, right: Option<&str>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        // A stable release sorts after every prerelease of the same numbers
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => {
            let mut left_parts = left.split('.');
            let mut right_parts = right.split('.');
            loop {
                match (left_parts.next(), right_parts.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(l), Some(r)) => match compare_identifiers(l, r) {
                        Ordering::Equal => continue,
                        other => return other,
                    },
                }
            }
        }
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_key()
            .cmp(&other.numeric_key())
            .then_with(|| compare_release(self.release.as_deref(), other.release.as_deref()))
            // Tie-breakers keep Ord consistent with the derived Eq
            .then_with(|| self.revision.cmp(&other.revision))
            .then_with(|| self.release.cmp(&other.release))
            .then_with(|| self.metadata.cmp(&other.metadata))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(serde::ser::Error::custom)?;
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SemanticVersion::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

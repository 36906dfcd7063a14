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

use crate::error::{PackMetaError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    /// Has an explicit scheme (`https://...`, `urn:...`, `file:///...`)
    Absolute,
    /// Scheme-less network share location, `//host/path`
    Unc,
    Relative,
}

/// A URL attached to a package, kept in the exact form it was given.
///
/// The `url` crate normalizes what it parses (lower-cased scheme, trailing
/// slashes), so only the classification comes from it; the original string
/// is what gets displayed and stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageUrl {
    original: String,
    kind: UrlKind,
}

impl PackageUrl {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(PackMetaError::InvalidUrl(input.to_string()));
        }

        let kind = if is_unc(input) {
            UrlKind::Unc
        } else {
            match Url::parse(input) {
                Ok(_) => UrlKind::Absolute,
                Err(url::ParseError::RelativeUrlWithoutBase) => UrlKind::Relative,
                Err(e) => return Err(PackMetaError::InvalidUrl(format!("{input}: {e}"))),
            }
        };

        Ok(Self {
            original: input.to_string(),
            kind,
        })
    }

    /// Parse a URL that must be absolute, either with a scheme or in UNC form.
    pub fn absolute(input: &str) -> Result<Self> {
        let url = Self::parse(input)?;
        if url.is_absolute() {
            Ok(url)
        } else {
            Err(PackMetaError::InvalidUrl(format!(
                "{input}: expected an absolute URL"
            )))
        }
    }

    pub fn kind(&self) -> UrlKind {
        self.kind
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self.kind, UrlKind::Absolute | UrlKind::Unc)
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Resolve to a parsed URL. UNC locations map onto `file://host/path`.
    pub fn to_url(&self) -> Option<Url> {
        match self.kind {
            UrlKind::Absolute => Url::parse(&self.original).ok(),
            UrlKind::Unc => Url::parse(&format!("file:{}", self.original)).ok(),
            UrlKind::Relative => None,
        }
    }
}

fn is_unc(input: &str) -> bool {
    input
        .strip_prefix("//")
        .and_then(|rest| rest.split('/').next())
        .is_some_and(|host| !host.is_empty())
}

impl FromStr for PackageUrl {
    type Err = PackMetaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

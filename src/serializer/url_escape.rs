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

//! Wire encoding of package URLs.
//!
//! A UNC location such as `//server/share/icon.png` has no scheme, so a
//! generic reader takes it for a relative reference. On the wire it is
//! written as `file://server/share/icon.png` instead, which is the same
//! location in absolute form.
//!
//! To keep the mapping reversible, any URL that already starts with `file:`
//! gets the prefix too:
//!
//! | stored                | written                    |
//! |-----------------------|----------------------------|
//! | `//server/share`      | `file://server/share`      |
//! | `file:///srv/pkg`     | `file:file:///srv/pkg`     |
//! | `https://example.org` | `https://example.org`      |
//!
//! Reading strips exactly one `file:` prefix when present. The prefix test is
//! ASCII case-insensitive in both directions.

use serde::{Deserialize, Deserializer, Serializer};
use std::borrow::Cow;

use crate::models::PackageUrl;

const ESCAPE_PREFIX: &str = "file:";

fn has_escape_prefix(value: &str) -> bool {
    value
        .get(..ESCAPE_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(ESCAPE_PREFIX))
}

pub fn escape_url(url: &str) -> Cow<'_, str> {
    if url.starts_with("//") || has_escape_prefix(url) {
        Cow::Owned(format!("{ESCAPE_PREFIX}{url}"))
    } else {
        Cow::Borrowed(url)
    }
}

pub fn unescape_url(encoded: &str) -> &str {
    if has_escape_prefix(encoded) {
        &encoded[ESCAPE_PREFIX.len()..]
    } else {
        encoded
    }
}

pub fn serialize<S>(url: &Option<PackageUrl>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match url {
        Some(url) => serializer.serialize_str(&escape_url(url.as_str())),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PackageUrl>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded: Option<String> = Option::deserialize(deserializer)?;
    encoded
        .map(|encoded| PackageUrl::parse(unescape_url(&encoded)))
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unc_is_written_as_file_url() {
        assert_eq!(escape_url("//testunc/test/a"), "file://testunc/test/a");
        assert_eq!(unescape_url("file://testunc/test/a"), "//testunc/test/a");
    }

    #[test]
    fn test_file_urls_keep_their_scheme() {
        assert_eq!(escape_url("file:///srv/pkg"), "file:file:///srv/pkg");
        assert_eq!(unescape_url("file:file:///srv/pkg"), "file:///srv/pkg");

        assert_eq!(escape_url("FILE://host/x"), "file:FILE://host/x");
        assert_eq!(unescape_url("file:FILE://host/x"), "FILE://host/x");
    }

    #[test]
    fn test_other_urls_pass_through() {
        for url in ["https://example.org/a", "urn:icon", "relative/path", "fil"] {
            assert!(matches!(escape_url(url), Cow::Borrowed(_)));
            assert_eq!(unescape_url(url), url);
        }
    }

    #[test]
    fn test_multibyte_input_near_prefix() {
        // Byte index 5 falls inside a multi-byte character
        assert_eq!(escape_url("fileé:x"), "fileé:x");
        assert_eq!(unescape_url("ñfile:x"), "ñfile:x");
    }

    proptest! {
        #[test]
        fn unescape_inverts_escape(url in ".*") {
            let escaped = escape_url(&url);
            prop_assert_eq!(unescape_url(&escaped), url.as_str());
        }

        #[test]
        fn unc_paths_escape_to_absolute_urls(host in "[a-z][a-z0-9]{0,12}", path in "(/[a-z0-9]{1,8}){0,4}") {
            // file://localhost/ is normalized to an empty host
            prop_assume!(host != "localhost");
            let unc = format!("//{host}{path}");
            let escaped = escape_url(&unc);
            let parsed = PackageUrl::parse(&escaped).unwrap();
            prop_assert!(parsed.is_absolute());
            let url = parsed.to_url().unwrap();
            prop_assert_eq!(url.host_str(), Some(host.as_str()));
        }
    }
}

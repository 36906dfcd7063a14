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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::dependency::{self, DependencySet};
use crate::models::url::PackageUrl;
use crate::version::SemanticVersion;

/// Metadata snapshot of one package as held by a package store.
///
/// Field order is the key order of the serialized object. Parsed dependency
/// groups and framework lists are not stored here; they are computed from
/// `dependencies` and `supported_frameworks` when asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerPackage {
    pub id: String,
    pub version: SemanticVersion,
    pub title: String,
    pub authors: Vec<String>,
    pub owners: Vec<String>,
    #[serde(with = "crate::serializer::url_escape", default)]
    pub icon_url: Option<PackageUrl>,
    #[serde(with = "crate::serializer::url_escape", default)]
    pub license_url: Option<PackageUrl>,
    #[serde(with = "crate::serializer::url_escape", default)]
    pub project_url: Option<PackageUrl>,
    pub require_license_acceptance: bool,
    pub development_dependency: bool,
    pub description: String,
    pub summary: String,
    pub release_notes: String,
    pub language: String,
    pub tags: String,
    pub copyright: String,
    #[serde(default)]
    pub min_client_version: Option<SemanticVersion>,
    #[serde(with = "crate::serializer::url_escape", default)]
    pub report_abuse_url: Option<PackageUrl>,
    pub download_count: u64,
    pub sem_ver1_is_absolute_latest: bool,
    pub sem_ver1_is_latest: bool,
    pub sem_ver2_is_absolute_latest: bool,
    pub sem_ver2_is_latest: bool,
    pub listed: bool,
    pub dependencies: String,
    pub supported_frameworks: String,
    pub package_size: u64,
    pub package_hash: String,
    pub package_hash_algorithm: String,
    #[serde(with = "crate::serializer::timestamp")]
    pub last_updated: DateTime<FixedOffset>,
    #[serde(with = "crate::serializer::timestamp")]
    pub created: DateTime<FixedOffset>,
    pub full_path: String,
}

macro_rules! first_differing_field {
    ($left:expr, $right:expr; $($field:ident => $name:literal),+ $(,)?) => {
        $(
            if $left.$field != $right.$field {
                return Some($name);
            }
        )+
    };
}

impl ServerPackage {
    pub fn new(
        id: impl Into<String>,
        version: SemanticVersion,
        timestamp: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: id.into(),
            version,
            title: String::new(),
            authors: Vec::new(),
            owners: Vec::new(),
            icon_url: None,
            license_url: None,
            project_url: None,
            require_license_acceptance: false,
            development_dependency: false,
            description: String::new(),
            summary: String::new(),
            release_notes: String::new(),
            language: String::new(),
            tags: String::new(),
            copyright: String::new(),
            min_client_version: None,
            report_abuse_url: None,
            download_count: 0,
            sem_ver1_is_absolute_latest: false,
            sem_ver1_is_latest: false,
            sem_ver2_is_absolute_latest: false,
            sem_ver2_is_latest: false,
            listed: true,
            dependencies: String::new(),
            supported_frameworks: String::new(),
            package_size: 0,
            package_hash: String::new(),
            package_hash_algorithm: String::new(),
            last_updated: timestamp,
            created: timestamp,
            full_path: String::new(),
        }
    }

    /// Dependency groups parsed from the raw `dependencies` string.
    pub fn dependency_sets(&self) -> Result<Vec<DependencySet>> {
        dependency::parse_dependencies(&self.dependencies)
    }

    pub fn supported_framework_list(&self) -> Vec<String> {
        dependency::parse_supported_frameworks(&self.supported_frameworks)
    }

    /// Name of the first stored field whose value differs from `other`, using
    /// the serialized key names. Timestamps must agree on both the instant and
    /// the UTC offset.
    pub fn first_mismatch(&self, other: &ServerPackage) -> Option<&'static str> {
        first_differing_field!(self, other;
            id => "Id",
            version => "Version",
            title => "Title",
            authors => "Authors",
            owners => "Owners",
            icon_url => "IconUrl",
            license_url => "LicenseUrl",
            project_url => "ProjectUrl",
            require_license_acceptance => "RequireLicenseAcceptance",
            development_dependency => "DevelopmentDependency",
            description => "Description",
            summary => "Summary",
            release_notes => "ReleaseNotes",
            language => "Language",
            tags => "Tags",
            copyright => "Copyright",
            min_client_version => "MinClientVersion",
            report_abuse_url => "ReportAbuseUrl",
            download_count => "DownloadCount",
            sem_ver1_is_absolute_latest => "SemVer1IsAbsoluteLatest",
            sem_ver1_is_latest => "SemVer1IsLatest",
            sem_ver2_is_absolute_latest => "SemVer2IsAbsoluteLatest",
            sem_ver2_is_latest => "SemVer2IsLatest",
            listed => "Listed",
            dependencies => "Dependencies",
            supported_frameworks => "SupportedFrameworks",
            package_size => "PackageSize",
            package_hash => "PackageHash",
            package_hash_algorithm => "PackageHashAlgorithm",
            full_path => "FullPath",
        );

        if !same_instant_and_offset(&self.last_updated, &other.last_updated) {
            return Some("LastUpdated");
        }
        if !same_instant_and_offset(&self.created, &other.created) {
            return Some("Created");
        }
        None
    }

    pub fn matches(&self, other: &ServerPackage) -> bool {
        self.first_mismatch(other).is_none()
    }
}

fn same_instant_and_offset(left: &DateTime<FixedOffset>, right: &DateTime<FixedOffset>) -> bool {
    left == right && left.offset() == right.offset()
}

/// Compare two package lists record by record. Returns the index and field
/// name of the first difference; a length mismatch reports the first index
/// past the shorter list with the field `"<missing>"`.
pub fn first_list_mismatch(
    left: &[ServerPackage],
    right: &[ServerPackage],
) -> Option<(usize, &'static str)> {
    for (index, (l, r)) in left.iter().zip(right).enumerate() {
        if let Some(field) = l.first_mismatch(r) {
            return Some((index, field));
        }
    }

    if left.len() != right.len() {
        return Some((left.len().min(right.len()), "<missing>"));
    }
    None
}

pub fn packages_match(left: &[ServerPackage], right: &[ServerPackage]) -> bool {
    first_list_mismatch(left, right).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures::{create_test_package, fixed_timestamp};
    use chrono::TimeZone;

    #[test]
    fn test_new_package_defaults() {
        let package = create_test_package("Contoso.Core", "1.2.3");

        assert_eq!(package.id, "Contoso.Core");
        assert!(package.listed);
        assert_eq!(package.min_client_version, None);
        assert_eq!(package.last_updated, package.created);
    }

    #[test]
    fn test_identical_packages_match() {
        let package = create_test_package("A", "1.0.0");
        assert_eq!(package.first_mismatch(&package.clone()), None);
        assert!(package.matches(&package.clone()));
    }

    #[test]
    fn test_first_mismatch_names_serialized_field() {
        let package = create_test_package("A", "1.0.0");

        let mut other = package.clone();
        other.sem_ver2_is_latest = !other.sem_ver2_is_latest;
        assert_eq!(package.first_mismatch(&other), Some("SemVer2IsLatest"));

        let mut other = package.clone();
        other.icon_url = Some(PackageUrl::parse("//share/icon.png").unwrap());
        assert_eq!(package.first_mismatch(&other), Some("IconUrl"));

        let mut other = package.clone();
        other.authors.push("Someone".to_string());
        assert_eq!(package.first_mismatch(&other), Some("Authors"));
    }

    #[test]
    fn test_timestamp_offset_is_compared() {
        let package = create_test_package("A", "1.0.0");
        let mut other = package.clone();

        // Same instant expressed with a different offset
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        other.created = offset.from_utc_datetime(&package.created.naive_utc());

        assert_eq!(other.created, package.created);
        assert_eq!(package.first_mismatch(&other), Some("Created"));
    }

    #[test]
    fn test_list_mismatch() {
        let left = vec![
            create_test_package("A", "1.0.0"),
            create_test_package("B", "1.0.0"),
        ];

        assert_eq!(first_list_mismatch(&left, &left.clone()), None);
        assert_eq!(first_list_mismatch(&left, &left[..1]), Some((1, "<missing>")));

        let mut right = left.clone();
        right[1].package_hash = "changed".to_string();
        assert_eq!(first_list_mismatch(&left, &right), Some((1, "PackageHash")));
        assert!(!packages_match(&left, &right));
    }

    #[test]
    fn test_derived_collections_are_computed_on_demand() {
        let mut package = ServerPackage::new(
            "A",
            SemanticVersion::new(1, 0, 0),
            fixed_timestamp(),
        );
        package.dependencies = "B:1.0:net45".to_string();
        package.supported_frameworks = "net45|net6.0".to_string();

        let sets = package.dependency_sets().unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].dependencies[0].id, "B");
        assert_eq!(package.supported_framework_list(), vec!["net45", "net6.0"]);
        // Raw storage is untouched by parsing
        assert_eq!(package.dependencies, "B:1.0:net45");
    }
}

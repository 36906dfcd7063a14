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

use crate::config::PackMetaConfig;
use crate::error::Result;
use crate::models::{PackageUrl, ServerPackage};
use crate::serializer::{JsonPackagesSerializer, save_packages};
use crate::version::SemanticVersion;
use chrono::{DateTime, FixedOffset, Local};
use colored::Colorize;
use std::path::Path;

/// Build `count` sample records: `Package0`..`PackageN`, version `1.0.<i>.0`,
/// every flag set, distinct hashes.
pub fn generate_packages(
    count: u32,
    timestamp: DateTime<FixedOffset>,
) -> Result<Vec<ServerPackage>> {
    let icon_url = PackageUrl::absolute("urn:icon")?;
    let license_url = PackageUrl::absolute("urn:license")?;
    let project_url = PackageUrl::absolute("urn:project")?;
    let report_abuse_url = PackageUrl::absolute("urn:abuse")?;

    let packages = (0..count)
        .map(|i| {
            let mut package = ServerPackage::new(
                format!("Package{i}"),
                SemanticVersion::new(1, 0, i).with_revision(0),
                timestamp,
            );
            package.title = format!("Title{i}");
            package.authors = vec![format!("Author{i}")];
            package.owners = vec![format!("Owner{i}")];
            package.icon_url = Some(icon_url.clone());
            package.license_url = Some(license_url.clone());
            package.project_url = Some(project_url.clone());
            package.report_abuse_url = Some(report_abuse_url.clone());
            package.require_license_acceptance = true;
            package.development_dependency = true;
            package.description = format!("Description{i}");
            package.summary = format!("Summary{i}");
            package.release_notes = format!("ReleaseNotes{i}");
            package.language = format!("Language{i}");
            package.tags = format!("Tags{i}");
            package.copyright = format!("Copyright{i}");
            package.sem_ver1_is_absolute_latest = true;
            package.sem_ver1_is_latest = true;
            package.sem_ver2_is_absolute_latest = true;
            package.sem_ver2_is_latest = true;
            package.listed = true;
            package.package_size = 1234;
            package.package_hash = format!("Hash{i}");
            package.package_hash_algorithm = format!("HashAlgorithm{i}");
            package.full_path = format!("FullPath{i}");
            package
        })
        .collect();

    Ok(packages)
}

pub struct GenerateCommand<'a> {
    config: &'a PackMetaConfig,
}

impl<'a> GenerateCommand<'a> {
    pub fn new(config: &'a PackMetaConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, count: u32, output: Option<&Path>, pretty: bool) -> Result<()> {
        let path = super::resolve_packages_path(self.config, output);
        let serializer =
            JsonPackagesSerializer::new().with_pretty(pretty || self.config.serializer.pretty);

        let packages = generate_packages(count, Local::now().fixed_offset())?;
        save_packages(&serializer, &packages, &path)?;

        println!(
            "{} Wrote {} sample packages to {}",
            "✓".green(),
            packages.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures::fixed_timestamp;

    #[test]
    fn test_generate_packages() {
        let packages = generate_packages(3, fixed_timestamp()).unwrap();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[2].id, "Package2");
        assert_eq!(packages[2].version.to_string(), "1.0.2.0");
        assert_eq!(packages[2].package_hash, "Hash2");
        assert!(packages.iter().all(|p| p.sem_ver2_is_absolute_latest && p.listed));
        assert_eq!(packages[0].min_client_version, None);
        assert_eq!(
            packages[0].report_abuse_url.as_ref().map(|u| u.as_str()),
            Some("urn:abuse")
        );
    }

    #[test]
    fn test_generate_zero_packages() {
        assert!(generate_packages(0, fixed_timestamp()).unwrap().is_empty());
    }
}

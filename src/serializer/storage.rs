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

use std::fs::{self, File};
use std::path::Path;
use tempfile::NamedTempFile;

use super::PackagesSerializer;
use crate::error::Result;
use crate::models::ServerPackage;

/// Load a package list from a file
pub fn load_packages(
    serializer: &dyn PackagesSerializer,
    path: &Path,
) -> Result<Vec<ServerPackage>> {
    let mut file = File::open(path)?;
    let packages = serializer.deserialize(&mut file)?;
    log::debug!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Save a package list to a file, replacing any previous content atomically
pub fn save_packages(
    serializer: &dyn PackagesSerializer,
    packages: &[ServerPackage],
    path: &Path,
) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    // Write next to the target so the final rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(directory)?;
    serializer.serialize(packages, temp_file.as_file_mut())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    log::debug!("Saved {} packages to {}", packages.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackMetaError;
    use crate::serializer::JsonPackagesSerializer;
    use crate::test::fixtures::create_test_package;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");

        let result = load_packages(&JsonPackagesSerializer::new(), &path);
        assert!(matches!(result, Err(PackMetaError::Io(_))));
    }

    #[test]
    fn test_save_and_load_packages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("packages.json");
        let serializer = JsonPackagesSerializer::new().with_pretty(true);

        let packages = vec![
            create_test_package("Alpha", "1.0.0"),
            create_test_package("Beta", "2.0.0-rc.1"),
        ];
        save_packages(&serializer, &packages, &path).unwrap();

        let loaded = load_packages(&serializer, &path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(crate::models::packages_match(&packages, &loaded));
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");
        let serializer = JsonPackagesSerializer::new();

        fs::write(&path, "stale content").unwrap();
        save_packages(&serializer, &[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        // No temp files left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_packages(&JsonPackagesSerializer::new(), &path);
        assert!(matches!(result, Err(PackMetaError::Parse(_))));
    }

    #[test]
    fn test_failed_encode_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("packages.json");
        fs::write(&path, "[]").unwrap();

        let mut package = create_test_package("Broken", "1.0.0");
        package.version = package.version.with_release("not valid");

        let result = save_packages(&JsonPackagesSerializer::new(), &[package], &path);
        assert!(matches!(result, Err(PackMetaError::Encoding(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}

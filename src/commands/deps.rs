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
use crate::error::{PackMetaError, Result};
use crate::models::{DependencySet, ServerPackage};
use crate::serializer::{JsonPackagesSerializer, load_packages};
use colored::Colorize;
use std::path::Path;

pub struct DepsCommand<'a> {
    config: &'a PackMetaConfig,
}

impl<'a> DepsCommand<'a> {
    pub fn new(config: &'a PackMetaConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, id: &str, file: Option<&Path>) -> Result<()> {
        let path = super::resolve_packages_path(self.config, file);
        let packages = load_packages(&JsonPackagesSerializer::new(), &path)?;
        let package = find_package(&packages, id)?;

        println!("{} {}", package.id.bold(), package.version);
        print!("{}", format_dependency_sets(&package.dependency_sets()?));

        let frameworks = package.supported_framework_list();
        if frameworks.is_empty() {
            println!("Supported frameworks: none declared");
        } else {
            println!("Supported frameworks: {}", frameworks.join(", "));
        }
        Ok(())
    }
}

/// First package whose id matches, ignoring ASCII case
fn find_package<'p>(packages: &'p [ServerPackage], id: &str) -> Result<&'p ServerPackage> {
    packages
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| PackMetaError::PackageNotFound(id.to_string()))
}

fn format_dependency_sets(sets: &[DependencySet]) -> String {
    if sets.is_empty() {
        return "No dependencies\n".to_string();
    }

    let mut output = String::new();
    for set in sets {
        let framework = set.target_framework.as_deref().unwrap_or("(any framework)");
        output.push_str(&format!("{framework}:\n"));

        if set.dependencies.is_empty() {
            output.push_str("  (no dependencies)\n");
        }
        for dependency in &set.dependencies {
            match &dependency.version_range {
                Some(range) => output.push_str(&format!("  - {} {range}\n", dependency.id)),
                None => output.push_str(&format!("  - {}\n", dependency.id)),
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_dependencies;
    use crate::test::fixtures::create_test_package;

    #[test]
    fn test_find_package_ignores_case() {
        let packages = vec![
            create_test_package("Newtonsoft.Json", "13.0.3"),
            create_test_package("Serilog", "3.1.1"),
        ];

        assert_eq!(find_package(&packages, "serilog").unwrap().id, "Serilog");
        assert!(matches!(
            find_package(&packages, "Polly"),
            Err(PackMetaError::PackageNotFound(id)) if id == "Polly"
        ));
    }

    #[test]
    fn test_format_dependency_sets() {
        let sets = parse_dependencies("::net40|Serilog:[2.0.0, ):net45|Polly::").unwrap();
        let formatted = format_dependency_sets(&sets);

        assert_eq!(
            formatted,
            "net40:\n  (no dependencies)\nnet45:\n  - Serilog 2.0.0\n(any framework):\n  - Polly\n"
        );
        assert_eq!(format_dependency_sets(&[]), "No dependencies\n");
    }
}

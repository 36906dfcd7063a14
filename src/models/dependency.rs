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

//! Parsers for the raw `Dependencies` and `SupportedFrameworks` strings.
//!
//! Dependencies are stored as `id:range:framework` entries joined with `|`.
//! An entry with an empty id (`::net45`) declares a framework group that has
//! no dependencies.

use crate::error::{PackMetaError, Result};
use crate::version::VersionRange;

const ENTRY_SEPARATOR: char = '|';
const FIELD_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDependency {
    pub id: String,
    pub version_range: Option<VersionRange>,
}

/// Dependencies that apply to one target framework. `None` means the group
/// applies to every framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySet {
    pub target_framework: Option<String>,
    pub dependencies: Vec<PackageDependency>,
}

pub fn parse_dependencies(raw: &str) -> Result<Vec<DependencySet>> {
    let mut sets: Vec<DependencySet> = Vec::new();

    for entry in raw.split(ENTRY_SEPARATOR) {
        if entry.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
        if fields.len() > 3 {
            return Err(PackMetaError::InvalidDependency(entry.to_string()));
        }

        let id = fields[0].trim();
        let range = fields.get(1).copied().unwrap_or_default();
        let framework = fields
            .get(2)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        if id.is_empty() && !range.trim().is_empty() {
            return Err(PackMetaError::InvalidDependency(entry.to_string()));
        }

        let version_range = VersionRange::parse_optional(range)
            .map_err(|_| PackMetaError::InvalidDependency(entry.to_string()))?;

        let index = match sets
            .iter()
            .position(|set| set.target_framework == framework)
        {
            Some(index) => index,
            None => {
                sets.push(DependencySet {
                    target_framework: framework,
                    dependencies: Vec::new(),
                });
                sets.len() - 1
            }
        };

        if !id.is_empty() {
            sets[index].dependencies.push(PackageDependency {
                id: id.to_string(),
                version_range,
            });
        }
    }

    log::trace!("Parsed {} dependency groups", sets.len());
    Ok(sets)
}

pub fn format_dependencies(sets: &[DependencySet]) -> String {
    let mut entries = Vec::new();

    for set in sets {
        let framework = set.target_framework.as_deref().unwrap_or_default();
        if set.dependencies.is_empty() {
            entries.push(format!("::{framework}"));
            continue;
        }
        for dependency in &set.dependencies {
            let range = dependency
                .version_range
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_default();
            entries.push(format!("{}:{range}:{framework}", dependency.id));
        }
    }

    entries.join("|")
}

/// Split a `|`-separated framework list. Blank entries are dropped and
/// duplicates (compared case-insensitively) keep their first spelling.
pub fn parse_supported_frameworks(raw: &str) -> Vec<String> {
    let mut frameworks: Vec<String> = Vec::new();

    for framework in raw.split(ENTRY_SEPARATOR).map(str::trim) {
        if framework.is_empty() {
            continue;
        }
        if !frameworks
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(framework))
        {
            frameworks.push(framework.to_string());
        }
    }

    frameworks
}

pub fn format_supported_frameworks<S: AsRef<str>>(frameworks: &[S]) -> String {
    frameworks
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join("|")
}

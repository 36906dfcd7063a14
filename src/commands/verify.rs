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
use crate::models::{ServerPackage, UrlKind, first_list_mismatch};
use crate::serializer::{self, JsonPackagesSerializer, load_packages};
use colored::Colorize;
use log::info;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub packages: usize,
    pub unc_urls: usize,
    pub encoded_bytes: usize,
}

/// Encode then decode `packages` and compare every stored field
pub fn verify_round_trip(packages: &[ServerPackage]) -> Result<VerifyReport> {
    let encoded = serializer::encode(packages)?;
    let decoded = serializer::decode(&encoded)?;

    if let Some((index, field)) = first_list_mismatch(packages, &decoded) {
        return Err(PackMetaError::RoundTripMismatch { index, field });
    }

    let unc_urls = packages
        .iter()
        .flat_map(|p| {
            [
                &p.icon_url,
                &p.license_url,
                &p.project_url,
                &p.report_abuse_url,
            ]
        })
        .filter(|url| url.as_ref().is_some_and(|u| u.kind() == UrlKind::Unc))
        .count();

    Ok(VerifyReport {
        packages: packages.len(),
        unc_urls,
        encoded_bytes: encoded.len(),
    })
}

pub struct VerifyCommand<'a> {
    config: &'a PackMetaConfig,
}

impl<'a> VerifyCommand<'a> {
    pub fn new(config: &'a PackMetaConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, file: Option<&Path>) -> Result<()> {
        let path = super::resolve_packages_path(self.config, file);
        let packages = load_packages(&JsonPackagesSerializer::new(), &path)?;
        let report = verify_round_trip(&packages)?;

        info!(
            "Round-trip of {} used {} bytes",
            path.display(),
            report.encoded_bytes
        );
        println!(
            "{} {} package{} round-trip without changes ({} UNC URL{})",
            "✓".green(),
            report.packages,
            if report.packages == 1 { "" } else { "s" },
            report.unc_urls,
            if report.unc_urls == 1 { "" } else { "s" }
        );
        Ok(())
    }
}

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
use crate::models::ServerPackage;
use crate::serializer::{JsonPackagesSerializer, load_packages};
use comfy_table::{Cell, CellAlignment, Color, Table};
use log::debug;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct PackageSummary<'a> {
    id: &'a str,
    version: String,
    listed: bool,
    download_count: u64,
    last_updated: String,
}

impl<'a> From<&'a ServerPackage> for PackageSummary<'a> {
    fn from(package: &'a ServerPackage) -> Self {
        Self {
            id: &package.id,
            version: package.version.to_string(),
            listed: package.listed,
            download_count: package.download_count,
            last_updated: package.last_updated.to_rfc3339(),
        }
    }
}

pub struct InspectCommand<'a> {
    config: &'a PackMetaConfig,
}

impl<'a> InspectCommand<'a> {
    pub fn new(config: &'a PackMetaConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, file: Option<&Path>, json: bool) -> Result<()> {
        let path = super::resolve_packages_path(self.config, file);
        let packages = load_packages(&JsonPackagesSerializer::new(), &path)?;
        debug!("Inspecting {} packages from {}", packages.len(), path.display());

        if json {
            let summaries: Vec<PackageSummary> =
                packages.iter().map(PackageSummary::from).collect();
            let output = serde_json::to_string_pretty(&summaries)
                .map_err(|e| PackMetaError::Encoding(e.to_string()))?;
            println!("{output}");
            return Ok(());
        }

        if packages.is_empty() {
            println!("No packages in {}", path.display());
            return Ok(());
        }

        println!("{}", render_table(&packages));
        println!(
            "{} package{}",
            packages.len(),
            if packages.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }
}

fn render_table(packages: &[ServerPackage]) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("Id"),
        Cell::new("Version"),
        Cell::new("Listed"),
        Cell::new("Downloads"),
        Cell::new("Last Updated"),
    ]);

    for package in packages {
        let listed = if package.listed {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(&package.id),
            Cell::new(package.version.to_string()),
            listed,
            Cell::new(package.download_count).set_alignment(CellAlignment::Right),
            Cell::new(package.last_updated.to_rfc3339()),
        ]);
    }

    table
}

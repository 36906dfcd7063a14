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
use crate::serializer::{JsonPackagesSerializer, load_packages, save_packages};
use colored::Colorize;
use std::path::Path;

pub struct NormalizeCommand<'a> {
    config: &'a PackMetaConfig,
}

impl<'a> NormalizeCommand<'a> {
    pub fn new(config: &'a PackMetaConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Re-encode a package file. Without `output` the input is rewritten in place.
    pub fn execute(
        &self,
        input: Option<&Path>,
        output: Option<&Path>,
        pretty: bool,
    ) -> Result<()> {
        let input = super::resolve_packages_path(self.config, input);
        let output = output.unwrap_or(input.as_path());

        let reader = JsonPackagesSerializer::new();
        let writer =
            JsonPackagesSerializer::new().with_pretty(pretty || self.config.serializer.pretty);

        let packages = load_packages(&reader, &input)?;
        save_packages(&writer, &packages, output)?;

        println!(
            "{} Normalized {} packages into {}",
            "✓".green(),
            packages.len(),
            output.display()
        );
        Ok(())
    }
}

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

pub mod deps;
pub mod generate;
pub mod inspect;
pub mod normalize;
pub mod verify;

use crate::config::PackMetaConfig;
use std::path::{Path, PathBuf};

/// Use the path given on the command line, or the configured package file
fn resolve_packages_path(config: &PackMetaConfig, file: Option<&Path>) -> PathBuf {
    match file {
        Some(path) => path.to_path_buf(),
        None => config.packages_path(),
    }
}

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

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated PACKMETA_HOME for a single test, removed on drop
pub struct TestHomeGuard {
    temp_dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create test home directory");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    #[allow(dead_code)]
    pub fn packages_file(&self) -> PathBuf {
        self.path().join("packages.json")
    }
}

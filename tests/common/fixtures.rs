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

/// Shared test fixtures for building package lists in integration tests
use chrono::{DateTime, FixedOffset};
use packmeta::commands::generate::generate_packages;
use packmeta::models::{PackageUrl, ServerPackage};

pub fn timestamp() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-11-02T23:59:59.999-07:00").unwrap()
}

/// `count` generated packages, the same shape the `generate` command writes
#[allow(dead_code)]
pub fn sample_packages(count: u32) -> Vec<ServerPackage> {
    generate_packages(count, timestamp()).unwrap()
}

/// One generated package with all four URL fields pointing at a UNC share
#[allow(dead_code)]
pub fn unc_packages() -> Vec<ServerPackage> {
    let mut packages = sample_packages(1);
    let package = &mut packages[0];
    package.icon_url = Some(PackageUrl::absolute("//testunc/test/a").unwrap());
    package.license_url = Some(PackageUrl::absolute("//testunc/test/b").unwrap());
    package.project_url = Some(PackageUrl::absolute("//testunc/test/c").unwrap());
    package.report_abuse_url = Some(PackageUrl::absolute("//testunc/test/d").unwrap());
    packages
}

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

pub mod dependency;
pub mod package;
pub mod url;

pub use dependency::{
    DependencySet, PackageDependency, format_dependencies, format_supported_frameworks,
    parse_dependencies, parse_supported_frameworks,
};
pub use package::{ServerPackage, first_list_mismatch, packages_match};
pub use self::url::{PackageUrl, UrlKind};

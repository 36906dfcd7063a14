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

use crate::error::PackMetaError;

pub fn get_exit_code(error: &PackMetaError) -> i32 {
    match error {
        PackMetaError::Parse(_)
        | PackMetaError::InvalidVersionFormat(_)
        | PackMetaError::InvalidVersionRange(_)
        | PackMetaError::InvalidUrl(_)
        | PackMetaError::InvalidDependency(_) => 2,

        PackMetaError::Encoding(_) => 3,

        PackMetaError::PackageNotFound(_) => 4,

        PackMetaError::RoundTripMismatch { .. } => 5,

        PackMetaError::ConfigError(_) => 6,

        PackMetaError::Io(io_err) if io_err.kind() == std::io::ErrorKind::PermissionDenied => 13,

        _ => 1,
    }
}

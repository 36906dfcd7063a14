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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackMetaError {
    #[error("Failed to parse package metadata: {0}")]
    Parse(String),

    #[error("Failed to encode package metadata: {0}")]
    Encoding(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid version range: {0}")]
    InvalidVersionRange(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid dependency entry: {0}")]
    InvalidDependency(String),

    #[error("Package '{0}' not found")]
    PackageNotFound(String),

    #[error("Round-trip mismatch in record {index}: field '{field}' differs")]
    RoundTripMismatch { index: usize, field: &'static str },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PackMetaError>;

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
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a PackMetaError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a PackMetaError) -> Self {
        let (suggestion, details) = match error {
            PackMetaError::Parse(msg) => {
                let suggestion = Some(
                    "The file must be a JSON array of package objects. Regenerate it with                      'packmeta normalize' from a known-good copy."
                        .to_string(),
                );
                let details = Some(format!("Parser reported: {msg}"));
                (suggestion, details)
            }
            PackMetaError::Encoding(msg) => {
                let suggestion = None;
                let details = Some(format!("Encoder reported: {msg}"));
                (suggestion, details)
            }
            PackMetaError::InvalidVersionFormat(version) => {
                let suggestion = Some(
                    "Versions look like 'major.minor.patch[.revision][-label][+metadata]' (e.g.,                      '1.0.3' or '2.1.0-beta.1')."
                        .to_string(),
                );
                let details = Some(format!("Rejected version: {version}"));
                (suggestion, details)
            }
            PackMetaError::InvalidVersionRange(range) => {
                let suggestion = Some(
                    "Use interval notation such as '1.0', '[1.0]', '[1.0,2.0)' or '(,2.0]'."
                        .to_string(),
                );
                let details = Some(format!("Rejected range: {range}"));
                (suggestion, details)
            }
            PackMetaError::InvalidUrl(url) => {
                let suggestion = Some(
                    "URLs must carry a scheme (https://host/path) or use the UNC form                      //host/path."
                        .to_string(),
                );
                let details = Some(format!("Rejected URL: {url}"));
                (suggestion, details)
            }
            PackMetaError::InvalidDependency(entry) => {
                let suggestion = Some(
                    "Dependency entries are written as 'id:range:framework' and separated by '|'."
                        .to_string(),
                );
                let details = Some(format!("Rejected entry: {entry}"));
                (suggestion, details)
            }
            PackMetaError::PackageNotFound(id) => {
                let suggestion = Some(
                    "Run 'packmeta inspect <file>' to list the packages in the file.".to_string(),
                );
                let details = Some(format!("No record has the id '{id}'."));
                (suggestion, details)
            }
            PackMetaError::RoundTripMismatch { index, field } => {
                let suggestion = None;
                let details = Some(format!(
                    "Record #{index} did not survive encode/decode: '{field}' changed."
                ));
                (suggestion, details)
            }
            PackMetaError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check $PACKMETA_HOME/config.toml and any PACKMETA_* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            PackMetaError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the file permissions of the package file.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

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

mod storage;
pub mod timestamp;
pub mod url_escape;


use log::debug;
use std::io::{BufReader, BufWriter, Read, Write};

use crate::error::{PackMetaError, Result};
use crate::models::ServerPackage;

pub use storage::{load_packages, save_packages};
pub use url_escape::{escape_url, unescape_url};

/// Converts an ordered package list to bytes and back.
///
/// Implementations hold no state between calls; `deserialize` either returns
/// every record or an error, never a partial list.
pub trait PackagesSerializer: Send + Sync {
    fn serialize(&self, packages: &[ServerPackage], writer: &mut dyn Write) -> Result<()>;

    fn deserialize(&self, reader: &mut dyn Read) -> Result<Vec<ServerPackage>>;
}

/// JSON array of package objects, one per record, keys in PascalCase.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPackagesSerializer {
    pretty: bool,
}

impl JsonPackagesSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

fn encoding_error(error: serde_json::Error) -> PackMetaError {
    if error.is_io() {
        PackMetaError::Io(error.into())
    } else {
        PackMetaError::Encoding(error.to_string())
    }
}

fn parse_error(error: serde_json::Error) -> PackMetaError {
    if error.is_io() {
        PackMetaError::Io(error.into())
    } else {
        PackMetaError::Parse(error.to_string())
    }
}

impl PackagesSerializer for JsonPackagesSerializer {
    fn serialize(&self, packages: &[ServerPackage], writer: &mut dyn Write) -> Result<()> {
        let mut writer = BufWriter::new(writer);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, packages).map_err(encoding_error)?;
        } else {
            serde_json::to_writer(&mut writer, packages).map_err(encoding_error)?;
        }
        writer.flush()?;

        debug!("Serialized {} packages", packages.len());
        Ok(())
    }

    fn deserialize(&self, reader: &mut dyn Read) -> Result<Vec<ServerPackage>> {
        let packages: Vec<ServerPackage> =
            serde_json::from_reader(BufReader::new(reader)).map_err(parse_error)?;

        debug!("Deserialized {} packages", packages.len());
        Ok(packages)
    }
}

/// Encode packages with the default (compact) JSON serializer.
pub fn encode(packages: &[ServerPackage]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    JsonPackagesSerializer::new().serialize(packages, &mut buffer)?;
    Ok(buffer)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<ServerPackage>> {
    let packages: Vec<ServerPackage> = serde_json::from_slice(bytes).map_err(parse_error)?;
    debug!("Decoded {} packages", packages.len());
    Ok(packages)
}

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

use clap::{Parser, Subcommand};
use packmeta::commands::deps::DepsCommand;
use packmeta::commands::generate::GenerateCommand;
use packmeta::commands::inspect::InspectCommand;
use packmeta::commands::normalize::NormalizeCommand;
use packmeta::commands::verify::VerifyCommand;
use packmeta::config::new_packmeta_config;
use packmeta::error::{Result, format_error_with_color, get_exit_code};
use packmeta::logging;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packmeta")]
#[command(author, version, about = "Package metadata file tool", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the packages stored in a package file
    #[command(visible_alias = "ls")]
    Inspect {
        /// Package file (defaults to the configured packages file)
        file: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that every record survives encode and decode unchanged
    Verify {
        /// Package file (defaults to the configured packages file)
        file: Option<PathBuf>,
    },

    /// Re-encode a package file
    Normalize {
        /// Package file to read (defaults to the configured packages file)
        input: Option<PathBuf>,

        /// Write here instead of replacing the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write a file of generated sample packages
    Generate {
        /// Number of packages to generate
        count: u32,

        /// Destination file (defaults to the configured packages file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write indented JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the parsed dependency groups of a package
    Deps {
        /// Package id (case-insensitive)
        id: String,

        /// Package file (defaults to the configured packages file)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let use_color = std::io::stderr().is_terminal();

    let config = match new_packmeta_config() {
        Ok(config) => config,
        Err(e) => {
            eprint!("{}", format_error_with_color(&e, use_color));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Inspect { file, json } => {
            let command = InspectCommand::new(&config)?;
            command.execute(file.as_deref(), json)
        }
        Commands::Verify { file } => {
            let command = VerifyCommand::new(&config)?;
            command.execute(file.as_deref())
        }
        Commands::Normalize {
            input,
            output,
            pretty,
        } => {
            let command = NormalizeCommand::new(&config)?;
            command.execute(input.as_deref(), output.as_deref(), pretty)
        }
        Commands::Generate {
            count,
            output,
            pretty,
        } => {
            let command = GenerateCommand::new(&config)?;
            command.execute(count, output.as_deref(), pretty)
        }
        Commands::Deps { id, file } => {
            let command = DepsCommand::new(&config)?;
            command.execute(&id, file.as_deref())
        }
    })();

    if let Err(e) = result {
        eprint!("{}", format_error_with_color(&e, use_color));
        std::process::exit(get_exit_code(&e));
    }
}

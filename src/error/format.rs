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

use crate::error::{ErrorContext, PackMetaError};
use colored::Colorize;

pub fn format_error_chain(error: &PackMetaError) -> String {
    ErrorContext::new(error).to_string()
}

/// Render an error for the terminal: a header line, optional details, then
/// one bullet per suggestion line.
pub fn format_error_with_color(error: &PackMetaError, use_color: bool) -> String {
    let context = ErrorContext::new(error);
    let paint = |text: &str, style: fn(&str) -> colored::ColoredString| -> String {
        if use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    };

    let mut output = format!("{} {error}\n", paint("Error:", |s| s.red().bold()));

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{}\n", paint("Suggestions:", |s| s.yellow().bold())));
        for line in suggestion.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(&paint(&format!("• {line}"), |s| s.cyan()));
            output.push('\n');
        }
    }

    output
}

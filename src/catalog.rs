// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data model for Apple string catalogs (`.xcstrings` files).
//!
//! A string catalog is a JSON document mapping stable string keys to
//! their per-language values. Only the part of the format this tool
//! reads and writes is modelled: extra fields found in the input (such
//! as `comment` or `variations`) are ignored and not carried over to
//! the output.
//!
//! String order is preserved across a parse/serialize round trip so
//! that re-running the tool produces stable diffs.

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Translation state of a localization produced by this tool.
pub const STATE_TRANSLATED: &str = "translated";

/// Translation state marking a failed translation.
pub const STATE_ERROR: &str = "error";

fn default_version() -> String {
    String::from("1.0")
}

fn default_extraction_state() -> String {
    String::from("manual")
}

/// A complete string catalog.
///
/// `sourceLanguage` and `strings` are required; a catalog missing
/// either does not parse. The `version` field defaults to `"1.0"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// The language the catalog's source text is written in.
    pub source_language: String,
    /// All string entries, keyed by their stable identifier.
    pub strings: IndexMap<String, StringEntry>,
    /// Catalog format version.
    #[serde(default = "default_version")]
    pub version: String,
}

/// One catalog record: extraction metadata plus per-language values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringEntry {
    /// How the entry was produced, e.g. `"manual"`. Passed through
    /// unchanged by this tool.
    #[serde(default = "default_extraction_state")]
    pub extraction_state: String,
    /// Per-language values, keyed by lower-case language code.
    #[serde(default)]
    pub localizations: IndexMap<String, Localization>,
}

impl StringEntry {
    /// Returns the English source text, if the entry has an `en`
    /// localization.
    pub fn english_text(&self) -> Option<&str> {
        self.localizations
            .get("en")
            .map(|localization| localization.string_unit.value.as_str())
    }
}

/// A single language's value for one string entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    pub string_unit: StringUnit,
}

impl Localization {
    /// A successfully translated value.
    pub fn translated(value: impl Into<String>) -> Self {
        Localization {
            string_unit: StringUnit {
                state: String::from(STATE_TRANSLATED),
                value: value.into(),
            },
        }
    }

    /// A placeholder recording a failed translation.
    pub fn error(value: impl Into<String>) -> Self {
        Localization {
            string_unit: StringUnit {
                state: String::from(STATE_ERROR),
                value: value.into(),
            },
        }
    }
}

/// The translated text and its state.
///
/// Catalogs in the wild carry states this tool never writes (such as
/// `"needs_review"`), so the state is kept as a plain string rather
/// than a closed enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringUnit {
    pub state: String,
    pub value: String,
}

impl Catalog {
    /// Read and parse the catalog at `path`.
    pub fn from_file(path: &Path) -> anyhow::Result<Catalog> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Could not parse {} as a string catalog", path.display()))
    }

    /// Write the catalog to `path` as pretty-printed UTF-8 JSON.
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        // 2-space indentation, non-ASCII left unescaped.
        let mut json = serde_json::to_string_pretty(self)
            .with_context(|| format!("Could not serialize catalog for {}", path.display()))?;
        json.push('\n');
        fs::write(path, json).with_context(|| format!("Could not write {}", path.display()))
    }
}

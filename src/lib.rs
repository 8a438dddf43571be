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

//! Machine translation for Apple string catalogs.
//!
//! This crate reads an `.xcstrings` string catalog, passes the English
//! source text of every entry to a translation service, and builds a
//! new catalog carrying the English text plus one localization per
//! requested target language. A failed translation is recorded inline
//! as an error-state localization and never aborts the run.
//!
//! The translation service is injected as a plain function, so the
//! core transform stays independent of the DeepL client in
//! [`deepl`] and can be driven with closures in tests.

use indexmap::IndexMap;
use log::{debug, warn};

pub mod catalog;
pub mod deepl;

use catalog::{Catalog, Localization, StringEntry};

/// Translate the English strings of `catalog` into `target_languages`.
///
/// The `translate` function is called once per (string, language) pair
/// with the English text and the upper-cased language code. Its result
/// becomes a localization keyed by the lower-cased code: the
/// translated text on success, an `ERROR: `-prefixed placeholder on
/// failure. One failed call only affects its own (string, language)
/// pair.
///
/// Entries without an `en` localization produce an output entry with
/// an empty localizations map, and entries whose English text is empty
/// keep the English passthrough but are not sent for translation.
///
/// The output covers exactly the keys of the input, in the same order.
pub fn translate_catalog<F>(
    catalog: &Catalog,
    target_languages: &[String],
    mut translate: F,
) -> Catalog
where
    F: FnMut(&str, &str) -> anyhow::Result<String>,
{
    let mut strings = IndexMap::with_capacity(catalog.strings.len());
    for (key, entry) in &catalog.strings {
        let mut localizations = IndexMap::new();

        if let Some(english_text) = entry.english_text() {
            localizations.insert(String::from("en"), Localization::translated(english_text));

            if !english_text.is_empty() {
                for language in target_languages {
                    // DeepL expects upper-case codes while xcstrings
                    // keys localizations by lower-case codes.
                    let code = language.to_uppercase();
                    debug!("Translating {key:?} to {code}");
                    let localization = match translate(english_text, &code) {
                        Ok(text) => Localization::translated(text),
                        Err(err) => {
                            warn!("Error translating {key:?} to {code}: {err:#}");
                            Localization::error(format!("ERROR: {err:#}"))
                        }
                    };
                    localizations.insert(code.to_lowercase(), localization);
                }
            }
        }

        strings.insert(
            key.clone(),
            StringEntry {
                extraction_state: entry.extraction_state.clone(),
                localizations,
            },
        );
    }

    Catalog {
        source_language: catalog.source_language.clone(),
        strings,
        version: catalog.version.clone(),
    }
}

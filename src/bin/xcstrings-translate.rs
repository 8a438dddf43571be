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

//! Machine-translate an Apple string catalog with DeepL.
//!
//! Reads a string catalog, translates the English text of every entry
//! into the requested target languages, and writes the result to a new
//! catalog file. The DeepL API key is taken from the `DEEPL_API_KEY`
//! environment variable; a `.env` file in the working directory works
//! too.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use xcstrings_translator::catalog::Catalog;
use xcstrings_translator::deepl::DeepLClient;
use xcstrings_translator::translate_catalog;

#[derive(Debug, Parser)]
struct Cli {
    /// Comma-separated target language codes, e.g. FR,DE,IT,ES.
    #[arg(long = "in", value_name = "CODES", value_delimiter = ',', required = true)]
    languages: Vec<String>,
    /// The string catalog to translate.
    #[arg(long, value_name = "PATH", default_value = "Localizable.xcstrings")]
    input: PathBuf,
    /// Where to write the translated catalog.
    #[arg(
        long,
        value_name = "PATH",
        default_value = "Localizable_translated.xcstrings"
    )]
    output: PathBuf,
    /// Print per-string progress while translating.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Pick up DEEPL_API_KEY from a .env file when one is present.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", default_filter));

    // Resolve the credential before touching any file so that a
    // missing key never leaves a partial output behind.
    let api_key = std::env::var("DEEPL_API_KEY")
        .context("DEEPL_API_KEY is not set; export it or add it to a .env file")?;

    let catalog = Catalog::from_file(&cli.input)?;
    let client = DeepLClient::new(&api_key)?;
    let translated = translate_catalog(&catalog, &cli.languages, |text, lang| {
        client.translate(text, lang)
    });
    translated.write_to_file(&cli.output)?;

    println!("Translation completed!");
    println!("Input file: {}", cli.input.display());
    println!("Output file: {}", cli.output.display());
    println!("Translated languages:");
    for language in &cli.languages {
        println!("- {language}");
    }

    Ok(())
}

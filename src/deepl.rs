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

//! A small synchronous client for the DeepL translation API.
//!
//! Only the `/v2/translate` endpoint is used. Free-tier API keys carry
//! a `:fx` suffix and are served from a separate host, so the client
//! picks the host from the key like the official client libraries do.

use anyhow::{anyhow, bail, Context};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const API_URL: &str = "https://api.deepl.com";
const FREE_API_URL: &str = "https://api-free.deepl.com";

/// Covers the whole request, connect included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns the API host serving the given key.
fn api_url_for_key(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        FREE_API_URL
    } else {
        API_URL
    }
}

/// Successful response of `/v2/translate`.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Error body DeepL sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// A synchronous DeepL API client.
pub struct DeepLClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl DeepLClient {
    /// Creates a client for the given API key.
    pub fn new(api_key: &str) -> anyhow::Result<DeepLClient> {
        DeepLClient::with_api_url(api_key, api_url_for_key(api_key))
    }

    /// Creates a client talking to a specific API host. Tests use this
    /// to point the client at a local server.
    pub fn with_api_url(api_key: &str, api_url: &str) -> anyhow::Result<DeepLClient> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("xcstrings-translator/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Could not build the HTTP client")?;
        Ok(DeepLClient {
            client,
            api_url: String::from(api_url),
            api_key: String::from(api_key),
        })
    }

    /// Translates `text` into `target_lang`, an upper-case language
    /// code such as `FR`. Returns the translated text.
    pub fn translate(&self, text: &str, target_lang: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/v2/translate", self.api_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&[("text", text), ("target_lang", target_lang)])
            .send()
            .context("Could not reach the DeepL API")?;

        let status = response.status();
        let body = response
            .text()
            .context("Could not read the DeepL API response")?;
        if !status.is_success() {
            // DeepL error bodies usually carry a human-readable message.
            match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error) => bail!("DeepL API error ({status}): {}", error.message),
                Err(_) => bail!("DeepL API error ({status})"),
            }
        }

        let parsed: TranslateResponse =
            serde_json::from_str(&body).context("Could not parse the DeepL API response")?;
        parsed
            .translations
            .into_iter()
            .next()
            .map(|translation| translation.text)
            .ok_or_else(|| anyhow!("DeepL API returned no translations"))
    }
}

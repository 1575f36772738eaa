use crate::error::FetchError;
use crate::scraping::constants::*;
use std::time::Duration;

/// Builds the booking page URL for one office code.
pub fn build_url(base: &str, code: &str) -> String {
    let (lang_key, lang) = LANGUAGE_PARAM;
    let (type_key, booking_type) = BOOKING_TYPE_PARAM;
    let (applicant_key, applicant) = APPLICANT_PARAM;

    format!(
        "{base}?{lang_key}={lang}&{type_key}={booking_type}&{OFFICE_PARAM}={code}&{applicant_key}={applicant}"
    )
}

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(PageFetcher { client })
    }

    /// GETs `url` and returns the whole body. The status code is ignored:
    /// error pages are handed to the detector like any other page.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let request = self
            .client
            .get(url)
            .build()
            .map_err(|source| FetchError::RequestConstruction {
                url: url.to_string(),
                source,
            })?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        // consumes the response, so the connection is released on every path
        let body = response.bytes().await.map_err(FetchError::BodyRead)?;

        Ok(body.to_vec())
    }
}

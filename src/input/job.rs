use std::path::Path;

use eyre::Result;
use log::info;

pub struct JobReader;

impl JobReader {
    /// Raw body of a job posting page, markup included.
    pub async fn from_url(url: &str) -> Result<String> {
        info!("fetching job description from: {}", url);

        let client = reqwest::Client::new();
        let response = client
            .get(url)
            .header("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;

        info!("successfully fetched job description ({} chars)", html.len());

        Ok(html)
    }

    pub async fn from_file(path: &Path) -> Result<String> {
        info!("reading job description from file: {}", path.display());

        tokio::fs::read_to_string(path).await.map_err(Into::into)
    }
}

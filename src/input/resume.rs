use std::path::Path;

use eyre::{Result, eyre};
use log::{debug, info};

pub struct ResumeReader;

impl ResumeReader {
    /// Text of a resume file. PDFs are run through text extraction, anything
    /// else is read as UTF-8 text.
    pub async fn from_file(path: &Path) -> Result<String> {
        info!("reading resume from file: {}", path.display());

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        let text = if is_pdf {
            let bytes = tokio::fs::read(path).await?;
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await?
                .map_err(|e| eyre!("failed to extract text from {}: {}", path.display(), e))?
        } else {
            tokio::fs::read_to_string(path).await?
        };

        let text = text.trim().to_string();
        debug!("resume text length: {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plain_text_resume_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "\n  Jane Doe\nRust developer  \n\n").unwrap();

        let text = ResumeReader::from_file(&path).await.unwrap();

        assert_eq!(text, "Jane Doe\nRust developer");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ResumeReader::from_file(&dir.path().join("nope.pdf")).await.is_err());
    }
}

/// Markdown export is the report text itself.
pub fn render(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

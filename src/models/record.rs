use std::collections::BTreeMap;

/// One flat record recovered from model output, field name to text.
pub type ExtractedRecord = BTreeMap<String, String>;

fn field_or(record: &ExtractedRecord, field: &str, placeholder: &str) -> String {
    record
        .get(field)
        .cloned()
        .unwrap_or_else(|| placeholder.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hackathon {
    pub name: String,
    pub date: String,
    pub description: String,
}

impl From<&ExtractedRecord> for Hackathon {
    fn from(record: &ExtractedRecord) -> Self {
        Self {
            name: field_or(record, "name", "Untitled Hackathon"),
            date: field_or(record, "date", "TBD"),
            description: field_or(record, "description", ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Internship {
    pub company: String,
    pub title: String,
    pub start: String,
    pub description: String,
}

impl From<&ExtractedRecord> for Internship {
    fn from(record: &ExtractedRecord) -> Self {
        Self {
            company: field_or(record, "company", "Unknown Company"),
            title: field_or(record, "title", "Untitled Internship"),
            start: field_or(record, "start", "TBD"),
            description: field_or(record, "description", ""),
        }
    }
}

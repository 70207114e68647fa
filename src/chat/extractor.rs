use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use serde_json::{Map, Value};

use crate::models::record::ExtractedRecord;

// First `[` through the last `]` of the whole text. Two separate bracketed
// fragments are captured as one span and then fail to parse.
static FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("fragment pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
pub enum EmptyReason {
    NoFragment,
    ParseError { message: String },
}

/// Outcome of pulling records out of freeform model output.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Records(Vec<ExtractedRecord>),
    Empty(EmptyReason),
}

impl Extraction {
    pub fn records(&self) -> &[ExtractedRecord] {
        match self {
            Extraction::Records(records) => records,
            Extraction::Empty(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<ExtractedRecord> {
        match self {
            Extraction::Records(records) => records,
            Extraction::Empty(_) => Vec::new(),
        }
    }

    /// Non-fatal message for the user when nothing could be recovered.
    pub fn warning(&self) -> Option<String> {
        match self {
            Extraction::Records(_) => None,
            Extraction::Empty(EmptyReason::NoFragment) => {
                Some("the response did not contain a list".to_string())
            }
            Extraction::Empty(EmptyReason::ParseError { message }) => {
                Some(format!("failed to parse the returned list: {message}"))
            }
        }
    }
}

pub fn extract(raw_text: &str) -> Extraction {
    let Some(fragment) = FRAGMENT.find(raw_text) else {
        debug!("no bracketed fragment in {} chars of output", raw_text.len());
        return Extraction::Empty(EmptyReason::NoFragment);
    };

    debug!(
        "extracted fragment (length: {} chars): {}",
        fragment.len(),
        fragment.as_str().chars().take(200).collect::<String>()
    );

    match serde_json::from_str::<Vec<Map<String, Value>>>(fragment.as_str()) {
        Ok(objects) => Extraction::Records(objects.into_iter().map(flatten).collect()),
        Err(e) => {
            warn!("fragment is not a list of records: {e}");
            Extraction::Empty(EmptyReason::ParseError {
                message: e.to_string(),
            })
        }
    }
}

/// Records found in `raw_text`, or none; the reason is only logged.
pub fn extract_records(raw_text: &str) -> Vec<ExtractedRecord> {
    extract(raw_text).into_records()
}

fn flatten(object: Map<String, Value>) -> ExtractedRecord {
    object
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::Hackathon;

    fn record(fields: &[(&str, &str)]) -> ExtractedRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn array_inside_prose_is_recovered() {
        let raw = "Here are results:\n[{\"name\":\"HackX\",\"date\":\"Jan 5\"}]\nEnjoy!";

        let records = extract_records(raw);

        assert_eq!(records, vec![record(&[("name", "HackX"), ("date", "Jan 5")])]);

        let hack = Hackathon::from(&records[0]);
        assert_eq!(hack.name, "HackX");
        assert_eq!(hack.date, "Jan 5");
        assert_eq!(hack.description, "");
    }

    #[test]
    fn records_keep_source_order_and_verbatim_fields() {
        let raw = r#"```json
[
  {"name": "Zeta Jam", "date": "March 3", "description": "Build  with [brackets] inside."},
  {"name": "Alpha Hack", "date": "April 9", "description": "Ünïcode stays as is."}
]
```"#;

        let extraction = extract(raw);

        assert_eq!(
            extraction.records(),
            &[
                record(&[
                    ("name", "Zeta Jam"),
                    ("date", "March 3"),
                    ("description", "Build  with [brackets] inside."),
                ]),
                record(&[
                    ("name", "Alpha Hack"),
                    ("date", "April 9"),
                    ("description", "Ünïcode stays as is."),
                ]),
            ]
        );
        assert_eq!(extraction.warning(), None);
    }

    #[test]
    fn text_without_brackets_has_no_fragment() {
        let extraction = extract("Sorry, I cannot list events for that region.");

        assert_eq!(extraction, Extraction::Empty(EmptyReason::NoFragment));
        assert!(extraction.records().is_empty());
        assert!(extraction.warning().is_some());
    }

    #[test]
    fn malformed_fragment_is_a_parse_error() {
        let extraction = extract("[{\"name\": \"HackX\", \"date\": }]");

        assert!(matches!(
            extraction,
            Extraction::Empty(EmptyReason::ParseError { .. })
        ));
        assert!(extract_records("[{\"name\": \"HackX\", \"date\": }]").is_empty());
    }

    #[test]
    fn array_of_non_objects_is_a_parse_error() {
        assert!(matches!(
            extract("Options: [1, 2, 3]"),
            Extraction::Empty(EmptyReason::ParseError { .. })
        ));
    }

    #[test]
    fn two_separate_fragments_are_spanned_greedily() {
        // first `[` to last `]` covers the prose between the arrays
        let raw = "[{\"name\": \"A\"}] and also [{\"name\": \"B\"}]";

        assert!(matches!(
            extract(raw),
            Extraction::Empty(EmptyReason::ParseError { .. })
        ));
    }

    #[test]
    fn unmatched_opening_bracket_has_no_fragment() {
        assert_eq!(
            extract("[{\"name\": \"HackX\"}"),
            Extraction::Empty(EmptyReason::NoFragment)
        );
    }

    #[test]
    fn empty_array_is_an_empty_batch() {
        assert_eq!(extract("[]"), Extraction::Records(Vec::new()));
    }

    #[test]
    fn scalar_values_are_stringified_and_nulls_dropped() {
        let records = extract_records(
            r#"[{"name": "HackX", "prize": 5000, "online": true, "date": null, "tracks": ["ai", "web"]}]"#,
        );

        assert_eq!(
            records,
            vec![record(&[
                ("name", "HackX"),
                ("prize", "5000"),
                ("online", "true"),
                ("tracks", r#"["ai","web"]"#),
            ])]
        );
        assert_eq!(Hackathon::from(&records[0]).date, "TBD");
    }
}

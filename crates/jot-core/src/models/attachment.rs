//! Attachment model

use serde::{Deserialize, Serialize};

/// A file stored inline with its note as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name, unique within one note.
    pub name: String,
    /// Content MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Attachment size in bytes.
    pub size: u64,
    /// `data:<mime>;base64,<payload>` encoding of the file content.
    #[serde(rename = "dataUrl")]
    pub data_url: String,
}

/// Add an attachment to a list, replacing any earlier entry with the same name.
///
/// The replaced entry is removed and the new one appended, so the list keeps
/// unique names and the newest attachment lands last.
pub fn upsert_attachment(attachments: &mut Vec<Attachment>, attachment: Attachment) {
    attachments.retain(|existing| existing.name != attachment.name);
    attachments.push(attachment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attachment(name: &str, size: u64) -> Attachment {
        Attachment {
            name: name.to_string(),
            mime_type: "text/plain".to_string(),
            size,
            data_url: "data:text/plain;base64,".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_record_field_names() {
        let json = serde_json::to_value(attachment("a.txt", 3)).unwrap();
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["dataUrl"], "data:text/plain;base64,");
        assert_eq!(json["size"], 3);
    }

    #[test]
    fn test_upsert_replaces_same_name() {
        let mut list = vec![attachment("a.txt", 1), attachment("b.txt", 2)];
        upsert_attachment(&mut list, attachment("a.txt", 9));

        let names = list.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
        assert_eq!(list[1].size, 9);
    }
}

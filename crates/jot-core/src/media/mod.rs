//! Attachment encoding: selected files to inline base64 data URLs and back.

use std::path::{Path, PathBuf};

use base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::models::Attachment;
use crate::{Error, Result};

const OCTET_STREAM: &str = "application/octet-stream";

/// Where a selected file's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Read from the filesystem when encoded.
    Path(PathBuf),
    /// Already in memory.
    Bytes(Vec<u8>),
}

/// A file handed over by the picker, not yet read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Declared MIME type; may be empty when the picker does not know it.
    pub mime_type: String,
    pub source: FileSource,
}

impl SelectedFile {
    /// Select a file on disk, named after its final path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        Self {
            name,
            mime_type: String::new(),
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            source: FileSource::Bytes(bytes.into()),
        }
    }

    async fn read(&self) -> Result<Vec<u8>> {
        match &self.source {
            FileSource::Bytes(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| Error::FileRead {
                        name: self.name.clone(),
                        source,
                    })
            }
        }
    }
}

/// MIME type and payload of a decoded data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Encode one file as an attachment.
pub async fn encode_file(file: &SelectedFile) -> Result<Attachment> {
    let bytes = file.read().await?;
    let mime_type = infer_attachment_mime_type(Some(&file.mime_type), &file.name);

    Ok(Attachment {
        name: file.name.clone(),
        data_url: encode_data_url(&mime_type, &bytes),
        mime_type,
        size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
    })
}

/// Encode files one at a time, in selection order.
///
/// The first failed read rejects the whole batch; no partial list is returned.
pub async fn encode_files(files: &[SelectedFile]) -> Result<Vec<Attachment>> {
    let mut attachments = Vec::with_capacity(files.len());
    for file in files {
        let attachment = encode_file(file).await?;
        tracing::debug!(
            name = %attachment.name,
            mime_type = %attachment.mime_type,
            size = attachment.size,
            "Encoded attachment"
        );
        attachments.push(attachment);
    }
    Ok(attachments)
}

/// Build a `data:<mime>;base64,<payload>` URL.
#[must_use]
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(bytes);
    format!("data:{mime_type};base64,{encoded}")
}

/// Parse a base64 `data:` URL.
pub fn decode_data_url(data_url: &str) -> Result<DecodedDataUrl> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUrl("missing 'data:' scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidDataUrl("missing ',' separator".to_string()))?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::InvalidDataUrl("only base64 payloads are supported".to_string()))?;

    let bytes = BASE64_STANDARD
        .decode(payload.trim())
        .map_err(|error| Error::InvalidDataUrl(error.to_string()))?;

    Ok(DecodedDataUrl {
        mime_type: if mime_type.is_empty() {
            OCTET_STREAM.to_string()
        } else {
            mime_type.to_string()
        },
        bytes,
    })
}

/// Pick the MIME type for a file, preferring a specific declared type.
///
/// Generic declarations (`application/octet-stream`, or `text/*` for a file
/// whose extension says media) fall back to a guess from the file name.
#[must_use]
pub fn infer_attachment_mime_type(content_type: Option<&str>, file_name: &str) -> String {
    let extension_guess = mime_guess::from_path(file_name)
        .first_raw()
        .map(str::to_string);

    if let Some(content_type) = content_type {
        let trimmed = content_type.trim();
        if !trimmed.is_empty() {
            let normalized = trimmed.to_ascii_lowercase();

            if normalized != OCTET_STREAM
                && !(normalized.starts_with("text/")
                    && extension_guess.as_deref().is_some_and(is_media_mime_type))
            {
                return trimmed.to_string();
            }
        }
    }

    extension_guess.unwrap_or_else(|| OCTET_STREAM.to_string())
}

/// Short label for how an attachment would be shown.
#[must_use]
pub fn attachment_kind_label(file_name: &str, mime_type: &str) -> &'static str {
    let mime_type = infer_attachment_mime_type(Some(mime_type), file_name);
    if mime_type.starts_with("image/") {
        "image"
    } else if mime_type.starts_with("audio/") {
        "audio"
    } else if mime_type.starts_with("video/") {
        "video"
    } else if mime_type.starts_with("text/") {
        "text"
    } else {
        "file"
    }
}

/// Pick an output path for a decoded attachment inside `dir`.
#[must_use]
pub fn attachment_output_path(dir: &Path, name: &str) -> PathBuf {
    let file_name = Path::new(name)
        .file_name()
        .map_or_else(|| "attachment".into(), std::ffi::OsStr::to_os_string);
    dir.join(file_name)
}

fn is_media_mime_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
        || mime_type.starts_with("audio/")
        || mime_type.starts_with("video/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_url_round_trips_bytes() {
        let url = encode_data_url("text/plain", b"hello");
        assert_eq!(url, "data:text/plain;base64,aGVsbG8=");

        let decoded = decode_data_url(&url).unwrap();
        assert_eq!(decoded.mime_type, "text/plain");
        assert_eq!(decoded.bytes, b"hello");
    }

    #[test]
    fn decode_rejects_malformed_urls() {
        assert!(matches!(
            decode_data_url("http://x"),
            Err(Error::InvalidDataUrl(_))
        ));
        assert!(matches!(
            decode_data_url("data:text/plain,hello"),
            Err(Error::InvalidDataUrl(_))
        ));
        assert!(matches!(
            decode_data_url("data:text/plain;base64,@@@"),
            Err(Error::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn decode_defaults_missing_mime_type() {
        let decoded = decode_data_url("data:;base64,YQ==").unwrap();
        assert_eq!(decoded.mime_type, "application/octet-stream");
        assert_eq!(decoded.bytes, b"a");
    }

    #[test]
    fn mime_inference_prefers_media_extension_over_generic_text() {
        assert_eq!(
            infer_attachment_mime_type(Some("text/plain"), "photo.png"),
            "image/png"
        );
        assert_eq!(
            infer_attachment_mime_type(Some("application/octet-stream"), "report.pdf"),
            "application/pdf"
        );
        assert_eq!(infer_attachment_mime_type(Some(""), "unknown"), OCTET_STREAM);
        assert_eq!(
            infer_attachment_mime_type(Some("text/markdown"), "notes.md"),
            "text/markdown"
        );
    }

    #[test]
    fn kind_label_handles_common_types() {
        assert_eq!(attachment_kind_label("photo.png", "image/png"), "image");
        assert_eq!(attachment_kind_label("voice.wav", "audio/wav"), "audio");
        assert_eq!(attachment_kind_label("readme.txt", ""), "text");
        assert_eq!(attachment_kind_label("archive.zip", "application/zip"), "file");
    }

    #[test]
    fn output_path_strips_directories_from_name() {
        let dir = Path::new("/tmp/out");
        assert_eq!(
            attachment_output_path(dir, "../../etc/passwd"),
            dir.join("passwd")
        );
        assert_eq!(attachment_output_path(dir, ".."), dir.join("attachment"));
    }

    #[test]
    fn from_path_uses_file_name() {
        let file = SelectedFile::from_path("/tmp/some/report.pdf");
        assert_eq!(file.name, "report.pdf");
        assert!(file.mime_type.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn encode_files_preserves_selection_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("second.txt");
        std::fs::write(&path, "two").unwrap();

        let files = vec![
            SelectedFile::from_bytes("first.png", "image/png", vec![1, 2, 3]),
            SelectedFile::from_path(&path),
            SelectedFile::from_bytes("third.bin", "", Vec::new()),
        ];
        let attachments = encode_files(&files).await.unwrap();

        let names = attachments.iter().map(|a| a.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["first.png", "second.txt", "third.bin"]);
        assert_eq!(attachments[0].size, 3);
        assert_eq!(attachments[1].mime_type, "text/plain");
        assert_eq!(attachments[1].data_url, "data:text/plain;base64,dHdv");
        assert_eq!(attachments[2].mime_type, OCTET_STREAM);
        assert_eq!(attachments[2].size, 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn encode_files_rejects_batch_on_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            SelectedFile::from_bytes("ok.txt", "text/plain", b"ok".to_vec()),
            SelectedFile::from_path(dir.path().join("missing.txt")),
        ];

        let error = encode_files(&files).await.unwrap_err();
        assert!(matches!(error, Error::FileRead { ref name, .. } if name == "missing.txt"));
    }
}

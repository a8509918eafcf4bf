//! Candidate file and preview models.

use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Fallback media type when content sniffing and extension lookup both fail.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A file the user has selected but not yet submitted.
///
/// Transient: exists between selection and submission, replacement, or
/// clearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Display name, usually the source file name.
    pub name: String,
    /// Declared media type, e.g. `image/jpeg`.
    pub media_type: String,
    /// Raw file payload.
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    /// Create a candidate from in-memory content.
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a candidate from disk, sniffing the media type from content.
    ///
    /// Falls back to the file extension, then to octet-stream.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let media_type = sniff_media_type(&bytes, path);
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }

    /// Size of the payload in bytes.
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}

/// Determine a media type from file content, falling back to the extension.
fn sniff_media_type(bytes: &[u8], path: &Path) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}

/// A rendering-ready encoding of a candidate's bytes.
///
/// Derived from the current selection and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    data_uri: String,
}

impl Preview {
    /// Encode a candidate as a base64 data URI.
    pub fn encode(file: &CandidateFile) -> Self {
        Self {
            data_uri: format!(
                "data:{};base64,{}",
                file.media_type,
                BASE64.encode(&file.bytes)
            ),
        }
    }

    /// The data URI, suitable for an image `src` attribute.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

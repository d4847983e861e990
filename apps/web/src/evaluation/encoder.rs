//! File Encoder — turns an uploaded thesis into the inline payload sent to the model.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("uploaded file is empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Accepts exactly the PDF and DOCX media types; parameters after `;` are ignored.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(PDF_MEDIA_TYPE) {
            Some(DocumentKind::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MEDIA_TYPE) {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MEDIA_TYPE,
            DocumentKind::Docx => DOCX_MEDIA_TYPE,
        }
    }
}

/// A thesis file ready to be inlined into a model request.
#[derive(Debug, Clone)]
pub struct EncodedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    /// Standard base64, no data-URL prefix.
    pub data: String,
}

impl EncodedDocument {
    pub fn encode(file_name: &str, media_type: &str, bytes: &[u8]) -> Result<Self, EncodeError> {
        let kind = DocumentKind::from_media_type(media_type)
            .ok_or_else(|| EncodeError::UnsupportedMediaType(media_type.to_string()))?;
        if bytes.is_empty() {
            return Err(EncodeError::Empty);
        }
        Ok(Self {
            file_name: file_name.to_string(),
            kind,
            data: STANDARD.encode(bytes),
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.media_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_pdf_without_data_url_prefix() {
        let doc = EncodedDocument::encode("tez.pdf", "application/pdf", b"%PDF-1.7").unwrap();
        assert_eq!(doc.kind, DocumentKind::Pdf);
        assert_eq!(doc.data, "JVBERi0xLjc=");
        assert!(!doc.data.starts_with("data:"));
        assert_eq!(doc.mime_type(), PDF_MEDIA_TYPE);
    }

    #[test]
    fn test_accepts_docx_with_parameters() {
        let media = format!("{DOCX_MEDIA_TYPE}; charset=binary");
        assert_eq!(DocumentKind::from_media_type(&media), Some(DocumentKind::Docx));
    }

    #[test]
    fn test_rejects_other_media_types() {
        for media in ["application/msword", "text/plain", "image/png", ""] {
            assert_eq!(
                EncodedDocument::encode("x", media, b"data").unwrap_err(),
                EncodeError::UnsupportedMediaType(media.to_string())
            );
        }
    }

    #[test]
    fn test_empty_read_fails() {
        assert_eq!(
            EncodedDocument::encode("tez.pdf", PDF_MEDIA_TYPE, b"").unwrap_err(),
            EncodeError::Empty
        );
    }
}

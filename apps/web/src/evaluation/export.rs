//! Report Exporter — serves the model-written report as a text download.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

pub fn report_file_name(file_name: &str) -> String {
    format!("Rapor_{file_name}.txt")
}

/// `reportTxt` served verbatim as a UTF-8 attachment.
#[derive(Debug, Clone)]
pub struct ReportDownload {
    pub file_name: String,
    pub body: String,
}

impl ReportDownload {
    pub fn new(source_file_name: &str, report_txt: &str) -> Self {
        Self {
            file_name: report_file_name(source_file_name),
            body: report_txt.to_string(),
        }
    }

    /// `attachment` with an ASCII fallback name and an RFC 5987 UTF-8 name.
    pub fn content_disposition(&self) -> String {
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| {
                if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            percent_encode(&self.file_name)
        )
    }
}

impl IntoResponse for ReportDownload {
    fn into_response(self) -> Response {
        let disposition = self.content_disposition();
        (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

/// RFC 5987 attr-char encoding.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

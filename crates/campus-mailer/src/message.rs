//! Message and attachment value objects.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// A file attached to a [`Message`].
///
/// Content is held raw; the SendGrid wire format wants base64, produced
/// by [`encoded`](Self::encoded) at send time.
#[derive(Debug, Clone)]
pub struct Attachment {
    filename: String,
    content: Vec<u8>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// MIME type inferred from the filename extension.
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => "application/pdf",
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "txt" => "text/plain",
            "doc" | "docx" => "application/msword",
            "xls" | "xlsx" => "application/vnd.ms-excel",
            "zip" => "application/zip",
            _ => "application/octet-stream",
        }
    }

    pub fn encoded(&self) -> String {
        BASE64.encode(&self.content)
    }
}

/// One outbound email.
#[derive(Debug, Clone)]
pub struct Message {
    to: String,
    subject: String,
    body: String,
    attachments: Vec<Attachment>,
}

impl Message {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// The body as HTML. A body that already starts with a tag is sent
    /// verbatim; plain text is wrapped in a minimal shell.
    pub fn html_body(&self) -> String {
        if self.body.trim_start().starts_with('<') {
            return self.body.clone();
        }
        format!(
            "<!DOCTYPE html>\n<html>\n<body>\n<div style=\"font-family: sans-serif; max-width: 600px; margin: 0 auto;\">\n<p>{}</p>\n</div>\n</body>\n</html>",
            self.body
        )
    }
}

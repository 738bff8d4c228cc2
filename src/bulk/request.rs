use std::path::{Path, PathBuf};

use crate::{IagateError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
    Video,
}

impl AttachmentKind {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" => Some(AttachmentKind::Image),
            "pdf" => Some(AttachmentKind::Pdf),
            "mp4" | "mov" => Some(AttachmentKind::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
    pub kind: AttachmentKind,
}

impl Attachment {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(AttachmentKind::from_extension)
            .ok_or_else(|| {
                IagateError::InvalidRequest(format!(
                    "unsupported attachment {}",
                    path.display()
                ))
            })?;
        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Submitted bulk messaging form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkRequest {
    pub message: String,
    // One phone number per line.
    pub numbers: String,
    pub schedule: Option<String>,
    pub attachments: Vec<Attachment>,
}

impl BulkRequest {
    pub fn new(message: impl Into<String>, numbers: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            numbers: numbers.into(),
            ..Default::default()
        }
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn recipients(&self) -> Vec<&str> {
        self.numbers
            .lines()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() && self.attachments.is_empty() {
            return Err(IagateError::InvalidRequest(
                "enter a message or attach files".to_owned(),
            ));
        }
        if self.recipients().is_empty() {
            return Err(IagateError::InvalidRequest(
                "enter at least one phone number".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipients_skip_blank_lines() {
        let request = BulkRequest::new("hola", "+504 1111\n\n  \n+504 2222  \n");
        assert_eq!(request.recipients(), vec!["+504 1111", "+504 2222"]);
    }

    #[test]
    fn message_or_attachment_required() {
        let err = BulkRequest::new("   ", "+504 1111").validate().unwrap_err();
        assert!(matches!(err, IagateError::InvalidRequest(_)));

        let request = BulkRequest::new("", "+504 1111")
            .with_attachment(Attachment::from_path("promo.PNG").unwrap());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn numbers_required() {
        let err = BulkRequest::new("hola", "\n \n").validate().unwrap_err();
        assert_eq!(err.to_string(), "enter at least one phone number");
    }

    #[test]
    fn attachment_kinds() {
        assert_eq!(
            Attachment::from_path("a/b/clip.mov").unwrap().kind,
            AttachmentKind::Video
        );
        assert_eq!(
            Attachment::from_path("flyer.pdf").unwrap().kind,
            AttachmentKind::Pdf
        );
        assert!(Attachment::from_path("notes.txt").is_err());
        assert!(Attachment::from_path("noextension").is_err());
    }
}

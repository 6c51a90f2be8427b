//! Files offered to and held by the upload form.

use std::rc::Rc;

/// The only media type the form accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file handed over by the picker or a drop, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name as reported by the browser (no directory part).
    pub name: String,
    /// Declared media type, if the browser reported one.
    pub media_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    /// Create a candidate.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type,
            bytes,
        }
    }

    /// Whether the declared media type is exactly [`PDF_MEDIA_TYPE`].
    ///
    /// The file name is not consulted.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.media_type.as_deref() == Some(PDF_MEDIA_TYPE)
    }
}

/// A validated PDF waiting to be submitted.
///
/// The contents are reference counted so cloning the form state (as
/// the UI does on every read) never copies the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Rc<[u8]>,
}

impl SelectedFile {
    pub(crate) fn from_candidate(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            bytes: candidate.bytes.into(),
        }
    }

    /// Original file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File contents.
    #[must_use]
    pub fn bytes(&self) -> &Rc<[u8]> {
        &self.bytes
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Size in mebibytes with two decimals, e.g. `"1.50 MB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // display only
    pub fn size_label(&self) -> String {
        let mib = self.size() as f64 / 1024.0 / 1024.0;
        format!("{mib:.2} MB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(media_type: Option<&str>) -> FileCandidate {
        FileCandidate::new("doc.pdf", media_type.map(str::to_owned), vec![1, 2, 3])
    }

    #[test]
    fn pdf_media_type_is_accepted() {
        assert!(candidate(Some("application/pdf")).is_pdf());
    }

    #[test]
    fn other_media_types_are_rejected() {
        assert!(!candidate(Some("text/plain")).is_pdf());
        assert!(!candidate(Some("application/pdf; charset=binary")).is_pdf());
        assert!(!candidate(Some("APPLICATION/PDF")).is_pdf());
    }

    #[test]
    fn missing_media_type_is_rejected_even_with_pdf_extension() {
        assert!(!candidate(None).is_pdf());
    }

    #[test]
    fn size_label_uses_two_decimals() {
        let file = SelectedFile::from_candidate(FileCandidate::new(
            "big.pdf",
            Some(PDF_MEDIA_TYPE.into()),
            vec![0; 1024 * 1024 * 3 / 2],
        ));
        assert_eq!(file.size(), 1_572_864);
        assert_eq!(file.size_label(), "1.50 MB");
    }

    #[test]
    fn tiny_file_rounds_to_zero() {
        let file = SelectedFile::from_candidate(candidate(Some(PDF_MEDIA_TYPE)));
        assert_eq!(file.size_label(), "0.00 MB");
        assert_eq!(file.name(), "doc.pdf");
        assert_eq!(&**file.bytes(), &[1, 2, 3]);
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to extract PDF text: {0}")]
    Extract(#[from] pdf_extract::OutputError),
}

/// Extracts the text of every page of `bytes`, concatenated in page order.
/// Pages with no extractable text contribute nothing; whether anything usable
/// came out is the caller's check.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}

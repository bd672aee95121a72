use tracing::warn;

/// Extracts text from an uploaded PDF. Best-effort: unreadable files yield "".
pub fn extract_pdf_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Error processing PDF file: {e}");
            String::new()
        }
    }
}

/// Upload guard: only `.pdf` filenames are accepted (case-insensitive).
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Strips any client-supplied directory components from an upload filename.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

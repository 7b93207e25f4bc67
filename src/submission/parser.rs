use axum::http::HeaderMap;

use super::Submission;

/// Parse a request body based on Content-Type header.
///
/// Anything that is not multipart is treated as form-urlencoded; an empty
/// body decodes to the empty submission.
pub fn parse_form(body: &[u8]) -> Result<Submission, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    Ok(form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

/// Parse multipart form data using multer. File parts are read as text;
/// unnamed parts are ignored.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<Submission, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut submission = Submission::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        submission.insert(name, value);
    }

    Ok(submission)
}

use base64::Engine as _;

use crate::error::ApiError;
use crate::types::{DocumentPayload, Part};

/// Media types the Generation Service accepts from uploads.
pub const ACCEPTED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/png",
    "image/jpeg",
    "image/webp",
    "text/plain",
];

/// Convert an uploaded payload into the part handed to the model.
///
/// Text files are decoded and passed as literal prompt text so the model
/// reads them in-line; every other accepted type stays a binary blob with
/// its declared media type. Unsupported or undecodable payloads are
/// rejected before any external call.
pub fn to_part(payload: &DocumentPayload) -> Result<Part, ApiError> {
    if payload.data.is_empty() {
        return Err(ApiError::bad_input("missing file.data"));
    }
    if !ACCEPTED_MIME_TYPES.contains(&payload.mime_type.as_str()) {
        return Err(ApiError::bad_input(format!(
            "unsupported file type: {}",
            payload.mime_type
        )));
    }
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.data.as_bytes())
        .map_err(|_| ApiError::bad_input("file.data is not valid base64"))?;

    if payload.mime_type == "text/plain" {
        let text = String::from_utf8(bytes)
            .map_err(|_| ApiError::bad_input("text file is not valid UTF-8"))?;
        return Ok(Part::Text(text));
    }

    Ok(Part::Blob {
        mime_type: payload.mime_type.clone(),
        data: payload.data.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn b64(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    #[test]
    fn pdf_stays_a_blob() {
        let payload = DocumentPayload {
            data: b64(b"%PDF-1.7 fake"),
            mime_type: "application/pdf".into(),
        };
        let part = to_part(&payload).unwrap();
        assert_eq!(
            part,
            Part::Blob {
                mime_type: "application/pdf".into(),
                data: payload.data.clone(),
            }
        );
    }

    #[test]
    fn text_file_becomes_prompt_text() {
        let payload = DocumentPayload {
            data: b64("LEASE between A and B".as_bytes()),
            mime_type: "text/plain".into(),
        };
        assert_eq!(
            to_part(&payload).unwrap(),
            Part::Text("LEASE between A and B".into())
        );
    }

    #[test]
    fn empty_data_is_rejected() {
        let payload = DocumentPayload {
            data: String::new(),
            mime_type: "application/pdf".into(),
        };
        let err = to_part(&payload).unwrap_err();
        assert!(err.is_bad_input());
    }

    #[test]
    fn unsupported_type_is_rejected() {
        let payload = DocumentPayload {
            data: b64(b"MZ"),
            mime_type: "application/x-msdownload".into(),
        };
        let err = to_part(&payload).unwrap_err();
        assert!(err.is_bad_input());
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let payload = DocumentPayload {
            data: "not base64!!".into(),
            mime_type: "image/png".into(),
        };
        assert!(to_part(&payload).unwrap_err().is_bad_input());
    }

    #[test]
    fn non_utf8_text_file_is_rejected() {
        let payload = DocumentPayload {
            data: b64(&[0xff, 0xfe, 0x00]),
            mime_type: "text/plain".into(),
        };
        assert!(to_part(&payload).unwrap_err().is_bad_input());
    }
}

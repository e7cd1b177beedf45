//! QR code generation for tool links: a fixed error-correction and size
//! configuration, returning a base64 PNG data URL plus the encoded URL.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::{EcLevel, QrCode};
use serde::Serialize;
use url::Url;

use crate::errors::AppError;

/// Minimum rendered dimension in pixels. Matches the original service's
/// 300 px configuration.
const MIN_DIMENSION: u32 = 300;

#[derive(Debug, Clone, Serialize)]
pub struct QrPayload {
    /// `data:image/png;base64,...`
    pub qr_code: String,
    pub url: String,
}

/// Validates the target as an absolute http(s) URL, then encodes it at
/// error-correction level H.
pub fn generate(target: &str) -> Result<QrPayload, AppError> {
    let parsed = Url::parse(target).map_err(|_| AppError::Validation {
        field: Some("target"),
        message: "target must be an absolute URL".to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::Validation {
            field: Some("target"),
            message: "target must use http or https".to_string(),
        });
    }

    let code = QrCode::with_error_correction_level(target.as_bytes(), EcLevel::H)
        .map_err(|e| AppError::Qr(e.to_string()))?;
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| AppError::Qr(e.to_string()))?;

    Ok(QrPayload {
        qr_code: format!("data:image/png;base64,{}", BASE64.encode(&png)),
        url: target.to_string(),
    })
}

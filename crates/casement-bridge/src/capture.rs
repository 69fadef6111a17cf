//! Screen/window capture encoding.
//!
//! The raster grab itself is platform work behind [`WindowHost`]; this
//! module owns the interesting half of the pipeline: PNG-encode the RGBA
//! pixels, base64 the bytes, and wrap them as a `data:image/png;base64,...`
//! URI so binary rides the JSON envelope as text. The envelope format is
//! never extended for binary payloads.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use casement_common::{BridgeError, PlatformError};
use serde_json::{json, Value};
use tracing::debug;

use crate::host::{CaptureSource, WindowHost};

/// An RGBA8 raster snapshot handed over by the platform.
#[derive(Debug, Clone)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA rows, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

/// Run the full capture pipeline for one source.
pub fn capture(host: &mut dyn WindowHost, source: CaptureSource) -> Result<Value, BridgeError> {
    let raster = host.grab_raster(source)?;
    let png = encode_png(&raster)?;
    let encoded = B64.encode(&png);
    debug!(
        source = source.as_str(),
        width = raster.width,
        height = raster.height,
        png_bytes = png.len(),
        "captured image"
    );
    Ok(json!({
        "status": "success",
        "source": source.as_str(),
        "width": raster.width,
        "height": raster.height,
        "format": "PNG",
        "base64": format!("data:image/png;base64,{encoded}"),
    }))
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, PlatformError> {
    let expected = raster.width as usize * raster.height as usize * 4;
    if raster.rgba.len() != expected {
        return Err(PlatformError::Capture(format!(
            "raster size mismatch: {}x{} needs {expected} bytes, got {}",
            raster.width,
            raster.height,
            raster.rgba.len()
        )));
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, raster.width, raster.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| PlatformError::Capture(e.to_string()))?;
        writer
            .write_image_data(&raster.rgba)
            .map_err(|e| PlatformError::Capture(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testhost::MockHost;

    fn checker(width: u32, height: u32) -> Raster {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let on = (x + y) % 2 == 0;
                rgba.extend_from_slice(if on {
                    &[0xff, 0xff, 0xff, 0xff]
                } else {
                    &[0x00, 0x00, 0x00, 0xff]
                });
            }
        }
        Raster {
            width,
            height,
            rgba,
        }
    }

    fn decode_dims(png_bytes: &[u8]) -> (u32, u32) {
        let decoder = png::Decoder::new(png_bytes);
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        (info.width, info.height)
    }

    #[test]
    fn encoded_png_round_trips_dimensions() {
        let raster = checker(17, 9);
        let png = encode_png(&raster).unwrap();
        assert_eq!(decode_dims(&png), (17, 9));
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let raster = Raster {
            width: 4,
            height: 4,
            rgba: vec![0; 7],
        };
        let err = encode_png(&raster).unwrap_err();
        assert!(err.to_string().contains("raster size mismatch"));
    }

    #[test]
    fn capture_produces_data_uri_decoding_to_exact_dimensions() {
        let mut host = MockHost::with_raster(23, 11);
        let result = capture(&mut host, CaptureSource::Window).unwrap();
        assert_eq!(result["status"], "success");
        assert_eq!(result["source"], "window");
        assert_eq!(result["width"], 23);
        assert_eq!(result["height"], 11);
        assert_eq!(result["format"], "PNG");

        let uri = result["base64"].as_str().unwrap();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        let png_bytes = B64.decode(encoded).unwrap();
        assert_eq!(decode_dims(&png_bytes), (23, 11));
    }

    #[test]
    fn capture_screen_reports_screen_source() {
        let mut host = MockHost::with_raster(8, 8);
        let result = capture(&mut host, CaptureSource::Screen).unwrap();
        assert_eq!(result["source"], "screen");
    }

    #[test]
    fn missing_backend_surfaces_as_error() {
        let mut host = MockHost::new();
        let err = capture(&mut host, CaptureSource::Window).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }
}

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::canvas::Canvas;
use crate::error::ExportError;

/// Image formats the save action can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    /// Picks the format from the file extension
    pub fn from_file_name(file_name: &str) -> Result<Self, ExportError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(ExportError::UnsupportedFormat(file_name.to_owned())),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Encodes the whole canvas. JPEG has no alpha channel, so it is dropped.
pub fn encode(canvas: &Canvas, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    let rgba = canvas.to_rgba_image();
    let image = match format {
        ExportFormat::Png => DynamicImage::ImageRgba8(rgba),
        ExportFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
    };

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, format.image_format())?;
    Ok(bytes.into_inner())
}

/// Destination for an encoded image
pub trait ImageSink {
    /// Hands the encoded bytes over under `file_name`.
    /// Returns a human readable description of where they went.
    fn deliver(&mut self, file_name: &str, format: ExportFormat, bytes: Vec<u8>) -> Result<String, ExportError>;
}

/// Encodes the canvas according to `file_name`'s extension and delivers it
pub fn save(canvas: &Canvas, file_name: &str, sink: &mut dyn ImageSink) -> Result<String, ExportError> {
    let format = ExportFormat::from_file_name(file_name)?;
    let bytes = encode(canvas, format)?;
    log::debug!("Encoded {}x{} canvas as {:?} ({} bytes)", canvas.width(), canvas.height(), format, bytes.len());
    sink.deliver(file_name, format, bytes)
}

/// Writes saved images into a directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSink {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ImageSink for FileSink {
    fn deliver(&mut self, file_name: &str, _format: ExportFormat, bytes: Vec<u8>) -> Result<String, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        Ok(path.display().to_string())
    }
}

/// Triggers a browser download through a synthetic `<a download>` click
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone)]
pub struct DownloadSink;

#[cfg(target_arch = "wasm32")]
impl ImageSink for DownloadSink {
    fn deliver(&mut self, file_name: &str, format: ExportFormat, bytes: Vec<u8>) -> Result<String, ExportError> {
        use base64::Engine as _;
        use eframe::wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Web("no document".to_owned()))?;

        let link = document
            .create_element("a")
            .map_err(|err| ExportError::Web(format!("{err:?}")))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Web("created element is not an anchor".to_owned()))?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        link.set_download(file_name);
        link.set_href(&format!("data:{};base64,{}", format.mime_type(), encoded));
        link.click();

        Ok(file_name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_file_name("canvasImg.jpg").unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_file_name("out.JPEG").unwrap(), ExportFormat::Jpeg);
        assert_eq!(ExportFormat::from_file_name("drawing.png").unwrap(), ExportFormat::Png);
        assert!(matches!(
            ExportFormat::from_file_name("drawing"),
            Err(ExportError::UnsupportedFormat(_))
        ));
        assert!(ExportFormat::from_file_name("drawing.gif").is_err());
    }
}

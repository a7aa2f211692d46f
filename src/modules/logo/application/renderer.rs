use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;
use thiserror::Error;

use crate::logo::domain::emblem;
use crate::logo::domain::parameters::{FileType, Parameters};

#[derive(Debug, Error)]
pub enum RenderLogoError {
    #[error("failed to parse generated SVG: {0}")]
    Svg(String),
    #[error("failed to allocate a {0}x{0} pixmap")]
    PixmapAllocation(u32),
    #[error("failed to encode image: {0}")]
    Encoding(String),
    #[error("failed to convert to PDF: {0}")]
    Pdf(String),
}

/// Turns validated emblem parameters into the requested byte encoding.
///
/// The system font database is loaded once and shared across requests; the
/// emblem's monospace labels resolve through it (falling back through the
/// `Fira Code, monospace` stack).
pub struct LogoRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl LogoRenderer {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Renders the emblem in the encoding selected by `parameters.file_type`.
    /// For `dataUrl` the bytes are a textual `data:image/png;base64,…` URI.
    pub fn render(&self, parameters: &Parameters) -> Result<Vec<u8>, RenderLogoError> {
        let svg = emblem::render_svg(parameters);

        match parameters.file_type {
            FileType::Svg => Ok(svg.into_bytes()),
            FileType::Png => self.encode_png(&svg),
            FileType::Jpg | FileType::Jpeg => self.encode_jpeg(&svg),
            FileType::Pdf => encode_pdf(&svg),
            FileType::DataUrl => {
                let png = self.encode_png(&svg)?;
                Ok(format!("data:image/png;base64,{}", BASE64.encode(png)).into_bytes())
            }
        }
    }

    fn rasterize(&self, svg: &str) -> Result<tiny_skia::Pixmap, RenderLogoError> {
        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &options)
            .map_err(|e| RenderLogoError::Svg(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(emblem::SIZE, emblem::SIZE)
            .ok_or(RenderLogoError::PixmapAllocation(emblem::SIZE))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        Ok(pixmap)
    }

    fn encode_png(&self, svg: &str) -> Result<Vec<u8>, RenderLogoError> {
        self.rasterize(svg)?
            .encode_png()
            .map_err(|e| RenderLogoError::Encoding(e.to_string()))
    }

    fn encode_jpeg(&self, svg: &str) -> Result<Vec<u8>, RenderLogoError> {
        let pixmap = self.rasterize(svg)?;

        // JPEG carries no alpha channel; demultiply and drop it.
        let mut rgb = Vec::with_capacity((emblem::SIZE * emblem::SIZE * 3) as usize);
        for pixel in pixmap.pixels() {
            let colour = pixel.demultiply();
            rgb.extend_from_slice(&[colour.red(), colour.green(), colour.blue()]);
        }

        let mut bytes = Vec::new();
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, 90);
        encoder
            .encode(
                &rgb,
                emblem::SIZE,
                emblem::SIZE,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| RenderLogoError::Encoding(e.to_string()))?;

        Ok(bytes)
    }
}

impl Default for LogoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// svg2pdf ships its own usvg re-export; parsing through it keeps the PDF
// pipeline decoupled from the raster pipeline's usvg version.
fn encode_pdf(svg: &str) -> Result<Vec<u8>, RenderLogoError> {
    let mut options = svg2pdf::usvg::Options::default();
    let mut fontdb = svg2pdf::usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    options.fontdb = Arc::new(fontdb);

    let tree = svg2pdf::usvg::Tree::from_str(svg, &options)
        .map_err(|e| RenderLogoError::Svg(e.to_string()))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| RenderLogoError::Pdf(e.to_string()))
}

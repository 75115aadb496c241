use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::application::ports::ExtractionError;

pub(super) const MAX_PAGES_DUE_TO_RAM_USAGE: usize = 200;
pub(super) const RENDER_DPI: f32 = 150.0;

/// Renders every page of a PDF into an in-memory bitmap for the OCR
/// fallback path. Must run on a blocking thread.
pub(super) fn rasterize_pages(data: &[u8]) -> Result<Vec<DynamicImage>, ExtractionError> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library()
            .map_err(|e| ExtractionError::ExtractionFailed(format!("pdfium bind failed: {e}")))?,
    );

    let doc = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| ExtractionError::ExtractionFailed(format!("pdfium open failed: {e}")))?;

    let page_count = doc.pages().len() as usize;
    let pages_to_render = page_count.min(MAX_PAGES_DUE_TO_RAM_USAGE);
    if page_count > MAX_PAGES_DUE_TO_RAM_USAGE {
        tracing::warn!(
            page_count,
            rendered = pages_to_render,
            "PDF exceeds page cap, trailing pages will not be recognized"
        );
    }

    let mut images: Vec<DynamicImage> = Vec::with_capacity(pages_to_render);

    for index in 0..pages_to_render {
        let page = doc.pages().get(index as u16).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("page {index} access failed: {e}"))
        })?;

        let width = (page.width().value * RENDER_DPI / 72.0) as i32;
        let height = (page.height().value * RENDER_DPI / 72.0) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(width)
                    .set_target_height(height),
            )
            .map_err(|e| {
                ExtractionError::ExtractionFailed(format!("render page {index} failed: {e}"))
            })?;

        images.push(bitmap.as_image());
    }

    Ok(images)
}

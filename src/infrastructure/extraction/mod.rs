mod docx_extractor;
mod image_extractor;
mod pdf_extractor;
mod pdf_rasterizer;
mod table_detector;
mod table_formatter;

pub use docx_extractor::DocxExtractor;
pub use image_extractor::ImageExtractor;
pub use pdf_extractor::PdfExtractor;
pub use table_formatter::{NO_TABLE_MESSAGE, format_table};

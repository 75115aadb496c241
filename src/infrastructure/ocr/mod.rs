mod image_normalizer;
mod tesseract_recognizer;

pub use image_normalizer::{MEDIAN_FILTER_RADIUS, UPSCALE_FACTOR, normalize_for_ocr};
pub use tesseract_recognizer::TesseractRecognizer;

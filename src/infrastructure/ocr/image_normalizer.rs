use image::imageops::FilterType;
use image::{DynamicImage, GrayImage};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};
use imageproc::filter::median_filter;

/// Upscale factor applied before binarization, raising effective DPI for
/// small-font scans.
pub const UPSCALE_FACTOR: u32 = 2;

/// Radius of the speckle-removal median filter (radius 1 = 3x3 window).
pub const MEDIAN_FILTER_RADIUS: u32 = 1;

/// Prepares a raster image for text recognition: grayscale, 2x cubic
/// upscale, Otsu binarization, median denoise. Deterministic for a given
/// input.
pub fn normalize_for_ocr(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();

    let (width, height) = gray.dimensions();
    let upscaled = image::imageops::resize(
        &gray,
        width * UPSCALE_FACTOR,
        height * UPSCALE_FACTOR,
        FilterType::CatmullRom,
    );

    let level = otsu_level(&upscaled);
    let binarized = threshold(&upscaled, level, ThresholdType::Binary);

    median_filter(&binarized, MEDIAN_FILTER_RADIUS, MEDIAN_FILTER_RADIUS)
}

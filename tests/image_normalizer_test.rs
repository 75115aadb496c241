use docsift::infrastructure::ocr::{UPSCALE_FACTOR, normalize_for_ocr};
use image::{DynamicImage, GrayImage, Luma};

fn half_dark_image(width: u32, height: u32) -> DynamicImage {
    let image = GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Luma([20u8]) } else { Luma([230u8]) }
    });
    DynamicImage::ImageLuma8(image)
}

#[test]
fn given_input_image_when_normalizing_then_output_is_upscaled() {
    let normalized = normalize_for_ocr(&half_dark_image(10, 10));

    assert_eq!(
        normalized.dimensions(),
        (10 * UPSCALE_FACTOR, 10 * UPSCALE_FACTOR)
    );
}

#[test]
fn given_input_image_when_normalizing_then_output_is_binary() {
    let normalized = normalize_for_ocr(&half_dark_image(10, 10));

    assert!(
        normalized
            .pixels()
            .all(|pixel| pixel[0] == 0 || pixel[0] == u8::MAX)
    );
}

#[test]
fn given_same_input_when_normalizing_twice_then_output_is_identical() {
    let input = half_dark_image(16, 8);

    let first = normalize_for_ocr(&input);
    let second = normalize_for_ocr(&input);

    assert_eq!(first.as_raw(), second.as_raw());
}

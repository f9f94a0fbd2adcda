//! End-to-end pipeline tests: synthesize an image, encode it to disk,
//! decode it back, and score it.

use image::{ImageEncoder, RgbImage};
use photograde::{Grade, ScoringConfig, rate};
use std::path::Path;

/// Write a solid-color PNG (lossless, so decoded pixels are exact).
fn write_solid_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

#[test]
fn solid_mid_gray_png_reproduces_reference_scores() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("gray.png");
    write_solid_png(&path, 1000, 1000, [128, 128, 128]);

    let img = photograde::decode::decode_path(&path).unwrap();
    let rating = rate(&img, &ScoringConfig::default());

    assert_eq!(rating.scores.brightness, 10.0);
    assert_eq!(rating.scores.contrast, 0.0);
    assert_eq!(rating.scores.saturation, 0.0);
    assert_eq!(rating.scores.sharpness, 0.0);
    assert_eq!(rating.scores.aspect_ratio, 10.0);
    assert!((rating.scores.resolution - 1_000_000.0 / 1_048_576.0).abs() < 1e-9);
    assert_eq!(rating.display_rating(), 3.5);
    assert_eq!(rating.grade, Grade::D);
}

#[test]
fn decoded_image_scores_identically_on_repeat() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("noise.png");
    let img = RgbImage::from_fn(320, 240, |x, y| {
        // Deterministic pseudo-texture, no RNG
        image::Rgb([
            ((x * 7 + y * 13) % 256) as u8,
            ((x * 3) % 256) as u8,
            ((y * 11) % 256) as u8,
        ])
    });
    let file = std::fs::File::create(&path).unwrap();
    image::codecs::png::PngEncoder::new(std::io::BufWriter::new(file))
        .write_image(img.as_raw(), 320, 240, image::ExtendedColorType::Rgb8)
        .unwrap();

    let config = ScoringConfig::default();
    let first = rate(&photograde::decode::decode_path(&path).unwrap(), &config);
    let second = rate(&photograde::decode::decode_path(&path).unwrap(), &config);
    assert_eq!(first, second);
    assert!((0.0..=10.0).contains(&first.overall_rating));
}

#[test]
fn textured_image_outscores_its_blurred_counterpart_on_sharpness() {
    let tmp = tempfile::TempDir::new().unwrap();
    let sharp_path = tmp.path().join("sharp.png");
    let soft_path = tmp.path().join("soft.png");

    // Hard vertical stripes vs a gentle ramp of the same mean brightness
    let sharp = RgbImage::from_fn(200, 200, |x, _| {
        let v = if (x / 4) % 2 == 0 { 32 } else { 224 };
        image::Rgb([v, v, v])
    });
    let soft = RgbImage::from_fn(200, 200, |x, _| {
        let v = (32.0 + (x as f64 / 199.0) * 192.0) as u8;
        image::Rgb([v, v, v])
    });
    for (path, img) in [(&sharp_path, &sharp), (&soft_path, &soft)] {
        let file = std::fs::File::create(path).unwrap();
        image::codecs::png::PngEncoder::new(std::io::BufWriter::new(file))
            .write_image(img.as_raw(), 200, 200, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    let config = ScoringConfig::default();
    let sharp_rating = rate(&photograde::decode::decode_path(&sharp_path).unwrap(), &config);
    let soft_rating = rate(&photograde::decode::decode_path(&soft_path).unwrap(), &config);
    assert!(sharp_rating.scores.sharpness > soft_rating.scores.sharpness);
}

#[test]
fn one_by_one_image_gets_a_defined_low_rating() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("dot.png");
    write_solid_png(&path, 1, 1, [200, 30, 30]);

    let img = photograde::decode::decode_path(&path).unwrap();
    let rating = rate(&img, &ScoringConfig::default());
    assert!(rating.overall_rating.is_finite());
    assert_eq!(rating.scores.sharpness, 0.0);
    assert!(rating.scores.resolution < 1e-5);
    assert!(matches!(rating.grade, Grade::D | Grade::F));
}

#[test]
fn custom_config_changes_the_score() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("gray.png");
    write_solid_png(&path, 400, 300, [64, 64, 64]);
    let img = photograde::decode::decode_path(&path).unwrap();

    let stock = rate(&img, &ScoringConfig::default());
    let lenient = rate(
        &img,
        &ScoringConfig {
            brightness_reference: 64.0,
            ..ScoringConfig::default()
        },
    );
    // Raw brightness 64: half score against 128, full against 64
    assert_eq!(stock.scores.brightness, 5.0);
    assert_eq!(lenient.scores.brightness, 10.0);
    assert!(lenient.overall_rating > stock.overall_rating);
}

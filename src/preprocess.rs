// src/preprocess.rs
//
// Optional normalization of a scanned sheet before it goes to the
// recognition service. Phone photos of projected score sheets read badly;
// flattening to grayscale and pushing contrast/sharpness measurably lifts
// recognition quality. Strictly upstream of the extraction core.

use std::error::Error;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::config::options::PreprocessOptions;

/// Decode PNG/JPEG bytes, apply the configured normalization steps and
/// re-encode as PNG.
pub fn normalize(bytes: &[u8], opts: &PreprocessOptions) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut img = image::load_from_memory(bytes)?;

    if opts.grayscale {
        img = DynamicImage::ImageLuma8(img.to_luma8());
    }
    if opts.contrast != 0.0 {
        img = img.adjust_contrast(opts.contrast);
    }
    if opts.sharpen {
        // Unsharp mask; sigma/threshold picked on sample scoreboard photos.
        img = img.unsharpen(1.2, 2);
    }

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

use crate::constants::{
    COMPRESSED_SUFFIX, JPG_EXTENSION, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, MAX_QUALITY,
    PNG_HIGH_QUALITY, PNG_ZOPFLI_QUALITY, ZOPFLI_ITERATIONS,
};
use crate::error::{Result, ShrinkError};
use crate::utils::{get_size_format, size_change_percent};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ShrinkOptions {
    pub resize_ratio: f64,
    pub quality: u8,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub to_jpg: bool,
}

impl ShrinkOptions {
    pub fn new(
        resize_ratio: f64,
        quality: u8,
        width: Option<u32>,
        height: Option<u32>,
        to_jpg: bool,
    ) -> Result<Self> {
        if quality > MAX_QUALITY {
            return Err(ShrinkError::InvalidQuality(quality));
        }

        Ok(Self {
            resize_ratio,
            quality,
            width,
            height,
            to_jpg,
        })
    }
}

/// Loads an image and returns it along with its on-disk byte size.
///
/// The format is sniffed from the file content rather than trusted from the
/// extension. A missing path is reported as `FileNotFound`; an undecodable
/// file propagates the decoder error.
pub fn load_image(input: &Path) -> Result<(DynamicImage, u64)> {
    if !input.exists() {
        return Err(ShrinkError::FileNotFound(input.to_path_buf()));
    }

    let file_size = fs::metadata(input)?.len();
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;

    Ok((img, file_size))
}

/// Applies the resize policy in place and reports whether it ran.
///
/// A ratio below 1.0 scales both dimensions by that ratio (integer
/// truncation) and takes precedence over an explicit width/height pair;
/// with neither set the image is left untouched.
pub fn resize_image(img: &mut DynamicImage, options: &ShrinkOptions) -> bool {
    let (width, height) = img.dimensions();

    if options.resize_ratio < 1.0 {
        let new_width = (width as f64 * options.resize_ratio) as u32;
        let new_height = (height as f64 * options.resize_ratio) as u32;
        *img = img.resize_exact(new_width, new_height, image::imageops::FilterType::Lanczos3);
        return true;
    }

    if let (Some(w), Some(h)) = (options.width, options.height) {
        if (w, h) != (width, height) {
            *img = img.resize_exact(w, h, image::imageops::FilterType::Lanczos3);
        }
        return true;
    }

    false
}

/// Derives the output filename next to the source: the stem gains a
/// `_compressed` suffix and the extension is either forced to `.jpg` or
/// carried over from the input (inputs without an extension stay bare).
pub fn derive_output_path(input: &Path, to_jpg: bool) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ShrinkError::InvalidFileName(input.to_path_buf()))?;

    let file_name = if to_jpg {
        format!("{}{}.{}", stem, COMPRESSED_SUFFIX, JPG_EXTENSION)
    } else {
        match input.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}{}.{}", stem, COMPRESSED_SUFFIX, ext),
            None => format!("{}{}", stem, COMPRESSED_SUFFIX),
        }
    };

    Ok(input.with_file_name(file_name))
}

/// Encodes and saves the image, retrying once through an RGB conversion when
/// the encoder rejects the color mode (an alpha or palette image going into
/// JPEG). Any other save failure propagates.
pub fn save_image(
    img: &DynamicImage,
    output: &Path,
    format: ImageFormat,
    quality: u8,
) -> Result<()> {
    match write_encoded(img, output, format, quality) {
        Err(ShrinkError::Image(image::ImageError::Unsupported(_))) => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            write_encoded(&rgb, output, format, quality)
        }
        result => result,
    }
}

fn write_encoded(
    img: &DynamicImage,
    output: &Path,
    format: ImageFormat,
    quality: u8,
) -> Result<()> {
    match format {
        ImageFormat::Jpeg => {
            let file = File::create(output)?;
            let mut writer = BufWriter::new(file);
            img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?;
            writer.flush()?;
            Ok(())
        }
        ImageFormat::Png => save_optimized_png(img, output, quality),
        _ => {
            img.save_with_format(output, format)?;
            Ok(())
        }
    }
}

fn save_optimized_png(img: &DynamicImage, output: &Path, quality: u8) -> Result<()> {
    let temp_path = output.with_extension("tmp.png");
    img.save_with_format(&temp_path, ImageFormat::Png)?;

    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut options = Options::from_preset(4);
    options.force = true;
    options.deflate = if quality >= PNG_ZOPFLI_QUALITY {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        }
    } else if quality >= PNG_HIGH_QUALITY {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(output.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &options)
        .map_err(|e| ShrinkError::PngOptimization(e.to_string()))?;

    Ok(())
}

fn move_into_dir(file: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = file
        .file_name()
        .ok_or_else(|| ShrinkError::InvalidFileName(file.to_path_buf()))?;
    let target = dir.join(file_name);

    // rename cannot cross filesystems; fall back to copy + delete
    if fs::rename(file, &target).is_err() {
        fs::copy(file, &target)?;
        fs::remove_file(file)?;
    }

    Ok(target)
}

/// Compresses a single image: load, apply the resize policy, re-encode under
/// the derived `_compressed` name and print before/after statistics.
///
/// With a destination directory the written file is moved there afterwards,
/// keeping only its base filename; a move failure is logged and the file is
/// left next to the source. Returns the final location of the output.
pub fn compress_image(
    input: &Path,
    options: &ShrinkOptions,
    destination_dir: Option<&Path>,
) -> Result<PathBuf> {
    crate::info!("🗜️  Compressing image: {}", input.display());

    let (mut img, original_size) = load_image(input)?;
    crate::info!("📊 Image shape: {}x{}", img.width(), img.height());
    crate::info!(
        "📊 Size before compression: {}",
        get_size_format(original_size)
    );

    if resize_image(&mut img, options) {
        crate::info!("🔄 New image shape: {}x{}", img.width(), img.height());
    }

    let output = derive_output_path(input, options.to_jpg)?;
    let format = ImageFormat::from_path(&output)?;
    crate::verbose!(
        "Encoding {} as {:?} at quality {}",
        output.display(),
        format,
        options.quality
    );
    save_image(&img, &output, format, options.quality)?;
    crate::info!("✅ New file saved: {}", output.display());

    let new_size = fs::metadata(&output)?.len();
    crate::info!("📈 Size after compression: {}", get_size_format(new_size));
    crate::info!(
        "🎯 Image size change: {:.2}% of the original image size",
        size_change_percent(original_size, new_size)
    );

    if let Some(dir) = destination_dir {
        match move_into_dir(&output, dir) {
            Ok(moved) => return Ok(moved),
            Err(e) => crate::warn!("problems while moving file: {}", e),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;
    use tempfile::TempDir;

    fn options_with_ratio(ratio: f64) -> ShrinkOptions {
        ShrinkOptions::new(ratio, 90, None, None, false).unwrap()
    }

    #[test]
    fn test_options_accept_quality_bounds() {
        assert!(ShrinkOptions::new(1.0, 0, None, None, false).is_ok());
        assert!(ShrinkOptions::new(1.0, 95, None, None, false).is_ok());
    }

    #[test]
    fn test_options_reject_quality_above_max() {
        let result = ShrinkOptions::new(1.0, 96, None, None, false);
        assert!(matches!(result, Err(ShrinkError::InvalidQuality(96))));
    }

    #[test]
    fn test_resize_ratio_truncates_dimensions() {
        let mut img = DynamicImage::new_rgb8(200, 100);
        assert!(resize_image(&mut img, &options_with_ratio(0.5)));
        assert_eq!(img.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_ratio_one_leaves_dimensions_unchanged() {
        let mut img = DynamicImage::new_rgb8(200, 100);
        assert!(!resize_image(&mut img, &options_with_ratio(1.0)));
        assert_eq!(img.dimensions(), (200, 100));
    }

    #[test]
    fn test_resize_ratio_takes_precedence_over_explicit_dimensions() {
        let mut img = DynamicImage::new_rgb8(200, 100);
        let options = ShrinkOptions::new(0.5, 90, Some(400), Some(400), false).unwrap();
        resize_image(&mut img, &options);
        assert_eq!(img.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_explicit_dimensions() {
        let mut img = DynamicImage::new_rgb8(200, 100);
        let options = ShrinkOptions::new(1.0, 90, Some(150), Some(75), false).unwrap();
        assert!(resize_image(&mut img, &options));
        assert_eq!(img.dimensions(), (150, 75));
    }

    #[test]
    fn test_derive_output_path_forced_jpg() {
        let path = derive_output_path(Path::new("a/b.png"), true).unwrap();
        assert_eq!(path, PathBuf::from("a/b_compressed.jpg"));
    }

    #[test]
    fn test_derive_output_path_keeps_extension() {
        let path = derive_output_path(Path::new("a/b.png"), false).unwrap();
        assert_eq!(path, PathBuf::from("a/b_compressed.png"));
    }

    #[test]
    fn test_derive_output_path_without_extension() {
        let path = derive_output_path(Path::new("a/b"), false).unwrap();
        assert_eq!(path, PathBuf::from("a/b_compressed"));
    }

    #[test]
    fn test_save_image_converts_alpha_for_jpeg() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("alpha.jpg");
        let img = DynamicImage::new_rgba8(8, 8);

        save_image(&img, &output, ImageFormat::Jpeg, 90).unwrap();

        let saved = ImageReader::open(&output).unwrap().decode().unwrap();
        assert_eq!(saved.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_load_image_missing_file() {
        let result = load_image(Path::new("nonexistent.jpg"));
        assert!(matches!(result, Err(ShrinkError::FileNotFound(_))));
    }

    #[test]
    fn test_compress_image_moves_into_destination() {
        let temp_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("photo.png");
        DynamicImage::new_rgb8(32, 32).save(&source).unwrap();

        let options = ShrinkOptions::new(1.0, 90, None, None, true).unwrap();
        let moved = compress_image(&source, &options, Some(dest_dir.path())).unwrap();

        assert_eq!(moved, dest_dir.path().join("photo_compressed.jpg"));
        assert!(moved.exists());
        assert!(!temp_dir.path().join("photo_compressed.jpg").exists());
    }
}

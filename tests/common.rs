use image::{DynamicImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    DynamicImage::new_rgb8(width, height).save(&path).unwrap();
    path
}

pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 60, 60, 128]))
        .save(&path)
        .unwrap();
    path
}

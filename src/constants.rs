pub const DEFAULT_QUALITY: u8 = 90;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 95;

pub const DEFAULT_RESIZE_RATIO: f64 = 1.0;

/// Suffix appended to the file stem of every compressed output.
pub const COMPRESSED_SUFFIX: &str = "_compressed";
pub const JPG_EXTENSION: &str = "jpg";

/// macOS Desktop Services artifact skipped during batch enumeration.
pub const DS_STORE: &str = ".DS_Store";

/// Binary (1024-based) unit prefixes walked by the size formatter.
/// Values that exhaust the sequence fall through to "Y".
pub const SIZE_UNITS: [&str; 8] = ["", "K", "M", "G", "T", "P", "E", "Z"];
pub const SIZE_FACTOR: f64 = 1024.0;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

/// Quality thresholds selecting the oxipng deflater for PNG output.
pub const PNG_ZOPFLI_QUALITY: u8 = 90;
pub const PNG_HIGH_QUALITY: u8 = 70;

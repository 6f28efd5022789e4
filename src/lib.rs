pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;

pub use batch::batch_compress;
pub use error::{Result, ShrinkError};
pub use processing::{
    compress_image, derive_output_path, load_image, resize_image, save_image, ShrinkOptions,
};
pub use utils::{get_size_format, size_change_percent};

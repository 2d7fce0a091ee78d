pub mod brand_files;

pub use brand_files::{discover, read_brand_file, read_brand_file_async, BrandFile, InputError};

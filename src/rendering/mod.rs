pub mod decode;
pub mod png_writer;

pub use png_writer::{encode_gray4, is_gray4};

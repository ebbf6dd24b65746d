//! Image description collaborator.
//!
//! The pipeline only needs "image in, free text out". [`Describer`] is that
//! seam: the CLI builds one [`OpenAiDescriber`] per process and hands it to
//! the rename driver, tests hand in a double with canned answers.

mod error;
mod openai;
mod parse;

pub use error::DescribeError;
pub use openai::{OpenAiDescriber, API_KEY_ENV, DESCRIBE_PROMPT};

use crate::encode::EncodedImage;

/// Produces a short free-text description of an image.
///
/// The returned text is untrusted and must be sanitized before it is used in
/// a filename. An empty description is not an error.
pub trait Describer {
    fn describe(&self, image: &EncodedImage) -> Result<String, DescribeError>;
}

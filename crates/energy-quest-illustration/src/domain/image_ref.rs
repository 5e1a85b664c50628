//! Displayable image handles.

use std::fmt;

use serde::{Deserialize, Serialize};

const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// An opaque, displayable reference to a generated illustration.
///
/// Currently always a `data:` URI embedding the JPEG bytes.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps base64-encoded JPEG bytes in a data URI.
    #[must_use]
    pub fn from_jpeg_base64(payload: &str) -> Self {
        Self(format!("{JPEG_DATA_URI_PREFIX}{payload}"))
    }

    /// The reference as a string usable as an image source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Debug output omits the payload.
impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageRef({} bytes)", self.0.len())
    }
}

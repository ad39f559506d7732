// src/recognize.rs
//
// Boundary to whatever text-recognition service turns image bytes into raw
// text. The extraction core treats that text as untrusted input and never
// cares which service produced it; this crate deliberately ships no network
// client, so the trait is the whole contract.

use std::error::Error;

pub trait Recognizer {
    /// Recognize text in the given image bytes. Errors here are upstream
    /// failures (service down, unreadable image) and are reported to the
    /// caller before the extraction core is ever involved.
    fn recognize(&self, image: &[u8]) -> Result<String, Box<dyn Error>>;
}

/// Adapter for text that was recognized out-of-band (pasted into the GUI,
/// exported from a service console, replayed in tests).
pub struct PrerecognizedText(pub String);

impl Recognizer for PrerecognizedText {
    fn recognize(&self, _image: &[u8]) -> Result<String, Box<dyn Error>> {
        Ok(self.0.clone())
    }
}

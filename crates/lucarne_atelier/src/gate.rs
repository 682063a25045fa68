//! File-type gating.
//!
//! Only markup files are projected. A name is markup when it is the
//! in-memory document sentinel, has no extension at all, or ends with one of
//! the recognized markup extensions.

use phf::phf_set;

/// Name the host gives to an unnamed in-memory document.
pub const DOCUMENT_SENTINEL: &str = "[doc]";

/// Recognized markup extensions (lower case, without the dot).
static MARKUP_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "htm",
    "html",
    "xhtml",
    "jsp",
    "jsf",
    "php",
};

/// Extension of the last path component, without the dot.
pub fn extension(name: &str) -> Option<&str> {
    let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
    file.rsplit_once('.').map(|(_, ext)| ext)
}

/// Check if a file should go through markup projection.
pub fn is_markup_file(name: &str) -> bool {
    if name == DOCUMENT_SENTINEL {
        return true;
    }
    match extension(name) {
        None => true,
        Some(ext) => MARKUP_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()),
    }
}

//! Image discovery for the display folder.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// The images available to the display, fixed at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Image shown while the mode switch is engaged.
    pub fixed_image: PathBuf,
    /// Slideshow images in sorted path order, fixed image excluded.
    pub sequence_images: Vec<PathBuf>,
}

/// Build the catalog from a flat listing of `folder`.
///
/// The fixed image is the first entry, in sorted order, whose file stem
/// equals `fixed_name` case-insensitively (any recognized extension).
///
/// # Errors
/// [`Error::BadDir`] if the folder is missing or not a directory,
/// [`Error::EmptyCatalog`] if no recognized images exist,
/// [`Error::FixedImageNotFound`] if nothing matches `fixed_name`, and
/// [`Error::EmptySequence`] if the fixed image was the only image.
pub fn build(folder: &Path, fixed_name: &str) -> Result<Catalog, Error> {
    if !folder.is_dir() {
        return Err(Error::BadDir(folder.to_string_lossy().into_owned()));
    }

    let mut images = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }
    images.sort();

    if images.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let fixed_image = images
        .iter()
        .find(|p| stem_matches(p, fixed_name))
        .cloned()
        .ok_or_else(|| Error::FixedImageNotFound(fixed_name.to_string()))?;

    let sequence_images: Vec<PathBuf> =
        images.into_iter().filter(|p| *p != fixed_image).collect();
    if sequence_images.is_empty() {
        return Err(Error::EmptySequence(fixed_name.to_string()));
    }

    Ok(Catalog {
        fixed_image,
        sequence_images,
    })
}

#[inline]
fn is_supported_image(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(OsStr::to_str)
            .map(|s| s.to_ascii_lowercase()),
        Some(ref e) if ["png", "jpg", "jpeg", "bmp"].contains(&e.as_str())
    )
}

fn stem_matches(p: &Path, name: &str) -> bool {
    p.file_stem()
        .and_then(OsStr::to_str)
        .is_some_and(|stem| stem.eq_ignore_ascii_case(name))
}

//! Photo picker collaborator
//!
//! The compose screen attaches at most one photo. Access goes through an
//! async trait so the screen does not care where photos come from; the
//! shipped implementation browses a local photo library directory. Access is
//! gated: an unconfigured or unreadable library resolves to Denied, which the
//! caller surfaces without touching the draft.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::Config;
use crate::post::SubmitError;

/// File extensions treated as photos
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];

/// Outcome of a pick operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// One image reference (URI)
    Picked(String),
    /// User backed out; nothing selected
    Cancelled,
}

/// Result of the permission probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Async seam between the compose screen and whatever supplies photos
#[async_trait]
pub trait PhotoPicker: Send + Sync {
    /// Probe for access before any pick is attempted.
    async fn ensure_access(&self) -> Permission;

    /// Pick a single photo, or signal cancellation.
    ///
    /// Fails with `SubmitError::PermissionDenied` when access is refused.
    async fn pick(&self) -> Result<PickOutcome, SubmitError>;
}

/// Picker over a local photo library directory
#[derive(Debug, Clone)]
pub struct LibraryPicker {
    dir: Option<PathBuf>,
}

impl LibraryPicker {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Resolve the library from config, falling back to the platform
    /// pictures directory.
    pub fn from_config(cfg: &Config) -> Self {
        let dir = cfg
            .photos
            .library_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| directories::UserDirs::new().and_then(|d| d.picture_dir().map(Path::to_path_buf)));
        Self { dir }
    }

    pub fn library_dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn accessible_dir(&self) -> Option<&Path> {
        self.dir.as_deref().filter(|d| d.is_dir())
    }

    /// List photos in the library, newest first. Empty when access is denied.
    pub fn list_photos(&self) -> Vec<PathBuf> {
        let Some(dir) = self.accessible_dir() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut photos: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_photo(path))
            .collect();

        photos.sort_by_key(|path| {
            std::cmp::Reverse(
                fs::metadata(path)
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH),
            )
        });
        photos
    }
}

#[async_trait]
impl PhotoPicker for LibraryPicker {
    async fn ensure_access(&self) -> Permission {
        if self.accessible_dir().is_some() {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    async fn pick(&self) -> Result<PickOutcome, SubmitError> {
        if self.ensure_access().await == Permission::Denied {
            return Err(SubmitError::PermissionDenied);
        }

        // Non-interactive pick: newest photo in the library.
        match self.list_photos().into_iter().next() {
            Some(path) => Ok(PickOutcome::Picked(photo_uri(&path))),
            None => Ok(PickOutcome::Cancelled),
        }
    }
}

/// Opaque image reference for a library file
pub fn photo_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            PHOTO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[tokio::test]
    async fn denied_when_library_is_missing() {
        let picker = LibraryPicker::new(Some(PathBuf::from("/no/such/library")));
        assert_eq!(picker.ensure_access().await, Permission::Denied);
        assert_eq!(picker.pick().await, Err(SubmitError::PermissionDenied));
    }

    #[tokio::test]
    async fn denied_when_library_is_unconfigured() {
        let picker = LibraryPicker::new(None);
        assert_eq!(picker.ensure_access().await, Permission::Denied);
    }

    #[tokio::test]
    async fn cancelled_when_library_has_no_photos() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let picker = LibraryPicker::new(Some(dir.path().to_path_buf()));
        assert_eq!(picker.ensure_access().await, Permission::Granted);
        assert_eq!(picker.pick().await, Ok(PickOutcome::Cancelled));
    }

    #[tokio::test]
    async fn picks_a_photo_and_skips_non_photos() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("sunrise.JPG")).unwrap();

        let picker = LibraryPicker::new(Some(dir.path().to_path_buf()));
        let listed = picker.list_photos();
        assert_eq!(listed.len(), 1);

        match picker.pick().await.unwrap() {
            PickOutcome::Picked(uri) => {
                assert!(uri.starts_with("file://"));
                assert!(uri.ends_with("sunrise.JPG"));
            }
            PickOutcome::Cancelled => panic!("expected a pick"),
        }
    }
}

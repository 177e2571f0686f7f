//! Image rendering and storage doubles.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::image_mocks::{FlakyImageGen, MemoryAssetStore};
//!
//! let gen = FlakyImageGen::failing_for(AssetKind::Npc);
//! let store = MemoryAssetStore::new();
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use lorecrafter_domain::AssetKind;

use crate::infrastructure::pixel_art::PixelArtRenderer;
use crate::infrastructure::ports::{
    AssetStoreError, AssetStorePort, ImageGenError, ImageGenPort, ImageRequest, ImageResult,
};

/// Real renderer that refuses one asset kind.
pub struct FlakyImageGen {
    inner: PixelArtRenderer,
    fail_kind: Option<AssetKind>,
    call_count: AtomicUsize,
}

impl FlakyImageGen {
    pub fn reliable() -> Self {
        Self {
            inner: PixelArtRenderer::default(),
            fail_kind: None,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn failing_for(kind: AssetKind) -> Self {
        Self {
            fail_kind: Some(kind),
            ..Self::reliable()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl ImageGenPort for FlakyImageGen {
    fn render(&self, request: &ImageRequest) -> Result<ImageResult, ImageGenError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_kind == Some(request.kind) {
            return Err(ImageGenError::DrawingFailed(format!(
                "{} rendering disabled",
                request.kind
            )));
        }
        self.inner.render(request)
    }
}

/// In-memory asset store keyed by filename.
#[derive(Default)]
pub struct MemoryAssetStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.files
            .lock()
            .expect("files mutex poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub fn bytes(&self, filename: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .expect("files mutex poisoned")
            .get(filename)
            .cloned()
    }
}

impl AssetStorePort for MemoryAssetStore {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, AssetStoreError> {
        let mut files = self.files.lock().expect("files mutex poisoned");
        if files.contains_key(filename) {
            return Err(AssetStoreError::write(filename, "asset already exists"));
        }
        files.insert(filename.to_string(), bytes.to_vec());
        Ok(format!("assets/{}", filename))
    }
}

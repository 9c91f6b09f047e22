//! Whole-file JSON persistence for the product list.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catalog_core::product::Product;
use catalog_core::types::ProductId;

use crate::{StoreError, StoreResult};

/// A JSON array of products on disk, plus a `.next_id` sidecar holding the
/// id counter so ids freed by a delete stay retired across restarts.
///
/// Writes replace whole files: each is written to a sibling `.tmp` file
/// which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct ProductFile {
    path: PathBuf,
}

impl ProductFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every product in the file.
    ///
    /// A missing or blank file is an empty catalog; anything that is not a
    /// JSON array of products is an error.
    pub async fn read(&self) -> StoreResult<Vec<Product>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Product file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// The id counter saved by the last [`ProductFile::write`], if any.
    pub async fn read_next_id(&self) -> StoreResult<Option<ProductId>> {
        let path = self.next_id_path();
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Decode { path, source })
    }

    /// Overwrite the file with `products` and record `next_id`.
    ///
    /// The counter goes first: if the product write then fails, the saved
    /// counter can only be ahead of the catalog, never behind it.
    pub async fn write(&self, products: &[Product], next_id: ProductId) -> StoreResult<()> {
        let counter = serde_json::to_vec(&next_id).map_err(StoreError::Encode)?;
        replace_file(&self.next_id_path(), &counter).await?;

        let bytes = serde_json::to_vec_pretty(products).map_err(StoreError::Encode)?;
        replace_file(&self.path, &bytes).await?;

        tracing::debug!(
            path = %self.path.display(),
            count = products.len(),
            next_id,
            "Persisted products"
        );
        Ok(())
    }

    fn next_id_path(&self) -> PathBuf {
        with_suffix(&self.path, ".next_id")
    }

    #[cfg(test)]
    fn tmp_path(&self) -> PathBuf {
        with_suffix(&self.path, ".tmp")
    }
}

/// Write `bytes` to `<target>.tmp`, then rename it over `target`.
async fn replace_file(target: &Path, bytes: &[u8]) -> StoreResult<()> {
    let tmp = with_suffix(target, ".tmp");
    let write_err = |source| StoreError::Write {
        path: target.to_path_buf(),
        source,
    };
    tokio::fs::write(&tmp, bytes).await.map_err(write_err)?;
    tokio::fs::rename(&tmp, target).await.map_err(write_err)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            quantity: 10,
            code_value: format!("CODE-{id}"),
            is_published: true,
            expiration: "01/01/2030".to_string(),
            price: 10.0 * id as f64,
        }
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = ProductFile::new(dir.path().join("absent.json"));
        assert!(file.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_then_read_returns_same_products() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = ProductFile::new(dir.path().join("products.json"));
        let products = vec![product(1), product(2)];

        file.write(&products, 3).await.unwrap();

        assert_eq!(file.read().await.unwrap(), products);
        assert!(!file.tmp_path().exists());
    }

    #[tokio::test]
    async fn write_overwrites_previous_contents() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = ProductFile::new(dir.path().join("products.json"));

        file.write(&[product(1), product(2), product(3)], 4).await.unwrap();
        file.write(&[product(2)], 4).await.unwrap();

        assert_eq!(file.read().await.unwrap(), vec![product(2)]);
    }

    #[tokio::test]
    async fn malformed_file_is_a_decode_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("products.json");
        std::fs::write(&path, "{not json").expect("write fixture");

        let err = ProductFile::new(&path).read().await.unwrap_err();
        assert_matches!(err, StoreError::Decode { .. });
    }

    #[tokio::test]
    async fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = ProductFile::new(dir.path().join("nope").join("products.json"));

        let err = file.write(&[product(1)], 2).await.unwrap_err();
        assert_matches!(err, StoreError::Write { .. });
    }

    #[tokio::test]
    async fn next_id_is_saved_alongside_products() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = ProductFile::new(dir.path().join("products.json"));
        assert_eq!(file.read_next_id().await.unwrap(), None);

        file.write(&[product(1)], 5).await.unwrap();

        assert_eq!(file.read_next_id().await.unwrap(), Some(5));
        assert!(dir.path().join("products.json.next_id").exists());
    }
}

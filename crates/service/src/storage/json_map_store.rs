use std::{collections::BTreeMap, io::ErrorKind, marker::PhantomData, path::{Path, PathBuf}};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;

use crate::errors::ServiceError;

/// Generic JSON file-backed map.
///
/// Reads and writes a whole `BTreeMap<K, V>` as one JSON object, pretty
/// printed with 4-space indentation. Every write replaces the file contents.
pub struct JsonMapStore<K, V> {
    file_path: PathBuf,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Clone for JsonMapStore<K, V> {
    fn clone(&self) -> Self { Self { file_path: self.file_path.clone(), _entries: PhantomData } }
}

impl<K, V> JsonMapStore<K, V>
where
    K: Ord + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into(), _entries: PhantomData }
    }

    pub fn path(&self) -> &Path { &self.file_path }

    /// Read the whole map.
    /// - `Ok(None)`: the file does not exist
    /// - `Err(Json)`: the file exists but is not a JSON object of the right shape
    /// - `Err(Io)`: any other read failure
    pub async fn read(&self) -> Result<Option<BTreeMap<K, V>>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ServiceError::io(&self.file_path, e)),
        };
        let map = serde_json::from_slice(&bytes).map_err(|e| ServiceError::Json(e.to_string()))?;
        Ok(Some(map))
    }

    /// Overwrite the file with `map`, creating parent directories as needed.
    pub async fn write(&self, map: &BTreeMap<K, V>) -> Result<(), ServiceError> {
        let data = to_pretty_json(map)?;
        common::env::ensure_parent_dir(&self.file_path)
            .await
            .map_err(|e| ServiceError::io(&self.file_path, e))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::io(&self.file_path, e))?;
        Ok(())
    }
}

/// Encode with 4-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ServiceError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser).map_err(|e| ServiceError::Json(e.to_string()))?;
    Ok(buf)
}

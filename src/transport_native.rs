//! Filesystem transport for the CLI
//!
//! Accepts plain paths and `file://` URIs. Network schemes are rejected:
//! the CLI works on a local copy of the coordinate file.

use std::future::Future;

use tracing::debug;

use crate::core::{Transport, TransportError};

pub struct FileTransport;

impl FileTransport {
    fn resolve(uri: &str) -> Result<&str, TransportError> {
        if let Some(path) = uri.strip_prefix("file://") {
            return Ok(path);
        }
        match uri.split_once("://") {
            Some(_) => Err(TransportError::UnsupportedScheme(uri.to_string())),
            None => Ok(uri),
        }
    }
}

impl Transport for FileTransport {
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> {
        let path = Self::resolve(uri).map(str::to_string);
        async move {
            let path = path?;
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| TransportError::Io { path: path.clone(), source })?;
            debug!(path = %path, bytes = bytes.len(), "Read dataset file");
            Ok(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LoadError, PointCloudLoader};

    fn temp_file(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("scatter3d-{}-{name}", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn resolve_schemes() {
        assert_eq!(FileTransport::resolve("data/tsne.json").unwrap(), "data/tsne.json");
        assert_eq!(FileTransport::resolve("file:///tmp/a.json").unwrap(), "/tmp/a.json");
        assert!(matches!(
            FileTransport::resolve("https://example.com/a.json"),
            Err(TransportError::UnsupportedScheme(_))
        ));
    }

    #[tokio::test]
    async fn loads_from_disk() {
        let path = temp_file("ok.json", r#"[{"x": 1, "y": 2, "z": 3, "name": "bulbasaur"}]"#);
        let loader = PointCloudLoader::new(FileTransport);

        let ds = loader.load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.get(0).unwrap().label, "bulbasaur");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_transport_error() {
        let loader = PointCloudLoader::new(FileTransport);
        let err = loader.load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(TransportError::Io { .. })));
    }
}

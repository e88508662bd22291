//! Dataset loader
//!
//! Fetches the coordinate file through a `Transport` and validates every
//! element before handing out a `Dataset`. Either the whole document is
//! accepted or nothing is.

use std::future::Future;

use serde_json::Value;
use tracing::{debug, info, trace, warn};

use super::error::{LoadError, MalformedDataError, TransportError};
use super::point::{Dataset, Point3D};

/// Source of raw dataset bytes (browser fetch, filesystem, test double)
pub trait Transport {
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>>;
}

/// Fetch-then-validate pipeline with a single suspension point
pub struct PointCloudLoader<T> {
    transport: T,
}

impl<T: Transport> PointCloudLoader<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch `uri` once and parse it. No caching, no retry.
    pub async fn load(&self, uri: &str) -> Result<Dataset, LoadError> {
        info!(uri, "Fetching dataset");

        let bytes = self.transport.fetch(uri).await.map_err(|e| {
            warn!(uri, error = %e, "Dataset fetch failed");
            e
        })?;
        debug!(uri, bytes = bytes.len(), "Dataset fetched");

        let dataset = parse_dataset(&bytes).map_err(|e| {
            warn!(uri, error = %e, "Dataset rejected");
            e
        })?;

        info!(uri, points = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }
}

/// Parse and validate `[{"x": .., "y": .., "z": .., "name": ..}, ...]`
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, MalformedDataError> {
    let json: Value =
        serde_json::from_slice(bytes).map_err(|e| MalformedDataError::Syntax(e.to_string()))?;

    let elements = json
        .as_array()
        .ok_or(MalformedDataError::NotAnArray { found: json_kind(&json) })?;

    let points = elements
        .iter()
        .enumerate()
        .map(|(index, element)| parse_point(index, element))
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::new(points)
}

fn parse_point(index: usize, element: &Value) -> Result<Point3D, MalformedDataError> {
    let object = element.as_object().ok_or(MalformedDataError::NotAnObject {
        index,
        found: json_kind(element),
    })?;

    let field = |name: &'static str| {
        object
            .get(name)
            .ok_or(MalformedDataError::MissingField { index, field: name })
    };
    let number = |name: &'static str| -> Result<f64, MalformedDataError> {
        let value = field(name)?;
        value.as_f64().ok_or(MalformedDataError::WrongType {
            index,
            field: name,
            expected: "a number",
            found: json_kind(value),
        })
    };

    let x = number("x")?;
    let y = number("y")?;
    let z = number("z")?;

    let name = field("name")?;
    let label = name.as_str().ok_or(MalformedDataError::WrongType {
        index,
        field: "name",
        expected: "a string",
        found: json_kind(name),
    })?;
    if label.is_empty() {
        return Err(MalformedDataError::EmptyLabel { index });
    }

    trace!(index, x, y, z, label, "Point parsed");
    Ok(Point3D { x, y, z, label: label.to_string() })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::ready;

    /// Resolves immediately from an in-memory map
    struct MemoryTransport {
        files: HashMap<String, Vec<u8>>,
    }

    impl MemoryTransport {
        fn with(uri: &str, body: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(uri.to_string(), body.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Transport for MemoryTransport {
        fn fetch(&self, uri: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> {
            ready(self.files.get(uri).cloned().ok_or_else(|| TransportError::Status {
                uri: uri.to_string(),
                status: 404,
            }))
        }
    }

    const TWO_POINTS: &str = r#"[
        {"x": 1, "y": 2, "z": 3, "name": "bulbasaur"},
        {"x": 4, "y": 5, "z": 6, "name": "charmander"}
    ]"#;

    #[tokio::test]
    async fn test_load_preserves_order() {
        let loader = PointCloudLoader::new(MemoryTransport::with("tsne_data.json", TWO_POINTS));
        let ds = loader.load("tsne_data.json").await.unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(0).unwrap().label, "bulbasaur");
        assert_eq!(ds.get(1).unwrap().label, "charmander");
        assert_eq!(ds.get(1).unwrap().position(), [4.0, 5.0, 6.0]);
    }

    #[tokio::test]
    async fn test_load_transport_failure() {
        let loader = PointCloudLoader::new(MemoryTransport::with("a.json", TWO_POINTS));
        let err = loader.load("missing.json").await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Transport(TransportError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_load_malformed_has_no_partial_dataset() {
        let body = r#"[{"x": 1, "y": 2, "z": 3, "name": "a"}, {"x": 1, "y": 2, "name": "b"}]"#;
        let loader = PointCloudLoader::new(MemoryTransport::with("d.json", body));
        let err = loader.load("d.json").await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Malformed(MalformedDataError::MissingField { index: 1, field: "z" })
        ));
    }

    #[test]
    fn test_parse_large_input_keeps_length_and_order() {
        let body = format!(
            "[{}]",
            (0..500)
                .map(|i| format!(r#"{{"x": {i}.5, "y": -{i}, "z": 0, "name": "p{i}"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let ds = parse_dataset(body.as_bytes()).unwrap();
        assert_eq!(ds.len(), 500);
        for (i, p) in ds.iter().enumerate() {
            assert_eq!(p.label, format!("p{i}"));
            assert_eq!(p.x, i as f64 + 0.5);
        }
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_dataset(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let ds = parse_dataset(br#"[{"x": 0, "y": 0, "z": 0, "name": "a", "cluster": 7}]"#).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_dataset(br#"{"points": []}"#).unwrap_err();
        assert_eq!(err, MalformedDataError::NotAnArray { found: "an object" });
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            parse_dataset(b"[{\"x\": 1,").unwrap_err(),
            MalformedDataError::Syntax(_)
        ));
    }

    #[test]
    fn test_parse_rejects_non_object_element() {
        let err = parse_dataset(b"[[1, 2, 3]]").unwrap_err();
        assert_eq!(err, MalformedDataError::NotAnObject { index: 0, found: "an array" });
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = parse_dataset(br#"[{"x": "1", "y": 2, "z": 3, "name": "a"}]"#).unwrap_err();
        assert_eq!(
            err,
            MalformedDataError::WrongType {
                index: 0,
                field: "x",
                expected: "a number",
                found: "a string",
            }
        );

        let err = parse_dataset(br#"[{"x": 1, "y": 2, "z": 3, "name": 25}]"#).unwrap_err();
        assert_eq!(
            err,
            MalformedDataError::WrongType {
                index: 0,
                field: "name",
                expected: "a string",
                found: "a number",
            }
        );

        let err = parse_dataset(br#"[{"x": 1, "y": null, "z": 3, "name": "a"}]"#).unwrap_err();
        assert!(matches!(err, MalformedDataError::WrongType { field: "y", found: "null", .. }));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let err = parse_dataset(br#"[{"x": 1, "y": 2, "z": 3, "name": ""}]"#).unwrap_err();
        assert_eq!(err, MalformedDataError::EmptyLabel { index: 0 });
    }
}

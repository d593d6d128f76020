//! Reads the statement document from disk.

use crate::error::LoadError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Reads `path` as UTF-8 JSON and returns its top-level object.
///
/// Every failure is reported as a [`LoadError`] variant; this function never
/// panics. An empty object is a valid result and means there is nothing to
/// render.
pub fn load(path: impl AsRef<Path>) -> Result<Map<String, Value>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    let value: Value = serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => {
            log::debug!("Loaded {} top-level field(s) from {}", map.len(), path.display());
            Ok(map)
        }
        _ => Err(LoadError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn round_trips_well_formed_documents() {
        let source = json!({
            "alumno": "Juan Perez",
            "costo_total": 12500.5,
            "num_cuotas": 24,
            "historial_pagos": [
                { "n": 1, "año": 2024, "concepto": "Matrícula", "monto": 350.0 }
            ],
            "deudas": []
        });
        let file = write_temp(&source.to_string());

        let loaded = load(file.path()).unwrap();
        assert_eq!(Value::Object(loaded), source);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("reporte.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_temp("{ \"alumno\": ");
        assert!(matches!(load(file.path()), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let file = write_temp("[1, 2, 3]");
        assert!(matches!(load(file.path()), Err(LoadError::NotAnObject { .. })));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap();
        assert!(matches!(load(file.path()), Err(LoadError::Io { .. })));
    }

    #[test]
    fn directories_are_not_loadable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path()).is_err());
    }

    #[test]
    fn empty_object_loads_as_empty_mapping() {
        let file = write_temp("{}");
        assert!(load(file.path()).unwrap().is_empty());
    }
}

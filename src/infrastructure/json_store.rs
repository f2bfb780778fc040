// JSON file output
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `value` as pretty-printed JSON (2-space indent), replacing `path`.
pub fn save_to_json<T: Serialize>(value: &T, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_to_json_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        save_to_json(&json!({"label": "閾值"}), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"label\": \"閾值\"\n}");
    }

    #[test]
    fn test_save_to_json_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = save_to_json(&json!({}), &path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

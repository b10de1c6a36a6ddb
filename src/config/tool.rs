use crate::image::io::LoadMode;
use crate::transform::TransformKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of `apply_transform`.
///
/// ```json
/// {
///   "input": "photo.jpg",
///   "load_mode": "color",
///   "transform": { "kind": "edge_detect", "low": 50, "high": 150 },
///   "output": { "image": "edges.png", "report_json": "report.json" }
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct ToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub load_mode: LoadMode,
    pub transform: TransformKind,
    pub output: ToolOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ToolOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<ToolConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<ToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"{
                "input": "in.bmp",
                "load_mode": "grayscale",
                "transform": { "kind": "edge_detect", "low": 20, "high": 60 },
                "output": { "image": "out.png", "report_json": "r.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("in.bmp"));
        assert_eq!(cfg.load_mode, LoadMode::Grayscale);
        assert_eq!(cfg.transform, TransformKind::EdgeDetect { low: 20, high: 60 });
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn optional_fields_default() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "transform": { "kind": "hsv_recode" },
                "output": { "image": "out.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.load_mode, LoadMode::Color);
        assert_eq!(cfg.transform, TransformKind::HsvRecode);
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn missing_output_is_an_error() {
        let err = parse_config(r#"{"input": "a.png", "transform": {"kind": "grayscale"}}"#)
            .unwrap_err();
        assert!(err.contains("output"), "{err}");
    }
}

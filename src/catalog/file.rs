//! Loading custom catalogs from YAML or JSON files.

use super::validation::Validatable;
use crate::error::{CatalogErrorKind, PostureError, Result};
use crate::model::Catalog;
use std::path::Path;

/// Load and validate a catalog from a YAML or JSON file.
///
/// The extension selects the parser. The loaded catalog is run through
/// [`Validatable::validate`]; any issue fails the load.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| PostureError::io(path, e))?;
    let path_display = path.display().to_string();

    let catalog: Catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|e| {
            PostureError::catalog(
                format!("at {path_display}"),
                CatalogErrorKind::InvalidYaml(e.to_string()),
            )
        })?,
        Some("json") => serde_json::from_str(&content).map_err(|e| {
            PostureError::catalog(
                format!("at {path_display}"),
                CatalogErrorKind::InvalidJson(e.to_string()),
            )
        })?,
        _ => {
            return Err(PostureError::catalog(
                format!("at {path_display}"),
                CatalogErrorKind::UnknownFormat,
            ));
        }
    };

    let issues = catalog.validate();
    if !issues.is_empty() {
        let joined = issues
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PostureError::catalog(
            format!("at {path_display}"),
            CatalogErrorKind::Invalid(joined),
        ));
    }

    tracing::debug!(
        path = %path_display,
        categories = catalog.categories.len(),
        questions = catalog.question_count(),
        "Loaded custom catalog"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const MINIMAL_CATALOG_YAML: &str = "\
categories:
  - key: technical
    name: Technical
    weight: 1.0
    questions:
      - id: t1
        text: \"Is there a firewall?\"
        points: 10
      - id: t2
        text: \"Are backups taken?\"
        points: 20
";

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_load_yaml_catalog() {
        let file = write_temp(".yaml", MINIMAL_CATALOG_YAML);
        let catalog = load_catalog(file.path()).expect("load catalog");
        assert_eq!(catalog.question_count(), 2);
        assert_eq!(catalog.categories[0].key, "technical");
    }

    #[test]
    fn test_load_rejects_invalid_weights() {
        let yaml = MINIMAL_CATALOG_YAML.replace("weight: 1.0", "weight: 0.5");
        let file = write_temp(".yaml", &yaml);
        let err = load_catalog(file.path()).unwrap_err();
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_temp(".toml", "whatever");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, PostureError::Io { .. }));
    }
}

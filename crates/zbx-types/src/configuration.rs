//! Configuration import/export schemas.

use serde::Serialize;

/// Formats accepted by `configuration.export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xml,
    Json,
    Yaml,
    Raw,
}

/// Formats accepted by `configuration.import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Xml,
    Json,
    Yaml,
}

/// Objects to export, by id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<Vec<u64>>,
    #[serde(rename = "mediaTypes", skip_serializing_if = "Option::is_none")]
    pub media_types: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_groups: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationExport {
    pub format: ExportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prettyprint: Option<bool>,
    pub options: ExportOptions,
}

/// How one class of objects is treated on import. Unset flags fall back to
/// the server default (`false`).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ImportRule {
    #[serde(rename = "createMissing", skip_serializing_if = "Option::is_none")]
    pub create_missing: Option<bool>,
    #[serde(rename = "updateExisting", skip_serializing_if = "Option::is_none")]
    pub update_existing: Option<bool>,
    #[serde(rename = "deleteMissing", skip_serializing_if = "Option::is_none")]
    pub delete_missing: Option<bool>,
}

impl ImportRule {
    /// Create missing objects and update existing ones.
    #[must_use]
    pub fn upsert() -> Self {
        Self {
            create_missing: Some(true),
            update_existing: Some(true),
            delete_missing: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportRules {
    #[serde(rename = "discoveryRules", skip_serializing_if = "Option::is_none")]
    pub discovery_rules: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphs: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_groups: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub httptests: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<ImportRule>,
    #[serde(rename = "mediaTypes", skip_serializing_if = "Option::is_none")]
    pub media_types: Option<ImportRule>,
    #[serde(rename = "templateDashboards", skip_serializing_if = "Option::is_none")]
    pub template_dashboards: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_groups: Option<ImportRule>,
    #[serde(rename = "templateLinkage", skip_serializing_if = "Option::is_none")]
    pub template_linkage: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<ImportRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggers: Option<ImportRule>,
    #[serde(rename = "valueMaps", skip_serializing_if = "Option::is_none")]
    pub value_maps: Option<ImportRule>,
}

/// Parameters for both `configuration.import` and
/// `configuration.importcompare`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationImport {
    pub format: ImportFormat,
    pub source: String,
    pub rules: ImportRules,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_export_request_shape() {
        let export = ConfigurationExport {
            format: ExportFormat::Yaml,
            prettyprint: None,
            options: ExportOptions {
                hosts: Some(vec![10084]),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(export).unwrap(),
            json!({"format": "yaml", "options": {"hosts": [10084]}})
        );
    }

    #[test]
    fn test_import_rules_use_api_names() {
        let import = ConfigurationImport {
            format: ImportFormat::Json,
            source: "{}".to_string(),
            rules: ImportRules {
                template_linkage: Some(ImportRule {
                    create_missing: Some(true),
                    ..Default::default()
                }),
                value_maps: Some(ImportRule::upsert()),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(import).unwrap();

        assert_eq!(value["rules"]["templateLinkage"], json!({"createMissing": true}));
        assert_eq!(
            value["rules"]["valueMaps"],
            json!({"createMissing": true, "updateExisting": true})
        );
    }
}

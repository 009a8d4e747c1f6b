//! Generator options and the template properties derived from them.

use crate::config::{ImportTable, ResolverConfig, TypeMappingTable};
use crate::error::ConfigError;
use cxxmodel_schema::TypeKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Default project name.
pub const DEFAULT_PROJECT_NAME: &str = "cpp-modern-json";

/// Default package name.
pub const DEFAULT_PACKAGE_NAME: &str = "org.openapitools";

/// Sub-package holding the generated models.
pub const MODELS_FOLDER: &str = "models";

/// nlohmann/json version referenced by the generated CMake project.
pub const DEFAULT_NLOHMANN_JSON_VERSION: &str = "3.9.1";

/// User-facing generator options.
///
/// ```toml
/// project_name = "petstore"
/// package_name = "com.acme.petstore"
///
/// [type_mappings]
/// date-time = "::acme::Timestamp"
///
/// [import_mappings]
/// "::acme::Timestamp" = "#include <acme/timestamp.h>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Project name, used by the CMake project.
    pub project_name: String,
    /// Dotted package name.
    pub package_name: String,
    /// Dotted model package; `<package_name>.models` when absent.
    pub model_package: Option<String>,
    /// nlohmann/json version.
    pub nlohmann_json_version: String,
    /// Overrides for vocabulary keys.
    pub type_mappings: BTreeMap<String, String>,
    /// Aliases from model names to external types.
    pub model_mappings: BTreeMap<String, String>,
    /// Overrides and additions for include directives.
    pub import_mappings: BTreeMap<String, String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            model_package: None,
            nlohmann_json_version: DEFAULT_NLOHMANN_JSON_VERSION.to_string(),
            type_mappings: BTreeMap::new(),
            model_mappings: BTreeMap::new(),
            import_mappings: BTreeMap::new(),
        }
    }
}

impl GeneratorOptions {
    /// Parses and validates options from TOML.
    ///
    /// # Errors
    /// Returns `ConfigError` if the TOML is malformed or validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads, parses and validates options from a TOML file.
    ///
    /// # Errors
    /// Returns `ConfigError` if reading, parsing or validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("loading generator options from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Returns the model package, falling back to `<package_name>.models`.
    #[must_use]
    pub fn model_package(&self) -> String {
        self.model_package
            .clone()
            .unwrap_or_else(|| format!("{}.{MODELS_FOLDER}", self.package_name))
    }

    /// Validates packages and mapping overrides.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_package(&self.package_name)?;
        validate_package(&self.model_package())?;

        for (key, target) in &self.type_mappings {
            if TypeKey::from_name(key).is_none() {
                return Err(ConfigError::UnknownTypeKey { key: key.clone() });
            }
            check_entry("type_mappings", key, target)?;
        }
        for (key, target) in &self.model_mappings {
            check_entry("model_mappings", key, target)?;
        }
        for key in self.import_mappings.keys() {
            // an empty directive suppresses the include, only the key must be set
            if key.is_empty() {
                return Err(ConfigError::EmptyMapping {
                    table: "import_mappings".to_string(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Builds the resolver configuration: defaults, then overrides.
    ///
    /// # Errors
    /// Returns `ConfigError` if validation fails.
    pub fn resolver_config(&self) -> Result<ResolverConfig, ConfigError> {
        self.validate()?;

        let mut type_mappings = TypeMappingTable::cpp();
        for (key, target) in &self.type_mappings {
            if let Some(key) = TypeKey::from_name(key) {
                type_mappings.insert(key, target.clone());
            }
        }
        for (model, target) in &self.model_mappings {
            type_mappings.insert_model(model.clone(), target.clone());
        }

        let mut import_mappings = ImportTable::cpp();
        for (type_name, directive) in &self.import_mappings {
            import_mappings.insert(type_name.clone(), directive.clone());
        }

        Ok(ResolverConfig::new(type_mappings, import_mappings))
    }

    /// Derives the values passed to the host's templates.
    #[must_use]
    pub fn template_properties(&self) -> TemplateProperties {
        let model_package = self.model_package();
        TemplateProperties {
            project_name: self.project_name.clone(),
            package_name: self.package_name.clone(),
            nlohmann_json_version: self.nlohmann_json_version.clone(),
            model_namespace: model_package.replace('.', "::"),
            model_namespace_declarations: model_package.split('.').map(String::from).collect(),
            model_header_guard_prefix: model_package.replace('.', "_").to_uppercase(),
            package_path: package_to_path(&self.package_name),
            model_path: package_to_path(&model_package),
            model_package,
        }
    }
}

/// Values derived from [`GeneratorOptions`] for template rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProperties {
    /// Project name.
    pub project_name: String,
    /// Dotted package name.
    pub package_name: String,
    /// Dotted model package.
    pub model_package: String,
    /// nlohmann/json version.
    pub nlohmann_json_version: String,
    /// `org::openapitools::models`
    pub model_namespace: String,
    /// `["org", "openapitools", "models"]`
    pub model_namespace_declarations: Vec<String>,
    /// `ORG_OPENAPITOOLS_MODELS`
    pub model_header_guard_prefix: String,
    /// `org/openapitools`
    pub package_path: String,
    /// `org/openapitools/models`
    pub model_path: String,
}

/// Converts a dotted package to a relative path.
#[must_use]
pub fn package_to_path(package: &str) -> String {
    package.replace('.', "/")
}

fn validate_package(package: &str) -> Result<(), ConfigError> {
    if package.is_empty() {
        return Err(ConfigError::invalid_package(package, "empty package name"));
    }
    for segment in package.split('.') {
        let mut chars = segment.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::invalid_package(
                package,
                format!("segment '{segment}' is not a C++ identifier"),
            ));
        }
        if crate::naming::is_reserved_word(segment) {
            return Err(ConfigError::invalid_package(
                package,
                format!("segment '{segment}' is a C++ keyword"),
            ));
        }
    }
    Ok(())
}

fn check_entry(table: &str, key: &str, target: &str) -> Result<(), ConfigError> {
    if key.is_empty() || target.is_empty() {
        return Err(ConfigError::EmptyMapping {
            table: table.to_string(),
            key: key.to_string(),
        });
    }
    Ok(())
}

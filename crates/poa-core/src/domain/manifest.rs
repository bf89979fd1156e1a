//! JSON documents written into a new project.
//!
//! Field order in the structs is the field order on disk.

use serde::Serialize;

use crate::domain::{error::DomainError, project_name::ProjectName};

/// A document serialized to a file in the project root.
pub trait ManifestDocument: Serialize {
    /// File name relative to the project root.
    fn file_name(&self) -> &'static str;

    /// Compact JSON text.
    fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| DomainError::ManifestSerialization {
            file: self.file_name(),
            reason: e.to_string(),
        })
    }
}

/// `package.json` for a new application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: PackageScripts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageScripts {
    pub start: String,
    pub build: String,
    pub test: String,
    pub eject: String,
    pub format: String,
}

impl PackageManifest {
    pub const FILE_NAME: &'static str = "package.json";

    pub fn for_project(name: &ProjectName) -> Self {
        Self {
            name: name.to_string(),
            version: "0.0.0".into(),
            private: true,
            scripts: PackageScripts::default(),
        }
    }
}

impl Default for PackageScripts {
    fn default() -> Self {
        Self {
            start: "react-scripts start".into(),
            build: "react-scripts start build".into(),
            test: "react-scripts test --env=jsdom".into(),
            eject: "react-scripts eject".into(),
            format: "prettier --write *.{js,css,json,md} '**/*.{js,css,json,md}'".into(),
        }
    }
}

impl ManifestDocument for PackageManifest {
    fn file_name(&self) -> &'static str {
        Self::FILE_NAME
    }
}

/// `.prettierrc.json` formatter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    pub print_width: u32,
    pub single_quote: bool,
}

impl PrettierConfig {
    pub const FILE_NAME: &'static str = ".prettierrc.json";
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            print_width: 100,
            single_quote: true,
        }
    }
}

impl ManifestDocument for PrettierConfig {
    fn file_name(&self) -> &'static str {
        Self::FILE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_manifest_json_is_byte_exact() {
        let manifest = PackageManifest::for_project(&ProjectName::from_arg("myapp"));
        let expected = concat!(
            r#"{"name":"myapp","version":"0.0.0","private":true,"scripts":{"#,
            r#""start":"react-scripts start","#,
            r#""build":"react-scripts start build","#,
            r#""test":"react-scripts test --env=jsdom","#,
            r#""eject":"react-scripts eject","#,
            r#""format":"prettier --write *.{js,css,json,md} '**/*.{js,css,json,md}'"}}"#,
        );
        assert_eq!(manifest.to_json().unwrap(), expected);
    }

    #[test]
    fn prettier_config_json_is_byte_exact() {
        assert_eq!(
            PrettierConfig::default().to_json().unwrap(),
            r#"{"printWidth":100,"singleQuote":true}"#
        );
    }

    #[test]
    fn default_name_lands_in_manifest() {
        let manifest = PackageManifest::for_project(&ProjectName::from_arg(""));
        assert_eq!(manifest.name, "poa-app");
    }

    #[test]
    fn file_names() {
        assert_eq!(PrettierConfig::default().file_name(), ".prettierrc.json");
        let manifest = PackageManifest::for_project(&ProjectName::from_arg("x"));
        assert_eq!(manifest.file_name(), "package.json");
    }
}

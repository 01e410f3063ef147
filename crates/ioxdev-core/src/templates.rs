//! Plugin descriptor templates bundled with the CLI
//!
//! The manifest and template bodies are compiled into the binary; listing
//! templates performs no I/O. Installing copies the chosen resource
//! byte-for-byte into the workspace under its own base name.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Embedded template resources
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
#[prefix = ""]
struct EmbeddedTemplates;

/// One selectable template from the bundled manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateOption {
    /// Human-readable label shown in the picker
    pub label: String,
    /// Resource path relative to the bundled template root
    pub path: String,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    templates: Vec<TemplateOption>,
}

/// Catalog of the templates shipped with this build
#[derive(Debug)]
pub struct TemplateCatalog {
    options: Vec<TemplateOption>,
}

impl TemplateCatalog {
    /// Load the manifest compiled into the binary.
    pub fn load() -> Result<Self> {
        const MANIFEST: &str = include_str!("../templates/manifest.yaml");
        let manifest: Manifest = serde_yaml_ng::from_str(MANIFEST)?;
        Ok(Self {
            options: manifest.templates,
        })
    }

    /// All selectable templates, in manifest order
    pub fn options(&self) -> &[TemplateOption] {
        &self.options
    }

    /// Look up a template by its label
    pub fn find(&self, label: &str) -> Option<&TemplateOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// Copy `option`'s resource into `dest_dir` under its own base name.
    ///
    /// An existing destination file is overwritten silently. Returns the
    /// destination path on success.
    pub fn install(&self, option: &TemplateOption, dest_dir: &Path) -> Result<PathBuf> {
        let source = EmbeddedTemplates::get(&option.path).ok_or_else(|| Error::UnknownTemplate {
            label: option.label.clone(),
        })?;

        let file_name = Path::new(&option.path)
            .file_name()
            .ok_or_else(|| Error::UnknownTemplate {
                label: option.label.clone(),
            })?;

        let dest = dest_dir.join(file_name);
        std::fs::write(&dest, source.data.as_ref())
            .map_err(|e| Error::template_copy(option.label.clone(), e.to_string()))?;
        Ok(dest)
    }
}

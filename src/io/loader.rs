//! Module set loading
//!
//! Reads resolved modules from a JSON document:
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "id": "example.com/app/service",
//!       "imports": ["example.com/app/base"],
//!       "declarations": [
//!         {"kind": "type", "name": "Handler", "exported": true, "type_kind": "contract"},
//!         {"kind": "function", "name": "New"}
//!       ],
//!       "types": {
//!         "contracts": [{"name": "Handler", "methods": [{"name": "Handle", "signature": "(Request) Response"}]}],
//!         "concretes": []
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Producing this document (parsing source, resolving imports, deciding
//! which types are contracts) is the job of a language front end.

use crate::core::{Error, Module, ModuleSet, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ModuleSetDocument {
    #[serde(default)]
    modules: Vec<Module>,
}

/// Load a module set document from disk
pub fn load_module_set(path: &Path) -> Result<ModuleSet> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read module set", path, e))?;
    let modules = parse_module_set(&contents).map_err(|e| match e {
        Error::Json(json) => Error::parse(path, json.to_string()),
        other => other,
    })?;
    debug!(path = %path.display(), modules = modules.len(), "Loaded module set");
    Ok(modules)
}

/// Parse a module set document; duplicate module ids are rejected
pub fn parse_module_set(contents: &str) -> Result<ModuleSet> {
    let document: ModuleSetDocument = serde_json::from_str(contents)?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = document.modules.iter().find(|m| !seen.insert(&m.id)) {
        return Err(Error::Validation(format!(
            "duplicate module id `{}`",
            duplicate.id
        )));
    }

    Ok(ModuleSet::from_modules(document.modules))
}

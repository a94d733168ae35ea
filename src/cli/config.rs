use base_codec::CodecRegistry;
use std::path::PathBuf;

use crate::cli::global::GlobalArgs;

/// Loads the built-in codecs, the standard override files and `--config`.
///
/// Broken files in the standard locations only produce a warning; a broken
/// `--config` file is an error since it was asked for explicitly.
pub fn load_registry(global: &GlobalArgs) -> Result<CodecRegistry, Box<dyn std::error::Error>> {
    let quiet = global.quiet;
    let mut registry = CodecRegistry::load_with_overrides_using(|warning| {
        if !quiet {
            eprintln!("Warning: {}", warning);
        }
    })?;

    if let Some(path) = &global.config {
        let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
        let extra = CodecRegistry::load_from_file(&expanded)
            .map_err(|e| format!("Cannot load config '{}': {}", path, e))?;
        registry.merge(extra);
    }

    Ok(registry)
}


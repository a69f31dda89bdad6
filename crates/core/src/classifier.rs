//! Maps a script path to the runtime family able to execute it

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::RuntimeFamily;

/// Recognised suffixes, checked in order. Matching is exact and
/// case-sensitive.
const FAMILY_SUFFIXES: &[(RuntimeFamily, &[&str])] = &[
    (RuntimeFamily::TypedScript, &[".ts", ".tsx", ".mts", ".cts"]),
    (RuntimeFamily::BinaryModule, &[".wasm", ".wat"]),
    (RuntimeFamily::Script, &[".js", ".mjs", ".cjs"]),
];

/// Classify a file into a runtime family by its extension
pub fn classify(file_path: impl AsRef<Path>) -> Result<RuntimeFamily> {
    let file_path = file_path.as_ref();
    tracing::trace!("Classifying file: {:?}", file_path);

    let path_str = file_path.to_string_lossy();
    for (family, suffixes) in FAMILY_SUFFIXES {
        if let Some(suffix) = suffixes.iter().find(|s| path_str.ends_with(**s)) {
            tracing::debug!("Detected {} file ({}): {:?}", family, suffix, file_path);
            return Ok(*family);
        }
    }

    tracing::debug!("Unrecognised file type: {:?}", file_path);
    Err(Error::UnknownFileType(file_path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_typed_script_extensions() {
        for file in ["file.ts", "app.tsx", "mod.mts", "lib.cts"] {
            assert_eq!(classify(file).unwrap(), RuntimeFamily::TypedScript, "{file}");
        }
    }

    #[test]
    fn test_binary_module_extensions() {
        for file in ["module.wasm", "module.wat"] {
            assert_eq!(classify(file).unwrap(), RuntimeFamily::BinaryModule, "{file}");
        }
    }

    #[test]
    fn test_script_extensions() {
        for file in ["index.js", "esm.mjs", "common.cjs"] {
            assert_eq!(classify(file).unwrap(), RuntimeFamily::Script, "{file}");
        }
    }

    #[test]
    fn test_nested_paths() {
        let path = PathBuf::from("/home/user/project/src/main.ts");
        assert_eq!(classify(&path).unwrap(), RuntimeFamily::TypedScript);
        assert_eq!(classify("types/index.d.ts").unwrap(), RuntimeFamily::TypedScript);
    }

    #[test]
    fn test_unknown_extension() {
        let err = classify("script.py").unwrap_err();
        assert!(matches!(err, Error::UnknownFileType(ref p) if p == Path::new("script.py")));
        assert_eq!(err.to_string(), "Unknown file type: script.py");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(classify("FILE.TS").is_err());
        assert!(classify("Module.WASM").is_err());
    }

    #[test]
    fn test_no_extension_and_bare_suffix_text() {
        assert!(classify("Makefile").is_err());
        assert!(classify("notts").is_err());
        assert!(classify("file.json").is_err());
    }
}

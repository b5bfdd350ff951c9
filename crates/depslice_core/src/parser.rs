use anyhow::{Context, Result};
use log::{debug, trace};
use regex::Regex;
use std::{fs, path::Path};

use crate::types::{ModuleReference, RefSyntax};

const REQUIRE_PATTERN: &str = r#"require\(['"]([^'"]+)['"]\)"#;
// The optional clause stops at quotes, `;` and line ends so a side-effect
// import cannot swallow the next statement.
const IMPORT_PATTERN: &str = r#"import\s+(?:[^'";\n]*?\s+from\s+)?['"]([^'"]+)['"]"#;
const INCLUDE_PATTERN: &str = r#"include\s+['"]([^'"]+)['"]"#;

/// Finds module references in source text.
///
/// Detection is purely syntactic: only literal quoted strings are recognized,
/// so `require('./a' + name)` or a multi-line `import { .. } from` yields
/// nothing.
pub struct ReferenceExtractor {
    patterns: Vec<(Regex, RefSyntax)>,
}

impl ReferenceExtractor {
    pub fn new() -> Result<Self> {
        let patterns = vec![
            (Regex::new(REQUIRE_PATTERN)?, RefSyntax::Require),
            (Regex::new(IMPORT_PATTERN)?, RefSyntax::Import),
            (Regex::new(INCLUDE_PATTERN)?, RefSyntax::Include),
        ];
        Ok(Self { patterns })
    }

    /// Matches of every pattern family, family by family.
    ///
    /// Duplicates are kept; de-duplication happens on resolved paths.
    pub fn extract(&self, text: &str) -> Vec<ModuleReference> {
        let mut refs = Vec::new();
        for (re, syntax) in &self.patterns {
            for caps in re.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    trace!("Found {:?} reference: '{}'", syntax, m.as_str());
                    refs.push(ModuleReference { request: m.as_str().to_string(), syntax: *syntax });
                }
            }
        }
        refs
    }

    /// Reads `file` whole and extracts its references. A read failure is an error.
    pub fn references_for(&self, file: &Path) -> Result<Vec<ModuleReference>> {
        trace!("Scanning file for references: {}", file.display());
        let src = read_lossy(file)?;
        let refs = self.extract(&src);
        debug!("Found {} references in {}", refs.len(), file.display());
        Ok(refs)
    }
}

/// Whole-file read, decoded lossily so binary files do not abort a run.
pub fn read_lossy(file: &Path) -> Result<String> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn requests(refs: &[ModuleReference]) -> Vec<&str> {
        refs.iter().map(|r| r.request.as_str()).collect()
    }

    fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_require_call() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("const db = require('./db');");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].request, "./db");
        assert_eq!(refs[0].syntax, RefSyntax::Require);
    }

    #[test]
    fn test_require_double_quotes() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract(r#"const db = require("../lib/db");"#);
        assert_eq!(requests(&refs), vec!["../lib/db"]);
    }

    #[test]
    fn test_static_import_default() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import foo from './foo';");
        assert_eq!(requests(&refs), vec!["./foo"]);
        assert_eq!(refs[0].syntax, RefSyntax::Import);
    }

    #[test]
    fn test_static_import_named() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import { bar, baz } from \"./utils\";");
        assert_eq!(requests(&refs), vec!["./utils"]);
    }

    #[test]
    fn test_side_effect_import() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import './polyfills';");
        assert_eq!(requests(&refs), vec!["./polyfills"]);
    }

    #[test]
    fn test_two_imports_on_one_line() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import a from './a'; import b from './b';");
        assert_eq!(requests(&refs), vec!["./a", "./b"]);
    }

    #[test]
    fn test_side_effect_import_before_default_import() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import './polyfills'; import App from './App';");
        assert_eq!(requests(&refs), vec!["./polyfills", "./App"]);
    }

    #[test]
    fn test_side_effect_import_on_line_before_named_import() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("import './styles.css'\nimport { h } from './h'\n");
        assert_eq!(requests(&refs), vec!["./styles.css", "./h"]);
    }

    #[test]
    fn test_include_directive() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("{{> header}}\ninclude \"partials/nav\"\n");
        assert_eq!(requests(&refs), vec!["partials/nav"]);
        assert_eq!(refs[0].syntax, RefSyntax::Include);
    }

    #[test]
    fn test_families_are_concatenated_in_fixed_order() {
        let extractor = ReferenceExtractor::new().unwrap();
        let src = "include 'c'\nimport b from './b';\nconst a = require('./a');";
        let refs = extractor.extract(src);
        assert_eq!(requests(&refs), vec!["./a", "./b", "c"]);
        let syntaxes: Vec<RefSyntax> = refs.iter().map(|r| r.syntax).collect();
        assert_eq!(syntaxes, vec![RefSyntax::Require, RefSyntax::Import, RefSyntax::Include]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.extract("require('./a');\nrequire('./a');");
        assert_eq!(requests(&refs), vec!["./a", "./a"]);
    }

    #[test]
    fn test_computed_references_are_ignored() {
        let extractor = ReferenceExtractor::new().unwrap();
        let src = "const m = require('./mods/' + name);\nconst n = require(path);\nrequire(`./x`);";
        assert!(extractor.extract(src).is_empty());
    }

    #[test]
    fn test_dynamic_import_call_is_ignored() {
        let extractor = ReferenceExtractor::new().unwrap();
        assert!(extractor.extract("const lazy = import('./lazy');").is_empty());
    }

    #[test]
    fn test_multiline_import_is_ignored() {
        let extractor = ReferenceExtractor::new().unwrap();
        assert!(extractor.extract("import {\n  a,\n  b\n} from './ab';").is_empty());
    }

    #[test]
    fn test_no_references() {
        let extractor = ReferenceExtractor::new().unwrap();
        assert!(extractor.extract("const x = 42;").is_empty());
    }

    #[test]
    fn test_references_for_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "app.js", b"const r = require('./routes');");
        let extractor = ReferenceExtractor::new().unwrap();
        let refs = extractor.references_for(&file).unwrap();
        assert_eq!(requests(&refs), vec!["./routes"]);
    }

    #[test]
    fn test_references_for_binary_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = create_test_file(temp_dir.path(), "logo.png", &[0x89, 0x50, 0x4e, 0x47, 0xff]);
        let extractor = ReferenceExtractor::new().unwrap();
        assert!(extractor.references_for(&file).unwrap().is_empty());
    }

    #[test]
    fn test_references_for_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let extractor = ReferenceExtractor::new().unwrap();
        let result = extractor.references_for(&temp_dir.path().join("gone.js"));
        assert!(result.is_err());
    }
}

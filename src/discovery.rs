//! Test-case discovery
//!
//! Discovery turns an ordered list of roots (files or directories) into the
//! ordered list of candidate test cases. It is a pure function over the
//! `FileTree` trait so the walk can be exercised against an in-memory fake
//! without touching the real filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A discovered test-case source file.
///
/// Identity is the path itself; companion files (golden file, artifacts) are
/// derived by appending a suffix to the full path, so `foo.js` pairs with
/// `foo.js.expected`, `foo.js.out` and `foo.js.err`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestCase {
    path: PathBuf,
}

impl TestCase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Golden file holding the expected stdout for this case.
    pub fn expected_path(&self) -> PathBuf {
        with_suffix(&self.path, ".expected")
    }

    /// Transient artifact capturing the parser's stdout.
    pub fn out_path(&self) -> PathBuf {
        with_suffix(&self.path, ".out")
    }

    /// Transient artifact capturing the parser's stderr.
    pub fn err_path(&self) -> PathBuf {
        with_suffix(&self.path, ".err")
    }
}

/// Append `suffix` to the full path string without replacing the extension.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    name.into()
}

// ============================================================================
// File tree abstraction
// ============================================================================

/// The two filesystem probes discovery needs.
pub trait FileTree {
    /// Whether `path` names a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Immediate entries of a directory, sorted by name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// `FileTree` backed by `std::fs`.
pub struct OsFileTree;

impl FileTree for OsFileTree {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries: Vec<PathBuf> = fs::read_dir(path)?
            .flatten()
            .map(|entry| entry.path())
            .collect();
        entries.sort();
        Ok(entries)
    }
}

// ============================================================================
// Discovery walk
// ============================================================================

/// Produce the ordered candidate list for the given roots.
///
/// A root that is itself a regular file is included iff its name ends with
/// `extension`; it is never expanded. Any other root is walked recursively,
/// collecting matching files. Roots are processed in the order given;
/// directory entries are visited in sorted order so reports are reproducible.
/// Unreadable or missing subtrees contribute nothing.
pub fn discover<T: FileTree>(tree: &T, roots: &[String], extension: &str) -> Vec<TestCase> {
    let mut cases = Vec::new();
    for root in roots {
        let path = Path::new(root);
        if tree.is_file(path) {
            if matches_extension(path, extension) {
                cases.push(TestCase::new(path));
            }
        } else {
            walk(tree, path, extension, &mut cases);
        }
    }
    tracing::debug!(roots = roots.len(), candidates = cases.len(), "discovery complete");
    cases
}

fn walk<T: FileTree>(tree: &T, dir: &Path, extension: &str, cases: &mut Vec<TestCase>) {
    let Ok(entries) = tree.read_dir(dir) else {
        return;
    };
    for entry in entries {
        if tree.is_file(&entry) {
            if matches_extension(&entry, extension) {
                cases.push(TestCase::new(entry));
            }
        } else {
            walk(tree, &entry, extension, cases);
        }
    }
}

/// Suffix match on the file name, so multi-dot extensions work too.
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    /// In-memory file tree: a set of file paths, directories implied.
    struct FakeTree {
        files: BTreeSet<PathBuf>,
    }

    impl FakeTree {
        fn new(paths: &[&str]) -> Self {
            Self {
                files: paths.iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl FileTree for FakeTree {
        fn is_file(&self, path: &Path) -> bool {
            self.files.contains(path)
        }

        fn read_dir(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
            let mut children = BTreeSet::new();
            for file in &self.files {
                if let Ok(rest) = file.strip_prefix(dir) {
                    if let Some(first) = rest.components().next() {
                        children.insert(dir.join(first.as_os_str()));
                    }
                }
            }
            if children.is_empty() {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
            }
            Ok(children.into_iter().collect())
        }
    }

    fn paths(cases: &[TestCase]) -> Vec<String> {
        cases
            .iter()
            .map(|c| c.path().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn companion_paths_append_suffixes() {
        let case = TestCase::new("js/loops/for.js");
        assert_eq!(case.expected_path(), PathBuf::from("js/loops/for.js.expected"));
        assert_eq!(case.out_path(), PathBuf::from("js/loops/for.js.out"));
        assert_eq!(case.err_path(), PathBuf::from("js/loops/for.js.err"));
    }

    #[test]
    fn file_root_is_one_candidate_not_expanded() {
        let tree = FakeTree::new(&["single.js"]);
        let cases = discover(&tree, &["single.js".to_string()], ".js");
        assert_eq!(paths(&cases), ["single.js"]);
    }

    #[test]
    fn file_root_with_wrong_extension_is_dropped() {
        let tree = FakeTree::new(&["notes.txt"]);
        let cases = discover(&tree, &["notes.txt".to_string()], ".js");
        assert!(cases.is_empty());
    }

    #[test]
    fn directory_root_is_walked_recursively_and_sorted() {
        let tree = FakeTree::new(&[
            "js/zeta.js",
            "js/alpha.js",
            "js/nested/deep/case.js",
            "js/nested/readme.md",
        ]);
        let cases = discover(&tree, &["js".to_string()], ".js");
        assert_eq!(
            paths(&cases),
            ["js/alpha.js", "js/nested/deep/case.js", "js/zeta.js"]
        );
    }

    #[test]
    fn roots_are_processed_in_the_order_given() {
        let tree = FakeTree::new(&["b/one.js", "a/two.js"]);
        let cases = discover(&tree, &["b".to_string(), "a".to_string()], ".js");
        assert_eq!(paths(&cases), ["b/one.js", "a/two.js"]);
    }

    #[test]
    fn missing_root_contributes_nothing() {
        let tree = FakeTree::new(&["js/a.js"]);
        let cases = discover(
            &tree,
            &["nowhere".to_string(), "js".to_string()],
            ".js",
        );
        assert_eq!(paths(&cases), ["js/a.js"]);
    }

    #[test]
    fn golden_files_are_not_candidates() {
        // `.expected` companions do not end in the source extension.
        let tree = FakeTree::new(&["js/a.js", "js/a.js.expected"]);
        let cases = discover(&tree, &["js".to_string()], ".js");
        assert_eq!(paths(&cases), ["js/a.js"]);
    }
}

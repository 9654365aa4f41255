use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// One `'Fq\Class' => path` pair from the class map artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMapEntry {
    pub class: String,
    pub path: PathBuf,
}

/// The Composer-generated class map, in file order.
///
/// Entry order matters downstream: namespace grouping in the emitted helper
/// preserves the first-seen ordering of this map.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    entries: Vec<ClassMapEntry>,
}

impl ClassMap {
    /// Load `vendor/composer/autoload_classmap.php` (or any artifact of the
    /// same generated shape).
    ///
    /// `base_path` is the project root: `$baseDir` concatenations resolve
    /// against it and `$vendorDir` against `<base_path>/vendor`.
    ///
    /// # Errors
    ///
    /// A missing file is the fatal precondition of the whole run and returns
    /// [`GenerateError::ClassMapMissing`]; an unreadable file returns
    /// [`GenerateError::ClassMapLoad`].
    pub fn load(path: &Path, base_path: &Path) -> Result<Self, GenerateError> {
        if !path.exists() {
            return Err(GenerateError::ClassMapMissing(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|e| GenerateError::ClassMapLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::parse(&contents, base_path))
    }

    /// Parse class map source text.
    ///
    /// The artifact is machine-generated with one entry per line, so a
    /// tolerant line scanner is enough: lines that do not look like
    /// `'Fq\\Class' => <path expr>,` (the preamble, `return array(`, the
    /// closing `);`) are skipped.
    pub fn parse(source: &str, base_path: &Path) -> Self {
        let mut entries = Vec::new();

        for line in source.lines() {
            let trimmed = line.trim();
            if !trimmed.starts_with('\'') {
                continue;
            }
            let Some((class, rest)) = read_quoted(trimmed) else {
                continue;
            };
            let Some(expr) = rest.trim_start().strip_prefix("=>") else {
                continue;
            };
            let Some(path) = resolve_path_expr(expr.trim_start(), base_path) else {
                continue;
            };
            entries.push(ClassMapEntry { class, path });
        }

        ClassMap { entries }
    }

    pub fn entries(&self) -> &[ClassMapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the class filter: keep an entry iff its class name starts with
    /// one of `namespaces` and is not listed in `rejects`. Iteration order is
    /// preserved from the map.
    pub fn filter<'a>(
        &'a self,
        namespaces: &[String],
        rejects: &[String],
    ) -> Vec<&'a ClassMapEntry> {
        self.entries
            .iter()
            .filter(|entry| namespaces.iter().any(|ns| entry.class.starts_with(ns.as_str())))
            .filter(|entry| !rejects.iter().any(|r| r == &entry.class))
            .collect()
    }
}

/// Split a fully-qualified class name into (namespace, short name).
///
/// A name without a separator lives in the global namespace and yields an
/// empty namespace part.
pub fn split_class(class: &str) -> (&str, &str) {
    match class.rsplit_once('\\') {
        Some((namespace, short)) => (namespace, short),
        None => ("", class),
    }
}

/// Read a PHP single-quoted string starting at `s[0] == '\''`.
///
/// Single-quote semantics: `\\` and `\'` unescape, any other backslash is
/// literal. Returns the unescaped contents and the remainder after the
/// closing quote, or `None` if the quote never closes.
fn read_quoted(s: &str) -> Option<(String, &str)> {
    let inner = s.strip_prefix('\'')?;
    let mut out = String::new();
    let mut chars = inner.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => return Some((out, &inner[i + 1..])),
            '\\' => match chars.peek() {
                Some(&(_, next @ ('\\' | '\''))) => {
                    chars.next();
                    out.push(next);
                }
                _ => out.push('\\'),
            },
            _ => out.push(c),
        }
    }
    None
}

/// Resolve the right-hand side of a class map entry.
///
/// Three shapes occur in the artifact:
/// `$baseDir . '/relative.php'`, `$vendorDir . '/relative.php'`, and a plain
/// quoted absolute path.
fn resolve_path_expr(expr: &str, base_path: &Path) -> Option<PathBuf> {
    let (root, rest) = if let Some(rest) = expr.strip_prefix("$baseDir") {
        (base_path.to_path_buf(), rest)
    } else if let Some(rest) = expr.strip_prefix("$vendorDir") {
        (base_path.join("vendor"), rest)
    } else if expr.starts_with('\'') {
        let (path, _) = read_quoted(expr)?;
        return Some(PathBuf::from(path));
    } else {
        return None;
    };

    let after_dot = rest.trim_start().strip_prefix('.')?.trim_start();
    let (relative, _) = read_quoted(after_dot)?;
    Some(root.join(relative.trim_start_matches('/')))
}

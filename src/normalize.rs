//! Path normalization and document reindexing.
//!
//! Raw documents key every collection by absolute file-system paths. This
//! module rewrites each path-bearing field into a stable, root-relative,
//! extension-free identifier so the document's cross-reference graph stays
//! coherent after the keys are renamed.

use std::collections::HashMap;

use crate::types::Document;

/// Matches input roots against candidate strings as literal substrings.
///
/// Each root is directory-terminated on construction; the earliest
/// occurrence of any root in a candidate wins, ties broken by root order.
#[derive(Debug, Clone)]
pub struct RootMatcher {
    roots: Vec<String>,
}

impl RootMatcher {
    /// Build a matcher over the extraction's input root paths.
    pub fn new(input_paths: &[String]) -> Self {
        let roots = input_paths.iter().map(|p| return ensure_dir_terminated(p)).collect();
        return Self { roots };
    }

    /// Normalize one identifier: strip the first matched root occurrence,
    /// convert backslash separators, strip the module suffix.
    /// Non-path-shaped inputs pass through unchanged.
    pub fn normalize(&self, raw: &str) -> String {
        let stripped = self.strip_first_root_occurrence(raw);
        let forward = stripped.replace('\\', "/");
        return strip_module_suffix(&forward);
    }

    /// Remove the earliest occurrence of any root from the candidate.
    fn strip_first_root_occurrence(&self, raw: &str) -> String {
        let mut earliest: Option<(usize, usize)> = None;
        for root in &self.roots {
            if root.is_empty() {
                continue;
            }
            if let Some(pos) = raw.find(root.as_str()) {
                let replaces = match earliest {
                    Some((best_pos, _)) => pos < best_pos,
                    None => true,
                };
                if replaces {
                    earliest = Some((pos, root.len()));
                }
            }
        }

        let Some((pos, len)) = earliest else {
            return raw.to_string();
        };
        let mut out = String::with_capacity(raw.len().saturating_sub(len));
        out.push_str(raw.get(..pos).unwrap_or(""));
        out.push_str(raw.get(pos.saturating_add(len)..).unwrap_or(""));
        return out;
    }
}

/// Rewrite every path-bearing field of the document in place.
///
/// `files` and `classes` are rebuilt from a snapshot under normalized keys
/// (last write wins if two raw keys normalize alike); `classitems` and
/// `warnings` are rewritten in place, preserving order.
pub fn normalize_document(document: &mut Document, input_paths: &[String]) {
    let matcher = RootMatcher::new(input_paths);

    let files = std::mem::take(&mut document.files);
    let mut reindexed = HashMap::with_capacity(files.len());
    for (path, mut file) in files {
        let normalized = matcher.normalize(&path);
        file.name.clone_from(&normalized);
        reindexed.insert(normalized, file);
    }
    document.files = reindexed;

    let classes = std::mem::take(&mut document.classes);
    let mut reindexed = HashMap::with_capacity(classes.len());
    for (id, mut class) in classes {
        let normalized = matcher.normalize(&id);
        class.name.clone_from(&normalized);
        class.shortname.clone_from(&normalized);
        class.file = matcher.normalize(&class.file);
        reindexed.insert(normalized, class);
    }
    document.classes = reindexed;

    for item in &mut document.classitems {
        item.file = matcher.normalize(&item.file);
        item.class = matcher.normalize(&item.class);
    }

    // `line` is commonly a compound `path:lineNumber` string; the rules
    // below are safe no-ops on the parts they don't match.
    for warning in &mut document.warnings {
        warning.line = matcher.normalize(&warning.line);
    }
}

/// Terminate a root with its own separator style so only whole directory
/// prefixes match.
fn ensure_dir_terminated(root: &str) -> String {
    if root.ends_with('/') || root.ends_with('\\') {
        return root.to_string();
    }
    let separator = if root.contains('\\') { '\\' } else { '/' };
    return format!("{root}{separator}");
}

/// Remove the leftmost source-extension occurrence, together with a
/// `/index` module-entry-point segment immediately preceding it.
///
/// Leftmost, not end-anchored: warning locations carry trailing `:line`
/// suffixes that must survive.
fn strip_module_suffix(path: &str) -> String {
    let Some(ext_pos) = path.find(".js") else {
        return path.to_string();
    };

    let start = match ext_pos.checked_sub("/index".len()) {
        Some(candidate) if path.get(candidate..ext_pos) == Some("/index") => candidate,
        _ => ext_pos,
    };
    let end = ext_pos.saturating_add(".js".len());

    let mut out = String::with_capacity(path.len().saturating_sub(end.saturating_sub(start)));
    out.push_str(path.get(..start).unwrap_or(""));
    out.push_str(path.get(end..).unwrap_or(""));
    return out;
}

use regex::Regex;

use crate::engine::Project;
use crate::types::{Document, Warning};

/// Check whether a warning is expected noise: "unknown tag:" messages come
/// from tags intentionally left unregistered (vendor-specific or
/// third-party tags the registry extension does not know about).
///
/// # Panics
///
/// Panics if the hardcoded suppression regex is invalid (compile-time
/// invariant).
pub fn is_suppressed(warning: &Warning) -> bool {
    suppression_pattern().is_match(&warning.message)
}

/// Forward every actionable warning to the project's sink, in sequence
/// order, formatted as `"<normalized location>: <message>"`.
///
/// # Panics
///
/// Panics if the hardcoded suppression regex is invalid (compile-time
/// invariant).
pub fn forward_actionable_warnings(document: &Document, project: &impl Project) {
    let pattern = suppression_pattern();
    for warning in &document.warnings {
        if pattern.is_match(&warning.message) {
            continue;
        }
        project.write_warn_line(&format!("{}: {}", warning.line, warning.message));
    }
}

/// The anchored suppression pattern — only messages starting with
/// `unknown tag:` qualify.
fn suppression_pattern() -> Regex {
    Regex::new(r"^unknown tag:").expect("valid regex")
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingProject {
        lines: RefCell<Vec<String>>,
    }

    impl Project for RecordingProject {
        fn name(&self) -> &str {
            "test-project"
        }

        fn write_warn_line(&self, line: &str) {
            self.lines.borrow_mut().push(line.to_string());
        }
    }

    #[test]
    fn unknown_tag_warnings_are_suppressed() {
        let warning = Warning {
            line: "lib/foo:3".to_string(),
            message: "unknown tag: weirdtag".to_string(),
        };
        assert!(is_suppressed(&warning));
    }

    #[test]
    fn suppression_only_matches_at_message_start() {
        let warning = Warning {
            line: "lib/foo:3".to_string(),
            message: "param has unknown tag: weirdtag".to_string(),
        };
        assert!(!is_suppressed(&warning));
    }

    #[test]
    fn actionable_warnings_are_forwarded_formatted() {
        let mut document = Document::default();
        document.warnings.push(Warning {
            line: "lib/foo:3".to_string(),
            message: "unknown tag: weirdtag".to_string(),
        });
        document.warnings.push(Warning {
            line: "lib/bar:9".to_string(),
            message: "missing param name".to_string(),
        });

        let project = RecordingProject { lines: RefCell::new(Vec::new()) };
        forward_actionable_warnings(&document, &project);

        assert_eq!(*project.lines.borrow(), vec!["lib/bar:9: missing param name".to_string()]);
    }
}

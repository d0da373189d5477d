use std::cell::RefCell;

use docnorm::{
    Document, Error, ExtractOptions, ExtractionEngine, Project, extract_and_normalize,
};

struct SampleProject {
    warn_lines: RefCell<Vec<String>>,
}

impl SampleProject {
    fn new() -> Self {
        SampleProject { warn_lines: RefCell::new(Vec::new()) }
    }
}

impl Project for SampleProject {
    fn name(&self) -> &str {
        "sample-app"
    }

    fn write_warn_line(&self, line: &str) {
        self.warn_lines.borrow_mut().push(line.to_string());
    }
}

struct StubEngine;

impl ExtractionEngine for StubEngine {
    fn extract(&self, options: &ExtractOptions<'_>) -> Result<Document, Error> {
        // Invocation contract.
        assert!(options.quiet, "engine must run quiet");
        assert!(!options.write_json, "engine must not persist output");
        assert_eq!(options.project_name, "sample-app");
        assert_eq!(options.paths, ["/proj/src/".to_string()]);

        // The extended vocabulary is active before extraction runs.
        assert!(options.registry.is_recognized("const"));
        assert!(options.registry.is_recognized("yield"));
        assert!(options.registry.is_recognized("export"));
        assert!(!options.registry.is_recognized("vendortag"));

        Document::from_json_value(serde_json::json!({
            "files": {
                "/proj/src/lib/foo/index.js": { "name": "", "code": "raw" },
                "/proj/src/lib/bar.js": { "name": "" }
            },
            "classes": {
                "/proj/src/lib/foo/index.js~Foo": {
                    "name": "",
                    "shortname": "",
                    "file": "/proj/src/lib/foo/index.js",
                    "description": "first Foo"
                },
                "/proj/src/lib/bar.js~Foo": {
                    "name": "",
                    "shortname": "",
                    "file": "/proj/src/lib/bar.js"
                }
            },
            "classitems": [
                {
                    "file": "/proj/src/lib/foo/index.js",
                    "class": "/proj/src/lib/foo/index.js~Foo",
                    "itemtype": "method",
                    "name": "save"
                }
            ],
            "warnings": [
                { "line": "/proj/src/lib/foo/index.js:3", "message": "unknown tag: vendortag" },
                { "line": "/proj/src/lib/bar.js:9", "message": "missing param name" }
            ]
        }))
    }
}

#[test]
fn pipeline_normalizes_document_and_filters_warnings() {
    let project = SampleProject::new();
    let roots = vec!["/proj/src/".to_string()];

    let document =
        extract_and_normalize(&StubEngine, &roots, &project).expect("extraction succeeds");

    // Files reindexed under root-relative, extension-free keys; descriptors
    // renamed to match, unknown fields preserved.
    let foo = document.files.get("lib/foo").expect("foo reindexed");
    assert_eq!(foo.name, "lib/foo");
    assert_eq!(foo.extra.get("code"), Some(&serde_json::json!("raw")));
    assert!(document.files.contains_key("lib/bar"));

    // Same-named classes from different files stay distinct after
    // normalization, and every class file resolves to a files key.
    let first = document.classes.get("lib/foo~Foo").expect("first Foo kept");
    let second = document.classes.get("lib/bar~Foo").expect("second Foo kept");
    assert_eq!(first.file, "lib/foo");
    assert_eq!(second.file, "lib/bar");
    for class in document.classes.values() {
        assert!(document.files.contains_key(&class.file));
        assert_eq!(class.name, class.shortname);
    }

    // Item back-references resolve to the reindexed keys.
    let item = document.classitems.first().expect("item kept");
    assert!(document.classes.contains_key(&item.class));
    assert!(document.files.contains_key(&item.file));
    assert_eq!(item.extra.get("name"), Some(&serde_json::json!("save")));

    // Warning locations normalized in place, order preserved.
    assert_eq!(document.warnings[0].line, "lib/foo:3");
    assert_eq!(document.warnings[1].line, "lib/bar:9");

    // Only actionable warnings reach the sink, formatted.
    assert_eq!(
        *project.warn_lines.borrow(),
        vec!["lib/bar:9: missing param name".to_string()],
    );
}

#[test]
fn engine_errors_propagate_uncaught() {
    struct FailingEngine;

    impl ExtractionEngine for FailingEngine {
        fn extract(&self, _options: &ExtractOptions<'_>) -> Result<Document, Error> {
            Err(Error::Extraction { reason: "no parsable inputs".to_string() })
        }
    }

    let project = SampleProject::new();
    let err = extract_and_normalize(&FailingEngine, &[], &project).unwrap_err();

    assert!(matches!(err, Error::Extraction { .. }));
    assert!(project.warn_lines.borrow().is_empty());
}

use fwstamp::header::render_header;
use fwstamp::readme::rewrite_version_lines;
use fwstamp::version::Stamp;
use proptest::prelude::*;

const MARKER: &str = "**Version:** ";

// Documentation lines that never start with the marker
fn doc_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 #*:.()\-]{0,60}")
        .unwrap()
        .prop_filter("Line must not start with the marker", |s| !s.starts_with(MARKER))
}

fn version_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"v[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,2}(-[0-9]{1,3}-g[0-9a-f]{7})?(-dirty)?").unwrap()
}

proptest! {
    #[test]
    fn test_rewrite_preserves_non_marker_lines(
        before in prop::collection::vec(doc_line(), 0..10),
        after in prop::collection::vec(doc_line(), 0..10),
        version in version_string(),
    ) {
        let mut lines = before.clone();
        lines.push(format!("{}0.1.0 (Built: 2020-01-01 00:00:00)", MARKER));
        lines.extend(after.iter().cloned());
        let content = lines.join("\n") + "\n";

        let stamp = Stamp::new(version.clone(), "2024-01-02 03:04:05");
        let (rewritten, replaced) = rewrite_version_lines(&content, MARKER, &stamp).unwrap();

        prop_assert_eq!(replaced, 1);
        let rewritten_lines: Vec<&str> = rewritten.split('\n').collect();
        let original_lines: Vec<&str> = content.split('\n').collect();
        prop_assert_eq!(rewritten_lines.len(), original_lines.len());
        for (index, (old, new)) in original_lines.iter().zip(rewritten_lines.iter()).enumerate() {
            if index == before.len() {
                prop_assert_eq!(*new, format!("{}{} (Built: 2024-01-02 03:04:05)", MARKER, version));
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_content_without_marker_is_never_rewritten(
        lines in prop::collection::vec(doc_line(), 0..20),
    ) {
        let content = lines.join("\n");
        let stamp = Stamp::new("v1.0.0", "2024-01-02 03:04:05");

        prop_assert!(rewrite_version_lines(&content, MARKER, &stamp).is_none());
    }

    #[test]
    fn test_header_embeds_version_once(version in version_string()) {
        let header = render_header(&Stamp::new(version.clone(), "2024-01-02 03:04:05"));
        let expected = format!("#define FIRMWARE_VERSION \"{}\"\n", version);

        prop_assert_eq!(header.matches(&expected).count(), 1);
        prop_assert_eq!(header.lines().count(), 5);
    }
}

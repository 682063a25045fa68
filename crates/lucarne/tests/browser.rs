//! End-to-end behavior of the browser extension through a session.

use lucarne::atelier::project;
use lucarne::maestro::Completion;
use lucarne::patina::{RuleLevel, UNKNOWN_ELEMENT_ID};
use lucarne::{CompletionQuery, LintConfig, Session, Severity};

const SAMPLES: &[&str] = &[
    "<html>\r\n\t<body onload=\"init()\">\n<script>\nlet s = 'ü';\n</script>\n</body></html>",
    "<!DOCTYPE html><!-- c é --><SCRIPT type=module>a()</SCRIPT ><p>日本</p>",
    "<div id=x onclick='a(1)' onmouseover=b()>ñ</div><script>tail()",
    "<?xml version=\"1.0\"?><svg><![CDATA[x < y]]></svg><b onclick=\"\">",
    "</script><script src=a.js /><i>\t</i>",
];

fn visible(text: &str) -> String {
    text.replace(' ', "·")
}

fn session_with(name: &str, text: &str) -> Session {
    let mut session = Session::browser(LintConfig::default());
    session.add_file(name, text);
    session
}

#[test]
fn projection_preserves_offsets_and_blanks_the_rest() {
    for raw in SAMPLES {
        let doc = project(raw, "index.html");
        assert_eq!(doc.projected_text.len(), raw.len(), "{raw}");

        let raw_bytes = raw.as_bytes();
        let projected = doc.projected_text.as_bytes();
        for (i, &b) in raw_bytes.iter().enumerate() {
            let preserved = doc
                .script_regions
                .iter()
                .any(|region| region.span.start as usize <= i && i < region.span.end as usize);
            let expected = match b {
                _ if preserved => b,
                b'\r' | b'\n' | b'\t' => b,
                _ => b' ',
            };
            assert_eq!(projected[i], expected, "byte {i} of {raw:?}");
        }
    }
}

#[test]
fn projection_keeps_handlers_and_bodies() {
    let doc = project("<p id=\"x\" onclick=\"go()\">hi</p>\n<script>f()</script>", "index.html");
    insta::assert_snapshot!(visible(&doc.projected_text), @r"
    ···················go()········
    ········f()·········
    ");
}

#[test]
fn projection_is_idempotent() {
    for raw in SAMPLES {
        let first = project(raw, "index.html");
        let second = project(raw, "index.html");
        assert_eq!(first.projected_text, second.projected_text);
        assert_eq!(first.identifier_index, second.identifier_index);
        assert_eq!(first.script_regions, second.script_regions);
    }
}

#[test]
fn duplicate_id_last_declaration_wins() {
    let raw = r#"<div id="x"></div><p></p><span id="x"></span>"#;
    let doc = project(raw, "index.html");
    let index = doc.identifier_index.unwrap();
    assert_eq!(index.len(), 1);

    let entry = index.get("x").unwrap();
    assert_eq!(entry.owner_tag, "span");
    assert_eq!(entry.span.start as usize, raw.rfind('x').unwrap());
}

#[test]
fn round_trip_lookup() {
    let raw = r#"<div id="a"></div><script>document.getElementById("a")</script>"#;
    let session = session_with("index.html", raw);

    let call = raw.find("getElementById").unwrap() as u32;
    let info = session.type_at("index.html", call).unwrap().unwrap();
    assert_eq!(info.name, "HTMLDivElement");
    assert_eq!(info.origin.as_deref(), Some("index.html"));
    assert_eq!(info.origin_span.unwrap().source_text(raw), "a");

    let literal = raw.find(r#""a")"#).unwrap() as u32 + 1;
    let info = session.type_at("index.html", literal).unwrap().unwrap();
    assert_eq!(info.name, "string");
    assert_eq!(info.origin.as_deref(), Some("index.html"));
    assert_eq!(info.origin_span.unwrap().source_text(raw), "a");

    assert!(session.lint("index.html").unwrap().is_empty());
}

#[test]
fn unknown_id_is_one_warning() {
    let session = session_with(
        "index.html",
        r#"<script>document.getElementById("missing")</script>"#,
    );
    let diagnostics = session.lint("index.html").unwrap();
    insta::assert_snapshot!(
        serde_json::to_string(&diagnostics).unwrap(),
        @r#"[{"ruleName":"UnknownElementId","severity":"warning","message":"Unknown element id 'missing'","file":"index.html","start":32,"end":41}]"#
    );
}

#[test]
fn unknown_id_severity_follows_config() {
    let raw = r#"<script>document.getElementById("missing")</script>"#;
    let mut session = session_with("index.html", raw);

    let mut config = LintConfig::new();
    config.set(UNKNOWN_ELEMENT_ID, RuleLevel::Error);
    session.set_config(config);
    assert_eq!(session.lint("index.html").unwrap()[0].severity, Severity::Error);

    session.set_config(LintConfig::from_json(r#"{ "rules": { "UnknownElementId": "off" } }"#).unwrap());
    assert!(session.lint("index.html").unwrap().is_empty());
}

#[test]
fn invalid_selector_is_reported() {
    let session = session_with(
        "index.html",
        "<script>document.querySelector('###')</script>",
    );
    let diagnostics = session.lint("index.html").unwrap();
    assert!(!diagnostics.is_empty());
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert!(diagnostics.iter().any(|d| d.message.contains("###")));
}

#[test]
fn completion_filters_by_prefix() {
    let raw = r#"<li id="apple"></li><li id="apricot"></li><li id="banana"></li>
<script>document.getElementById("ap")</script>"#;
    let session = session_with("index.html", raw);

    let cursor = raw.find(r#""ap")"#).unwrap() as u32 + 3;
    let result = session
        .completions("index.html", &CompletionQuery::at(cursor))
        .unwrap()
        .unwrap();
    let names: Vec<_> = result.completions.iter().map(Completion::insert_text).collect();
    assert_eq!(names, [r#""apple""#, r#""apricot""#]);
}

#[test]
fn completion_while_the_call_is_unfinished() {
    let ids = r#"<li id="apple"></li><li id="apricot"></li><li id="banana"></li>"#;
    let mut session = Session::browser(LintConfig::default());
    for script in [
        r#"<script>document.getElementById("ap</script>"#,
        r#"<script>document.getElementById("ap"</script>"#,
        r#"<script>document.getElementById("ap"#,
    ] {
        let raw = format!("{ids}{script}");
        session.add_file("index.html", &raw);

        let cursor = raw.find(r#"("ap"#).unwrap() as u32 + 4;
        let result = session
            .completions("index.html", &CompletionQuery::at(cursor))
            .unwrap()
            .unwrap_or_else(|| panic!("no completions for {script}"));
        let names: Vec<_> = result.completions.iter().map(Completion::insert_text).collect();
        assert_eq!(names, [r#""apple""#, r#""apricot""#], "{script}");
    }
}

#[test]
fn completion_outside_id_lookup_is_none() {
    let raw = r#"<li id="apple"></li><script>console.log("ap")</script>"#;
    let session = session_with("index.html", raw);
    let cursor = raw.find(r#""ap")"#).unwrap() as u32 + 3;
    assert!(session
        .completions("index.html", &CompletionQuery::at(cursor))
        .unwrap()
        .is_none());
}

#[test]
fn reanalysis_replaces_the_index() {
    let mut session = Session::browser(LintConfig::default());
    let script = r#"<script>document.getElementById("late")</script>"#;
    session.add_file("index.html", script);
    assert_eq!(session.lint("index.html").unwrap().len(), 1);

    session.add_file("index.html", &format!(r#"<i id="late"></i>{script}"#));
    assert!(session.lint("index.html").unwrap().is_empty());
}

//! Integration tests for the document model's serialized shape.

use docloom::{parse_str, DocumentModel};

#[test]
fn test_json_block_tags() {
    let html = r#"<p>text</p><ul><li>item</li></ul>
                  <table><tbody><tr><td>cell</td></tr></tbody></table><p>a</p><br>"#;
    let model = parse_str(html).unwrap();
    let json = model.to_json(false).unwrap();

    assert!(json.contains(r#""type":"paragraph""#));
    assert!(json.contains(r#""type":"list""#));
    assert!(json.contains(r#""type":"table""#));
    assert!(json.contains(r#""type":"break""#));
    assert!(json.contains(r#""type":"text""#));
}

#[test]
fn test_json_roundtrip() {
    let html = r#"<p style="color: teal">styled</p><ol><li>one</li></ol>"#;
    let model = parse_str(html).unwrap();

    let json = model.to_json(true).unwrap();
    let restored: DocumentModel = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.page_count(), model.page_count());
    assert_eq!(restored.plain_text(), model.plain_text());
    assert_eq!(restored.numbering.len(), model.numbering.len());
}

#[test]
fn test_image_payload_not_serialized() {
    let png = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
    let html = format!(r#"<p><img src="{}"></p>"#, png);
    let model = parse_str(&html).unwrap();

    let json = model.to_json(false).unwrap();
    assert!(json.contains(r#""type":"image""#));
    assert!(json.contains(r#""extension":"png""#));
    // The raw payload stays out of the serialized tree.
    assert!(!json.contains("\"data\""));
}

#[test]
fn test_numbering_definitions_serialized() {
    let model = parse_str(r#"<ol start="9"><li>x</li></ol>"#).unwrap();
    let json = model.to_json(false).unwrap();

    assert!(json.contains(r#""reference":"list-custom-numbering0""#));
    assert!(json.contains(r#""text":"9.""#));
    assert!(json.contains(r#""hanging":360"#));
}

use nowplaying::types::{ImageObject, PlayHistoryObject};
use nowplaying::utils::*;

// Helper function to create a history entry with only a timestamp
fn entry(played_at: Option<&str>, name: &str) -> PlayHistoryObject {
    PlayHistoryObject {
        track: Some(nowplaying::types::TrackObject {
            name: Some(name.to_string()),
            ..Default::default()
        }),
        played_at: played_at.map(str::to_string),
    }
}

fn images(urls: &[&str]) -> Vec<ImageObject> {
    urls.iter()
        .map(|u| ImageObject { url: u.to_string() })
        .collect()
}

fn names(items: &[PlayHistoryObject]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.track.as_ref().and_then(|t| t.name.clone()).unwrap_or_default())
        .collect()
}

#[test]
fn test_normalize_hex() {
    assert_eq!(normalize_hex("#1ED760"), Some("1ED760".to_string()));
    assert_eq!(normalize_hex("ff00aa"), Some("ff00aa".to_string()));

    // Shorthand is expanded
    assert_eq!(normalize_hex("#abc"), Some("aabbcc".to_string()));

    // Garbage is rejected
    assert_eq!(normalize_hex("red"), None);
    assert_eq!(normalize_hex("12345"), None);
    assert_eq!(normalize_hex("#GGGGGG"), None);
    assert_eq!(normalize_hex(""), None);
}

#[test]
fn test_with_hash_prefix() {
    assert_eq!(with_hash_prefix("123456"), "#123456");
    assert_eq!(with_hash_prefix("#123456"), "#123456");
}

#[test]
fn test_hex_to_rgba() {
    assert_eq!(
        hex_to_rgba("#FF8000", 0.6),
        Some("rgba(255, 128, 0, 0.6)".to_string())
    );
    assert_eq!(
        hex_to_rgba("000000", 0.6),
        Some("rgba(0, 0, 0, 0.6)".to_string())
    );
    assert_eq!(hex_to_rgba("#FFF", 0.6), None);
    assert_eq!(hex_to_rgba("#ZZZZZZ", 0.6), None);
}

#[test]
fn test_sort_by_played_at_desc() {
    let mut items = vec![
        entry(Some("2024-03-01T10:00:00.000Z"), "middle"),
        entry(Some("2024-03-01T12:30:00.000Z"), "newest"),
        entry(Some("2024-02-28T23:59:59.000Z"), "oldest"),
    ];
    sort_by_played_at_desc(&mut items);
    assert_eq!(names(&items), vec!["newest", "middle", "oldest"]);
}

#[test]
fn test_sort_by_played_at_compares_instants_not_text() {
    // Same instant expressed with different offsets; the +02:00 one is older
    let mut items = vec![
        entry(Some("2024-03-01T13:00:00+02:00"), "offset"),
        entry(Some("2024-03-01T12:00:00Z"), "utc"),
    ];
    sort_by_played_at_desc(&mut items);
    assert_eq!(names(&items), vec!["utc", "offset"]);
}

#[test]
fn test_sort_by_played_at_missing_timestamps_sink() {
    let mut items = vec![
        entry(None, "none"),
        entry(Some("not a date"), "garbage"),
        entry(Some("2024-01-01T00:00:00Z"), "dated"),
    ];
    sort_by_played_at_desc(&mut items);
    assert_eq!(names(&items)[0], "dated");
}

#[test]
fn test_pick_album_image() {
    // Two or more images prefer the second ("medium") one
    let imgs = images(&["large", "medium", "small"]);
    assert_eq!(pick_album_image(&imgs), Some("medium"));

    let imgs = images(&["large", "medium"]);
    assert_eq!(pick_album_image(&imgs), Some("medium"));

    // A single image is used as is
    let imgs = images(&["only"]);
    assert_eq!(pick_album_image(&imgs), Some("only"));

    // No images, or an empty URL, means no image
    assert_eq!(pick_album_image(&[]), None);
    let imgs = images(&["large", ""]);
    assert_eq!(pick_album_image(&imgs), None);
}

#[test]
fn test_payload_hash_is_deterministic() {
    assert_eq!(payload_hash("abc"), payload_hash("abc"));
    assert_ne!(payload_hash("abc"), payload_hash("abd"));
}

#[test]
fn test_escape_xml() {
    assert_eq!(
        escape_xml(r#"Tom & Jerry <"live"> 'remix'"#),
        "Tom &amp; Jerry &lt;&quot;live&quot;&gt; &apos;remix&apos;"
    );
    assert_eq!(escape_xml("plain"), "plain");
}

#[test]
fn test_sniff_image_mime() {
    assert_eq!(sniff_image_mime("/9j/4AAQSkZJRg"), "image/jpeg");
    assert_eq!(sniff_image_mime("iVBORw0KGgo"), "image/png");
    assert_eq!(sniff_image_mime("R0lGODlh"), "image/gif");
    assert_eq!(sniff_image_mime("UklGRiQAAABXRUJQ"), "image/webp");
    assert_eq!(sniff_image_mime("PHN2ZyB4bWxucz0"), "image/svg+xml");

    assert!(data_uri("/9j/abc").starts_with("data:image/jpeg;base64,/9j/"));
}

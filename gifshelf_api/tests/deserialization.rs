use gifshelf_api::types::{Category, GifResponse, SearchResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("search.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.count, 2);
    assert_eq!(resp.data.len(), 2);
    assert!(resp.app_error().is_none());

    let paging = resp.pagination.unwrap();
    assert_eq!(paging.count, 25);
    assert_eq!(paging.offset, 0);
    assert_eq!(paging.total_count, 237);

    let cat = &resp.data[0];
    assert_eq!(cat.id, "abc123");
    assert_eq!(cat.title, "Excited Cat");
    assert_eq!(
        cat.images.preview_gif.url,
        "https://media.giphy.example/abc123/preview.gif"
    );
    assert!(cat.saved);
    assert!(cat.favorited);
    assert_eq!(cat.categories.len(), 1);
    assert_eq!(cat.categories[0].name, "cats");

    let dog = &resp.data[1];
    assert!(!dog.saved);
    assert!(!dog.favorited);
    assert!(dog.categories.is_empty());
}

#[test]
fn deserialize_search_error_payload() {
    let json = load_fixture("search_error.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.app_error(), Some("No results for zzzzqqqq"));
    assert!(resp.data.is_empty());
    // The server sends an empty paging object alongside an error.
    let paging = resp.pagination.unwrap();
    assert_eq!(paging.count, 0);
    assert_eq!(paging.total_count, 0);
}

#[test]
fn empty_error_string_is_not_an_error() {
    let resp: SearchResponse =
        serde_json::from_str(r#"{"count": 0, "data": [], "error": ""}"#).unwrap();
    assert!(resp.app_error().is_none());
    assert!(resp.pagination.is_none());
}

#[test]
fn deserialize_categories() {
    let json = load_fixture("categories.json");
    let cats: Vec<Category> = serde_json::from_str(&json).unwrap();
    assert_eq!(cats.len(), 3);
    assert_eq!(cats[0].id, "1");
    assert_eq!(cats[2].name, "monday mood");
}

#[test]
fn deserialize_gif_detail_favorite_spelling() {
    let json = load_fixture("gif.json");
    let resp: GifResponse = serde_json::from_str(&json).unwrap();
    // The detail endpoint spells the flag `favorite` on the wire.
    assert!(resp.data.favorited);
    assert!(resp.data.saved);
    assert_eq!(resp.data.categories[0].id, "1");
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"data": not valid json}"#;
    let result = serde_json::from_str::<SearchResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    // A result without `title` or `images` is not usable by the panel.
    let json = r#"{"count": 1, "data": [{"id": "abc123"}], "error": ""}"#;
    let result = serde_json::from_str::<SearchResponse>(json);
    assert!(result.is_err());
}

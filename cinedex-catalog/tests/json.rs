use cinedex_catalog::*;
use std::fs;
use tempfile::TempDir;

fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "Inception".to_string(),
            director: "Christopher Nolan".to_string(),
            genre: "Sci-Fi".to_string(),
            year: 2010,
            rating: 8.8,
        },
        Movie {
            id: 2,
            title: "千と千尋の神隠し".to_string(),
            director: "宮崎駿".to_string(),
            genre: "Animation".to_string(),
            year: 2001,
            rating: 8.6,
        },
    ]
}

#[test]
fn load_import_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.json");
    fs::write(
        &path,
        r#"[
    {"title": "Heat", "director": "Michael Mann", "genre": "Crime", "year": 1995, "rating": 8.3},
    {"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": 1979, "rating": 8}
]"#,
    )
    .unwrap();

    let movies = load_movies(&path).unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Heat");
    assert_eq!(movies[1].rating, 8.0);
}

#[test]
fn extra_keys_are_ignored() {
    let movies = parse_movies(
        r#"[{"id": 99, "title": "Heat", "director": "Michael Mann", "genre": "Crime",
             "year": 1995, "rating": 8.3, "runtime": 170}]"#,
    )
    .unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].year, 1995);
}

#[test]
fn missing_key_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.json");
    fs::write(
        &path,
        r#"[{"title": "Heat", "director": "Michael Mann", "year": 1995, "rating": 8.3}]"#,
    )
    .unwrap();
    assert!(matches!(load_movies(&path), Err(JsonError::Parse { .. })));
}

#[test]
fn non_array_document_is_a_parse_error() {
    assert!(parse_movies(r#"{"title": "Heat"}"#).is_err());
    assert!(parse_movies("not json").is_err());
}

#[test]
fn missing_file_reported_as_not_found() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("absent.json");
    assert!(matches!(load_movies(&path), Err(JsonError::NotFound(_))));
}

#[test]
fn save_writes_pretty_array_with_literal_unicode() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("exported.json");
    save_movies(&path, &sample_movies()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n    {\n        \"id\": 1,"));
    assert!(text.contains("千と千尋の神隠し"));
    assert!(!text.contains("\\u"));
    assert!(text.ends_with("]\n"));

    let round: Vec<Movie> = serde_json::from_str(&text).unwrap();
    assert_eq!(round, sample_movies());
}

#[test]
fn save_empty_list_writes_empty_array() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("exported.json");
    save_movies(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn save_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("exported.json");
    fs::write(&path, "old contents that are much longer than the new ones").unwrap();
    save_movies(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    assert!(!tmp.path().join("exported.json.tmp").exists());
}

#[test]
fn failed_save_leaves_no_temp_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("exported.json");
    fs::create_dir(&path).unwrap();

    let err = save_movies(&path, &sample_movies()).unwrap_err();
    assert!(matches!(err, JsonError::Io { .. }));
    assert!(path.is_dir());
    assert!(!tmp.path().join("exported.json.tmp").exists());
}

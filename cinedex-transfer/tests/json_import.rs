use cinedex_db::*;
use cinedex_transfer::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const THREE_MOVIES: &str = r#"[
    {"title": "Inception", "director": "Christopher Nolan", "genre": "Sci-Fi", "year": 2010, "rating": 8.8},
    {"title": "Heat", "director": "Michael Mann", "genre": "Crime", "year": 1995, "rating": 8.3},
    {"title": "霸王別姬", "director": "陳凱歌", "genre": "Drama", "year": 1993, "rating": 8.1}
]"#;

#[test]
fn import_inserts_every_record() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(&tmp, "movies.json", THREE_MOVIES);
    let conn = open_memory().unwrap();

    let stats = import_movies(&conn, &path).unwrap();
    assert_eq!(stats, ImportStats { read: 3, inserted: 3 });

    let heat = search_movies(&conn, "Heat").unwrap();
    assert_eq!(heat.len(), 1);
    assert_eq!(heat[0].director, "Michael Mann");
    assert_eq!(heat[0].year, 1995);
    assert_eq!(search_movies(&conn, "別姬").unwrap().len(), 1);
}

#[test]
fn import_appends_to_existing_rows() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(&tmp, "movies.json", THREE_MOVIES);
    let conn = open_memory().unwrap();

    import_movies(&conn, &path).unwrap();
    import_movies(&conn, &path).unwrap();
    assert_eq!(count_movies(&conn).unwrap(), 6);
}

#[test]
fn import_empty_array() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(&tmp, "movies.json", "[]");
    let conn = open_memory().unwrap();
    assert_eq!(import_movies(&conn, &path).unwrap().inserted, 0);
}

#[test]
fn rating_violation_rolls_back_whole_batch() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        &tmp,
        "movies.json",
        r#"[
    {"title": "Inception", "director": "Christopher Nolan", "genre": "Sci-Fi", "year": 2010, "rating": 8.8},
    {"title": "Bad", "director": "Nobody", "genre": "Drama", "year": 2000, "rating": 11.5},
    {"title": "Heat", "director": "Michael Mann", "genre": "Crime", "year": 1995, "rating": 8.3}
]"#,
    );
    let seed = write_json(
        &tmp,
        "seed.json",
        r#"[{"title": "Alien", "director": "Ridley Scott", "genre": "Horror", "year": 1979, "rating": 8.5}]"#,
    );
    let conn = open_memory().unwrap();
    import_movies(&conn, &seed).unwrap();

    let err = import_movies(&conn, &path).unwrap_err();
    assert!(matches!(err, TransferError::Db(OperationError::Sqlite(_))));

    let all = list_movies(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Alien");
}

#[test]
fn missing_file_is_file_not_found() {
    let tmp = TempDir::new().unwrap();
    let conn = open_memory().unwrap();
    let err = import_movies(&conn, &tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, TransferError::FileNotFound(_)));
}

#[test]
fn malformed_json_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(&tmp, "movies.json", "[{\"title\": \"Heat\",");
    let conn = open_memory().unwrap();
    let err = import_movies(&conn, &path).unwrap_err();
    assert!(matches!(err, TransferError::Parse { .. }));
    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn wrong_shape_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let conn = open_memory().unwrap();

    let object = write_json(&tmp, "object.json", r#"{"title": "Heat"}"#);
    assert!(matches!(
        import_movies(&conn, &object),
        Err(TransferError::Parse { .. })
    ));

    let missing_key = write_json(
        &tmp,
        "missing.json",
        r#"[
    {"title": "Inception", "director": "Christopher Nolan", "genre": "Sci-Fi", "year": 2010, "rating": 8.8},
    {"title": "Heat", "director": "Michael Mann", "genre": "Crime", "rating": 8.3}
]"#,
    );
    assert!(matches!(
        import_movies(&conn, &missing_key),
        Err(TransferError::Parse { .. })
    ));

    let string_year = write_json(
        &tmp,
        "string_year.json",
        r#"[{"title": "Heat", "director": "Michael Mann", "genre": "Crime", "year": "1995", "rating": 8.3}]"#,
    );
    assert!(matches!(
        import_movies(&conn, &string_year),
        Err(TransferError::Parse { .. })
    ));

    assert_eq!(count_movies(&conn).unwrap(), 0);
}

#[test]
fn extra_keys_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let path = write_json(
        &tmp,
        "movies.json",
        r#"[{"id": 42, "title": "Heat", "director": "Michael Mann", "genre": "Crime",
             "year": 1995, "rating": 8.3, "tagline": "A Los Angeles crime saga"}]"#,
    );
    let conn = open_memory().unwrap();
    import_movies(&conn, &path).unwrap();

    let movies = list_movies(&conn).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 1);
}

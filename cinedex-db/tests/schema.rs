use cinedex_db::{ConnectionError, ensure_schema, open_database, open_memory};
use tempfile::TempDir;

#[test]
fn movies_table_exists() {
    let conn = open_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='movies')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();
}

#[test]
fn rating_check_constraint_rejects_out_of_range() {
    let conn = open_memory().unwrap();
    for rating in [0.5, 10.5] {
        let result = conn.execute(
            "INSERT INTO movies (title, director, genre, year, rating) VALUES ('A', 'B', 'C', 2000, ?1)",
            [rating],
        );
        assert!(result.is_err(), "rating {} should be rejected", rating);
    }
    for rating in [1.0, 10.0] {
        conn.execute(
            "INSERT INTO movies (title, director, genre, year, rating) VALUES ('A', 'B', 'C', 2000, ?1)",
            [rating],
        )
        .unwrap();
    }
}

#[test]
fn empty_text_rejected_by_table() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO movies (title, director, genre, year, rating) VALUES ('', 'B', 'C', 2000, 5.0)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn ids_are_assigned_by_the_engine() {
    let conn = open_memory().unwrap();
    for _ in 0..2 {
        conn.execute(
            "INSERT INTO movies (title, director, genre, year, rating) VALUES ('A', 'B', 'C', 2000, 5.0)",
            [],
        )
        .unwrap();
    }
    let ids: Vec<i64> = conn
        .prepare("SELECT id FROM movies ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn open_database_creates_file_and_reopens() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.db");
    assert!(!path.exists());

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO movies (title, director, genre, year, rating) VALUES ('A', 'B', 'C', 2000, 5.0)",
            [],
        )
        .unwrap();
    }
    assert!(path.exists());

    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn open_database_rejects_non_database_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.db");
    std::fs::write(&path, "not a database\n".repeat(256)).unwrap();
    let err = open_database(&path).unwrap_err();
    assert!(matches!(err, ConnectionError::Open { .. }));
}

#[test]
fn open_database_fails_for_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("no-such-dir").join("movies.db");
    assert!(open_database(&path).is_err());
}

use spotctl::{Error, management::TokenStore};
use tempfile::tempdir;

#[tokio::test]
async fn test_new_store_has_no_token() {
    let dir = tempdir().expect("tempdir");
    let store = TokenStore::open_or_create(dir.path()).await.expect("store");

    assert!(store.path().is_file());
    assert!(matches!(store.read().await, Err(Error::NoToken)));
}

#[tokio::test]
async fn test_write_then_read_returns_same_token() {
    let dir = tempdir().expect("tempdir");
    let store = TokenStore::open_or_create(dir.path()).await.expect("store");

    for token in ["BQC4-a_b.c", "token with spaces", "ünïcødé/+=", "x"] {
        store.write(token).await.expect("write");
        assert_eq!(store.read().await.expect("read"), token);
    }
}

#[tokio::test]
async fn test_write_replaces_longer_token() {
    let dir = tempdir().expect("tempdir");
    let store = TokenStore::open_or_create(dir.path()).await.expect("store");

    store.write("a-rather-long-first-token").await.expect("write");
    store.write("short").await.expect("write");

    assert_eq!(store.read().await.expect("read"), "short");
}

#[tokio::test]
async fn test_reopen_finds_existing_file() {
    let dir = tempdir().expect("tempdir");
    let first = TokenStore::open_or_create(dir.path()).await.expect("store");
    first.write("persisted").await.expect("write");

    let second = TokenStore::open_or_create(dir.path()).await.expect("store");
    assert_eq!(second.path(), first.path());
    assert_eq!(second.read().await.expect("read"), "persisted");

    let files = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(files, 1);
}

#[tokio::test]
async fn test_locate_ignores_unrelated_files() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("notes.txt"), "hello").expect("write");
    std::fs::write(dir.path().join("secret-spotify-cli-x.json"), "nope").expect("write");
    std::fs::create_dir(dir.path().join("secret-spotify-cli-dir.txt")).expect("mkdir");

    assert!(TokenStore::locate(dir.path()).is_none());

    let token_file = dir.path().join("secret-spotify-cli-abc.txt");
    std::fs::write(&token_file, "existing").expect("write");

    assert_eq!(TokenStore::locate(dir.path()), Some(token_file));
    let store = TokenStore::open_or_create(dir.path()).await.expect("store");
    assert_eq!(store.read().await.expect("read"), "existing");
}

#[tokio::test]
async fn test_create_in_missing_directory_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does/not/exist");

    let err = TokenStore::open_or_create(&missing)
        .await
        .expect_err("should fail");
    assert!(matches!(err, Error::Environment(_)));
    assert!(err.is_fatal());
}

use std::fs;

use afterflix::{
    catalogue,
    db::{FileBackend, UserStore, DEFAULT_REGISTRATION_FEE},
    services::{recommend, search, SearchQuery},
    AppError,
};

fn load(path: &std::path::Path) -> UserStore<FileBackend> {
    UserStore::load(FileBackend::new(path), DEFAULT_REGISTRATION_FEE).unwrap()
}

#[test]
fn test_missing_file_loads_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = load(&dir.path().join("users.txt"));
    assert!(store.is_empty());
}

#[test]
fn test_users_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.txt");

    {
        let mut store = load(&path);
        store.register("alice", "secret", "Action, Sci-Fi").unwrap();
        store.register("bob", "hunter2", "").unwrap();
        store.update_genres("bob", "Drama,Romance").unwrap();
    }

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "alice|secret|Action,Sci-Fi|9.99\nbob|hunter2|Drama,Romance|9.99\n"
    );

    let store = load(&path);
    assert_eq!(store.len(), 2);
    let bob = store.authenticate("bob", "hunter2").unwrap();
    assert_eq!(bob.genres, vec!["Drama", "Romance"]);
    assert_eq!(bob.membership_fee, 9.99);
}

#[test]
fn test_duplicate_registration_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.txt");

    load(&path).register("alice", "secret", "Action").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let mut store = load(&path);
    let result = store.register("alice", "other", "Drama");
    assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_malformed_fee_line_does_not_stop_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(
        &path,
        "alice|secret|Action|9.99\n\ncarol|pw|Horror|not-a-fee\nbob|hunter2|Sci-Fi|9.99\n",
    )
    .unwrap();

    let store = load(&path);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("carol").unwrap().membership_fee, 0.0);
    assert_eq!(store.get("bob").unwrap().membership_fee, 9.99);
    assert_eq!(store.load_warnings().len(), 1);
    assert_eq!(store.load_warnings()[0].line, 3);
}

#[test]
fn test_save_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(&path, "alice|secret| Action ,Drama |9.99\n\n\nbob|pw||12.5\n").unwrap();

    let mut store = load(&path);
    store.save().unwrap();
    let first = fs::read(&path).unwrap();
    store.save().unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "alice|secret|Action,Drama|9.99\nbob|pw||12.5\n"
    );
}

#[test]
fn test_recommend_for_loaded_user() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.txt");
    fs::write(&path, "alice|secret|fantasy,HORROR|9.99\n").unwrap();

    let store = load(&path);
    let alice = store.authenticate("alice", "secret").unwrap();
    let names: Vec<String> = recommend(alice, &catalogue::seed())
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Haunted Apartment", "Rings of Power"]);
}

#[test]
fn test_search_seed_catalogue_for_sci_fi() {
    let names: Vec<String> = search(&catalogue::seed(), &SearchQuery::new("", "Sci-Fi"))
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Galaxy Guard", "Beyond the Stars"]);
}

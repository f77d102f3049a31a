use selene_almanac::DiskCache;
use serde_json::json;

#[test]
fn miss_returns_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cache = DiskCache::open(dir.path()).unwrap();
    assert_eq!(cache.load("2024-03-05").unwrap(), None);
}

#[test]
fn store_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cache = DiskCache::open(dir.path()).unwrap();
    let payload = json!({"properties": {"data": {"fracillum": "29%"}}});
    cache.store("2024-03-05", &payload).unwrap();
    assert_eq!(cache.load("2024-03-05").unwrap(), Some(payload));
}

#[test]
fn first_write_wins() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cache = DiskCache::open(dir.path()).unwrap();
    cache.store("phases-2024", &json!({"numphases": 49})).unwrap();
    cache.store("phases-2024", &json!({"numphases": 50})).unwrap();
    assert_eq!(
        cache.load("phases-2024").unwrap(),
        Some(json!({"numphases": 49}))
    );
}

#[test]
fn keys_are_independent() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cache = DiskCache::open(dir.path()).unwrap();
    cache.store("2024-03-05", &json!(1)).unwrap();
    cache.store("2024-03-06", &json!(2)).unwrap();
    assert_eq!(cache.load("2024-03-05").unwrap(), Some(json!(1)));
    assert_eq!(cache.load("2024-03-06").unwrap(), Some(json!(2)));
}

#[test]
fn reopening_sees_previous_entries() {
    let dir = tempfile::tempdir().expect("create temp dir");
    {
        let cache = DiskCache::open(dir.path()).unwrap();
        cache.store("2024-03-05", &json!({"k": "v"})).unwrap();
    }
    let cache = DiskCache::open(dir.path()).unwrap();
    assert_eq!(cache.load("2024-03-05").unwrap(), Some(json!({"k": "v"})));
}

#[test]
fn corrupt_entry_is_an_error_not_a_miss() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let cache = DiskCache::open(dir.path()).unwrap();
    std::fs::write(dir.path().join("2024-03-05.json"), b"{not json").unwrap();
    assert!(cache.load("2024-03-05").is_err());
}

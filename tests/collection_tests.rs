use rdocs::{Collection, Filter, RdocsError, Result, ID_FIELD};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use tempfile::{tempdir, TempDir};

/// Helper to open an empty standalone collection in a fresh directory
async fn create_test_collection() -> (TempDir, Collection) {
    let temp_dir = tempdir().unwrap();
    let collection = Collection::open(temp_dir.path().join("users.json"))
        .await
        .unwrap();
    (temp_dir, collection)
}

fn filter(value: Value) -> Filter {
    Filter::new(value).unwrap()
}

#[tokio::test]
async fn test_insert_and_find_round_trip() -> Result<()> {
    let (_dir, users) = create_test_collection().await;

    let inserted = users.insert(&json!({"name": "A"}))?;
    let id = inserted[ID_FIELD].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let found = users.find(Some(&filter(json!({"name": "A"}))), None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0][ID_FIELD], json!(id));
    assert_eq!(found[0]["name"], json!("A"));
    assert_eq!(found[0].len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_insert_assigns_distinct_identifiers() -> Result<()> {
    let (_dir, users) = create_test_collection().await;

    let mut ids = HashSet::new();
    for i in 0..200 {
        let doc = users.insert(&json!({ "n": i }))?;
        ids.insert(doc[ID_FIELD].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(users.len(), 200);

    Ok(())
}

#[tokio::test]
async fn test_identifier_is_appended_last() -> Result<()> {
    let (_dir, users) = create_test_collection().await;

    let doc = users.insert(&json!({"name": "Sidharth", "age": 18}))?;
    let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "age", "_id"]);

    Ok(())
}

#[tokio::test]
async fn test_generated_identifier_overrides_caller_value() -> Result<()> {
    let (_dir, users) = create_test_collection().await;

    let doc = users.insert(&json!({"_id": "mine", "name": "A"}))?;
    let id = doc[ID_FIELD].as_str().unwrap();
    assert_ne!(id, "mine");

    // The caller's field keeps its position, only the value changes.
    let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["_id", "name"]);

    assert!(users.find_by_id("mine").is_none());
    assert_eq!(users.find_by_id(id), Some(doc.clone()));

    Ok(())
}

#[tokio::test]
async fn test_insert_serializable_struct() -> Result<()> {
    #[derive(Serialize)]
    struct User {
        name: String,
        tags: Vec<String>,
    }

    let (_dir, users) = create_test_collection().await;
    let doc = users.insert(&User {
        name: "B".to_string(),
        tags: vec!["x".to_string()],
    })?;

    assert_eq!(doc["name"], json!("B"));
    assert_eq!(doc["tags"], json!(["x"]));

    Ok(())
}

#[tokio::test]
async fn test_insert_rejects_non_object() {
    let (_dir, users) = create_test_collection().await;

    assert!(matches!(
        users.insert(&json!([1, 2, 3])),
        Err(RdocsError::InvalidDocument(_))
    ));
    assert!(matches!(
        users.insert("just a string"),
        Err(RdocsError::InvalidDocument(_))
    ));
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_subset_filter_semantics() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    users.insert(&json!({"name": "A", "age": 18}))?;
    users.insert(&json!({"name": "B", "age": 20}))?;

    assert_eq!(users.find(Some(&Filter::all()), None).len(), 2);
    assert_eq!(users.find(Some(&filter(json!({}))), None).len(), 2);
    assert_eq!(users.find(None, None).len(), 2);
    assert!(users
        .find(Some(&filter(json!({"missingField": "x"}))), None)
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_composite_values_need_exact_match() -> Result<()> {
    let (_dir, posts) = create_test_collection().await;
    let doc = posts.insert(&json!({"tags": ["a", "b"]}))?;

    let exact = posts.find(Some(&filter(json!({"tags": ["a", "b"]}))), None);
    assert_eq!(exact, vec![doc]);

    assert!(posts
        .find(Some(&filter(json!({"tags": ["a"]}))), None)
        .is_empty());
    assert!(posts
        .find(Some(&filter(json!({"tags": ["b", "a"]}))), None)
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_find_with_limit_keeps_earliest_matches() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    let mut adults = Vec::new();
    for i in 0..6 {
        let age = if i % 2 == 0 { 18 } else { 30 };
        let doc = users.insert(&json!({ "n": i, "age": age }))?;
        if age == 18 {
            adults.push(doc);
        }
    }

    let limited = users.find(Some(&filter(json!({"age": 18}))), Some(2));
    assert_eq!(limited, adults[..2].to_vec());

    let unlimited = users.find(Some(&filter(json!({"age": 18}))), None);
    assert_eq!(unlimited, adults);

    assert!(users
        .find(Some(&filter(json!({"age": 18}))), Some(0))
        .is_empty());
    // Without a filter the limit does not apply.
    assert_eq!(users.find(None, Some(4)).len(), 6);
    assert_eq!(users.find(None, Some(0)).len(), 6);

    Ok(())
}

#[tokio::test]
async fn test_find_returns_insertion_order() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    let names = ["zeta", "alpha", "mid"];
    for name in names {
        users.insert(&json!({ "name": name }))?;
    }

    let found: Vec<Value> = users
        .find_all()
        .into_iter()
        .map(|doc| doc["name"].clone())
        .collect();
    assert_eq!(found, vec![json!("zeta"), json!("alpha"), json!("mid")]);

    Ok(())
}

#[tokio::test]
async fn test_find_by_id_and_find_unique() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    let first = users.insert(&json!({"team": "red", "name": "A"}))?;
    users.insert(&json!({"team": "red", "name": "B"}))?;

    let id = first[ID_FIELD].as_str().unwrap();
    assert_eq!(users.find_by_id(id), Some(first.clone()));
    assert_eq!(users.find_by_id("does-not-exist"), None);

    assert_eq!(
        users.find_unique(&filter(json!({"team": "red"}))),
        Some(first)
    );
    assert_eq!(users.find_unique(&filter(json!({"team": "blue"}))), None);

    Ok(())
}

#[tokio::test]
async fn test_delete_removes_exactly_matches_in_order() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    let a = users.insert(&json!({"name": "A", "age": 18}))?;
    let b = users.insert(&json!({"name": "B", "age": 25}))?;
    let c = users.insert(&json!({"name": "C", "age": 18}))?;
    let d = users.insert(&json!({"name": "D", "age": 18.0}))?;

    let removed = users.delete(&filter(json!({"age": 18})));
    assert_eq!(removed, vec![a, c, d]);
    assert_eq!(users.find_all(), vec![b]);

    // Deleting again removes nothing
    assert!(users.delete(&filter(json!({"age": 18}))).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_find_unique_returns_earliest_match() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    users.insert(&json!({"team": "blue", "name": "A"}))?;
    let first_red = users.insert(&json!({"team": "red", "name": "B"}))?;
    users.insert(&json!({"team": "red", "name": "C"}))?;

    assert_eq!(
        users.find_unique(&filter(json!({"team": "red"}))),
        Some(first_red)
    );
    assert_eq!(
        users.find_unique(&Filter::all()).unwrap()["name"],
        json!("A")
    );

    Ok(())
}

#[tokio::test]
async fn test_standalone_collection_is_never_flushed() -> Result<()> {
    let (_dir, users) = create_test_collection().await;
    assert!(!users.is_flushed());

    users.insert(&json!({"name": "A"}))?;
    users.save().await?;
    users.save_sync()?;
    assert!(!users.is_flushed());

    assert_eq!(users.stats().document_count, 1);
    assert_eq!(users.name(), "users");

    Ok(())
}

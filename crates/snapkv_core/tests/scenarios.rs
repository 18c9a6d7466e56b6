//! End-to-end transaction scenarios against the public API.

use snapkv_core::{Config, Database, KeyValueStore};

fn db_with(key: &str, value: &str) -> Database<String> {
    let mut db = Database::new();
    db.set(key, value.to_string());
    db
}

fn read(db: &Database<String>, key: &str) -> Option<String> {
    db.get(key).cloned()
}

#[test]
fn commit_keeps_transaction_write() {
    let mut db = db_with("k1", "v1");
    db.start_transaction();
    db.set("k1", "v2".to_string());
    db.commit();

    assert_eq!(read(&db, "k1").as_deref(), Some("v2"));
}

#[test]
fn rollback_discards_transaction_write() {
    let mut db = db_with("k1", "v1");
    db.start_transaction();
    db.set("k1", "v2".to_string());
    db.rollback();

    assert_eq!(read(&db, "k1").as_deref(), Some("v1"));
}

#[test]
fn inner_commit_of_delete_leaves_key_absent() {
    let mut db = db_with("k1", "v1");
    db.start_transaction();
    db.set("k1", "v2".to_string());
    db.start_transaction();
    db.delete("k1");
    db.commit();

    assert_eq!(read(&db, "k1"), None);
}

#[test]
fn inner_rollback_of_delete_restores_outer_write() {
    let mut db = db_with("k1", "v1");
    db.start_transaction();
    db.set("k1", "v2".to_string());
    db.start_transaction();
    db.delete("k1");
    db.rollback();
    assert_eq!(read(&db, "k1").as_deref(), Some("v2"));

    db.commit();
    assert_eq!(read(&db, "k1").as_deref(), Some("v2"));
    assert!(!db.in_transaction());
}

#[test]
fn lifecycle_without_transaction_is_silent() {
    let mut db = db_with("k1", "v1");
    for _ in 0..3 {
        db.commit();
        db.rollback();
    }

    assert_eq!(read(&db, "k1").as_deref(), Some("v1"));
    assert_eq!(db.len(), 1);
    assert_eq!(db.depth(), 0);
}

#[test]
fn depth_tracks_open_transactions() {
    let mut db: Database<String> = Database::with_config(Config::new().stack_capacity(3));
    db.start_transaction();
    db.start_transaction();
    db.start_transaction();
    assert_eq!(db.depth(), 3);

    db.commit();
    db.rollback();
    assert_eq!(db.depth(), 1);

    db.commit();
    db.commit();
    assert_eq!(db.depth(), 0);
}

#[test]
fn rollback_to_empty_baseline() {
    let mut db: Database<String> = Database::new();
    db.start_transaction();
    for i in 0..50 {
        db.set(format!("key{i}"), i.to_string());
    }
    assert_eq!(db.len(), 50);

    db.rollback();
    assert!(db.is_empty());
}

#[test]
fn each_level_restores_its_own_baseline() {
    let mut db = db_with("k", "0");
    for level in 1..=5 {
        db.start_transaction();
        db.set("k", level.to_string());
    }

    for expected in (0..5).rev() {
        db.rollback();
        assert_eq!(read(&db, "k"), Some(expected.to_string()));
    }
    assert_eq!(db.depth(), 0);
}

#[test]
fn values_are_opaque() {
    #[derive(Debug, Clone, PartialEq)]
    struct Profile {
        name: String,
        tags: Vec<String>,
    }

    let mut db = Database::new();
    db.set(
        "user",
        Profile {
            name: "ada".into(),
            tags: vec!["admin".into()],
        },
    );

    db.start_transaction();
    db.set(
        "user",
        Profile {
            name: "ada".into(),
            tags: vec![],
        },
    );
    db.rollback();

    let user = db.get("user").unwrap();
    assert_eq!(user.name, "ada");
    assert_eq!(user.tags, vec!["admin".to_string()]);
}

#[test]
fn generic_over_interface() {
    fn transfer<D: KeyValueStore<i64>>(db: &mut D, amount: i64) -> bool {
        db.start_transaction();
        let from = db.get("from").copied().unwrap_or(0) - amount;
        let to = db.get("to").copied().unwrap_or(0) + amount;
        db.set("from", from);
        db.set("to", to);
        if from < 0 {
            db.rollback();
            false
        } else {
            db.commit();
            true
        }
    }

    let mut db: Database<i64> = Database::new();
    db.set("from", 10);

    assert!(transfer(&mut db, 7));
    assert!(!transfer(&mut db, 7));
    assert_eq!(db.get("from"), Some(&3));
    assert_eq!(db.get("to"), Some(&7));
}

#[test]
fn stats_follow_lifecycle() {
    let mut db = db_with("k1", "v1");
    db.start_transaction();
    db.start_transaction();
    db.rollback();
    db.commit();
    db.commit();

    let stats = db.stats();
    assert_eq!(stats.transactions_started, 2);
    assert_eq!(stats.transactions_rolled_back, 1);
    assert_eq!(stats.transactions_committed, 1);
    assert_eq!(stats.empty_commits, 1);
    assert_eq!(stats.max_depth, 2);
}

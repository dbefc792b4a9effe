//! [`MemoryStore`]: the authoritative user collection and its lock.

use parking_lot::RwLock;
use roster_core::User;

/// An ordered collection of users guarded by a single reader/writer lock.
///
/// `list` and `find` take the shared lock; `insert`, `replace` and `remove`
/// take the exclusive lock. Each method holds the lock for exactly its own
/// duration and hands back owned copies, never references into the
/// collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
  records: RwLock<Vec<User>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Build a store that already holds `records`, in order.
  pub fn with_records(records: Vec<User>) -> Self {
    Self {
      records: RwLock::new(records),
    }
  }

  /// Copy of every record, in insertion order.
  pub fn list(&self) -> Vec<User> { self.records.read().clone() }

  /// Copy of the record with `id`, if any.
  pub fn find(&self, id: &str) -> Option<User> {
    self.records.read().iter().find(|u| u.id == id).cloned()
  }

  /// Append `user`. Identifier and timestamps must already be assigned.
  pub fn insert(&self, user: User) { self.records.write().push(user); }

  /// Run `update` on the record with `id` while holding the write lock and
  /// return a copy of the result. Returns `None` if no record matches.
  pub fn replace<F>(&self, id: &str, update: F) -> Option<User>
  where
    F: FnOnce(&mut User),
  {
    let mut records = self.records.write();
    let record = records.iter_mut().find(|u| u.id == id)?;
    update(record);
    Some(record.clone())
  }

  /// Remove the record with `id`, shifting later records down. Returns the
  /// removed record, or `None` if no record matches.
  pub fn remove(&self, id: &str) -> Option<User> {
    let mut records = self.records.write();
    let index = records.iter().position(|u| u.id == id)?;
    Some(records.remove(index))
  }

  pub fn len(&self) -> usize { self.records.read().len() }

  pub fn is_empty(&self) -> bool { self.records.read().is_empty() }
}

#[cfg(test)]
mod tests {
  use std::{
    sync::{Arc, mpsc},
    thread,
    time::Duration,
  };

  use chrono::Utc;
  use roster_core::UserFields;

  use super::*;

  fn user(id: &str) -> User {
    User::new(
      id,
      UserFields {
        first_name: id.to_uppercase(),
        ..UserFields::default()
      },
      Utc::now(),
    )
  }

  fn ids(store: &MemoryStore) -> Vec<String> {
    store.list().into_iter().map(|u| u.id).collect()
  }

  #[test]
  fn insert_preserves_order() {
    let store = MemoryStore::new();
    store.insert(user("a"));
    store.insert(user("b"));
    store.insert(user("c"));
    assert_eq!(ids(&store), ["a", "b", "c"]);
    assert_eq!(store.len(), 3);
  }

  #[test]
  fn remove_compacts_and_keeps_survivor_order() {
    let store = MemoryStore::with_records(vec![user("a"), user("b"), user("c")]);
    let removed = store.remove("b").unwrap();
    assert_eq!(removed.id, "b");
    assert_eq!(ids(&store), ["a", "c"]);
    assert!(store.remove("b").is_none());
  }

  #[test]
  fn replace_missing_does_not_call_update() {
    let store = MemoryStore::with_records(vec![user("a")]);
    let mut called = false;
    assert!(store.replace("zzz", |_| called = true).is_none());
    assert!(!called);
  }

  #[test]
  fn returned_copies_are_detached() {
    let store = MemoryStore::with_records(vec![user("a")]);
    let original = store.find("a").unwrap();

    let mut listed = store.list();
    listed[0].first_name = "mutated".into();
    let mut found = store.find("a").unwrap();
    found.email = "mutated@example.com".into();
    let mut replaced = store.replace("a", |_| {}).unwrap();
    replaced.phone = "mutated".into();

    assert_eq!(store.find("a").unwrap(), original);
  }

  #[test]
  fn readers_do_not_wait_for_each_other() {
    let store = Arc::new(MemoryStore::with_records(vec![user("a")]));
    let held = store.records.read();

    let (tx, rx) = mpsc::channel();
    let reader = {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        let listed = store.list().len();
        let found = store.find("a").is_some();
        tx.send((listed, found)).ok();
      })
    };

    let outcome = rx.recv_timeout(Duration::from_secs(5));
    drop(held);
    reader.join().unwrap();
    assert_eq!(outcome, Ok((1, true)));
  }

  #[test]
  fn writers_wait_for_readers() {
    let store = Arc::new(MemoryStore::new());
    let held = store.records.read();

    let (tx, rx) = mpsc::channel();
    let writer = {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        store.insert(user("a"));
        tx.send(()).ok();
      })
    };

    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
    drop(held);
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    writer.join().unwrap();
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn concurrent_inserts_are_all_kept() {
    let store = MemoryStore::new();
    thread::scope(|scope| {
      for t in 0..8 {
        let store = &store;
        scope.spawn(move || {
          for i in 0..50 {
            store.insert(user(&format!("{t}-{i}")));
          }
        });
      }
    });
    assert_eq!(store.len(), 400);
  }
}

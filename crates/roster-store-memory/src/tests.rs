//! Behavioural tests for `StoreUserService` over a fresh `MemoryStore`.

use std::{collections::HashSet, sync::Arc, thread};

use chrono::Utc;
use roster_core::{Error, Preferences, UserFields, UserService};

use crate::{MemoryStore, StoreUserService};

fn service() -> StoreUserService { StoreUserService::new(Arc::new(MemoryStore::new())) }

fn ada() -> UserFields {
  UserFields {
    first_name:  "Ada".into(),
    last_name:   "Lovelace".into(),
    email:       "ada@example.com".into(),
    phone:       "+1".into(),
    address:     "London".into(),
    active:      true,
    preferences: Preferences::default(),
  }
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[test]
fn create_assigns_id_and_matching_timestamps() {
  let s = service();
  let before = Utc::now();

  let user = s.create(ada()).unwrap();

  assert!(!user.id.is_empty());
  assert_eq!(user.created_at, user.updated_at);
  assert!(user.created_at >= before);
  assert_eq!(user.fields(), ada());
  assert_eq!(s.store().len(), 1);
}

#[test]
fn create_never_reuses_an_id() {
  let s = service();
  let ids: HashSet<_> = (0..200).map(|_| s.create(ada()).unwrap().id).collect();
  assert_eq!(ids.len(), 200);
}

#[test]
fn concurrent_creates_produce_distinct_records() {
  let s = service();
  let ids: Vec<String> = thread::scope(|scope| {
    let handles: Vec<_> = (0..8)
      .map(|_| {
        let s = &s;
        scope.spawn(move || {
          (0..25)
            .map(|_| s.create(ada()).unwrap().id)
            .collect::<Vec<_>>()
        })
      })
      .collect();
    handles
      .into_iter()
      .flat_map(|h| h.join().unwrap())
      .collect()
  });

  assert_eq!(ids.len(), 200);
  assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 200);
  assert_eq!(s.list().unwrap().len(), 200);
}

// ─── Read ────────────────────────────────────────────────────────────────────

#[test]
fn get_returns_created_user() {
  let s = service();
  let created = s.create(ada()).unwrap();
  assert_eq!(s.get(&created.id).unwrap(), created);
}

#[test]
fn list_is_in_insertion_order() {
  let s = service();
  let a = s.create(ada()).unwrap();
  let b = s.create(UserFields { first_name: "Grace".into(), ..ada() }).unwrap();
  let c = s.create(UserFields { first_name: "Alan".into(), ..ada() }).unwrap();

  let ids: Vec<_> = s.list().unwrap().into_iter().map(|u| u.id).collect();
  assert_eq!(ids, [a.id.clone(), b.id.clone(), c.id.clone()]);

  s.delete(&b.id).unwrap();
  let ids: Vec<_> = s.list().unwrap().into_iter().map(|u| u.id).collect();
  assert_eq!(ids, [a.id, c.id]);
}

#[test]
fn mutating_returned_copies_leaves_store_untouched() {
  let s = service();
  let created = s.create(ada()).unwrap();

  let mut listed = s.list().unwrap();
  listed[0].first_name = "Mallory".into();
  listed[0].active = false;

  let mut fetched = s.get(&created.id).unwrap();
  fetched.email = "mallory@example.com".into();
  fetched.preferences.sms = true;

  assert_eq!(s.get(&created.id).unwrap(), created);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[test]
fn update_replaces_fields_and_preserves_identity() {
  let s = service();
  let created = s.create(ada()).unwrap();

  let replacement = UserFields {
    first_name:  "Augusta".into(),
    email:       "augusta@example.com".into(),
    active:      false,
    preferences: Preferences { email: true, sms: false },
    ..ada()
  };
  let updated = s.update(&created.id, replacement.clone()).unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);
  assert_eq!(updated.fields(), replacement);
  assert_eq!(s.get(&created.id).unwrap(), updated);
}

#[test]
fn repeated_updates_strictly_advance_updated_at() {
  let s = service();
  let created = s.create(ada()).unwrap();

  let mut previous = created.updated_at;
  for _ in 0..20 {
    let updated = s.update(&created.id, ada()).unwrap();
    assert!(updated.updated_at > previous);
    assert_eq!(updated.created_at, created.created_at);
    previous = updated.updated_at;
  }
}

// ─── Not found ───────────────────────────────────────────────────────────────

#[test]
fn missing_id_is_not_found_everywhere() {
  let s = service();
  s.create(ada()).unwrap();

  for id in ["", "nope", "00000000-0000-0000-0000-000000000000"] {
    assert!(matches!(s.get(id), Err(Error::NotFound(ref m)) if m == id));
    assert!(s.update(id, ada()).unwrap_err().is_not_found());
    assert!(s.delete(id).unwrap_err().is_not_found());
  }
  assert_eq!(s.store().len(), 1);
}

#[test]
fn delete_is_terminal() {
  let s = service();
  let keep = s.create(ada()).unwrap();
  let gone = s.create(ada()).unwrap();

  s.delete(&gone.id).unwrap();

  assert!(s.get(&gone.id).unwrap_err().is_not_found());
  assert!(s.update(&gone.id, ada()).unwrap_err().is_not_found());
  assert!(s.delete(&gone.id).unwrap_err().is_not_found());
  assert_eq!(s.get(&keep.id).unwrap(), keep);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[test]
fn readers_never_see_torn_records() {
  let s = service();

  let a = UserFields {
    first_name: "A".into(),
    last_name:  "A".into(),
    ..ada()
  };
  let b = UserFields {
    first_name: "B".into(),
    last_name:  "B".into(),
    ..ada()
  };
  let created = s.create(a.clone()).unwrap();
  let created_at = created.created_at;

  thread::scope(|scope| {
    let writer = {
      let (s, id) = (&s, &created.id);
      scope.spawn(move || {
        for i in 0..500 {
          let fields = if i % 2 == 0 { a.clone() } else { b.clone() };
          s.update(id, fields).unwrap();
        }
      })
    };

    for _ in 0..4 {
      let (s, id) = (&s, &created.id);
      scope.spawn(move || {
        for _ in 0..500 {
          let user = s.get(id).unwrap();
          assert_eq!(user.first_name, user.last_name);
          assert_eq!(user.created_at, created_at);
        }
      });
    }

    writer.join().unwrap();
  });
}

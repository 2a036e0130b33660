use super::*;
use crate::testing::MemoryTokenStore;

#[test]
fn restore_reads_stored_token() {
    let store = MemoryTokenStore::default();
    store.save("stored").unwrap();
    let session = Session::restore(&store);
    assert_eq!(session.token(), Some("stored"));
    assert!(session.is_signed_in());
}

#[test]
fn restore_with_empty_store_is_anonymous() {
    let session = Session::restore(&MemoryTokenStore::default());
    assert_eq!(session, Session::default());
    assert!(!session.is_signed_in());
}

#[test]
fn restore_ignores_empty_token() {
    let store = MemoryTokenStore::default();
    store.save("").unwrap();
    assert!(Session::restore(&store).token().is_none());
}

#[test]
fn establish_persists_then_adopts_token() {
    let store = MemoryTokenStore::default();
    let mut session = Session::with_token("old");
    session.establish(&store, "new".to_owned()).unwrap();
    assert_eq!(session.token(), Some("new"));
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn establish_failure_leaves_session_unchanged() {
    let store = MemoryTokenStore::default();
    store.fail_writes.set(true);
    let mut session = Session::with_token("old");
    assert!(session.establish(&store, "new".to_owned()).is_err());
    assert_eq!(session.token(), Some("old"));
}

#[test]
fn end_clears_memory_and_storage() {
    let store = MemoryTokenStore::default();
    let mut session = Session::default();
    session.establish(&store, "t".to_owned()).unwrap();
    session.end(&store).unwrap();
    assert!(session.token().is_none());
    assert!(store.load().is_none());
}

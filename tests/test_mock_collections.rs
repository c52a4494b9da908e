//! ContactStore behaviour when the collection misbehaves.

mod mocks;

use curem::{ContactError, ContactStore, NewContact, StoreError};
use mocks::MockCollection;
use std::sync::Arc;

fn store_with(contacts: &MockCollection, leads: &MockCollection) -> ContactStore {
    ContactStore::new(Arc::new(contacts.clone()), Arc::new(leads.clone()))
}

#[tokio::test]
async fn test_invalid_contact_never_reaches_collection() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let result = store
        .create(NewContact::new("Sam Flynn", "x@.xyzc.com"))
        .await;
    assert!(matches!(result, Err(ContactError::Validation(_))));

    assert_eq!(contacts.get_call_count("find_one"), 0);
    assert_eq!(contacts.get_call_count("insert"), 0);
}

#[tokio::test]
async fn test_invalid_update_never_reaches_collection() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let mut contact = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await
        .unwrap();
    contact.person = String::new();

    assert!(store.update(&contact).await.is_err());
    assert_eq!(contacts.get_call_count("update"), 0);
}

#[tokio::test]
async fn test_insert_failure_passes_through() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    contacts.fail_on("insert");
    let store = store_with(&contacts, &leads);

    let result = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await;
    assert!(matches!(result, Err(ContactError::Store(StoreError::Io(_)))));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_slug_lookup_failure_aborts_create() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    contacts.fail_on("find_one");
    let store = store_with(&contacts, &leads);

    let result = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await;
    assert!(matches!(result, Err(ContactError::Store(_))));
    assert_eq!(contacts.get_call_count("insert"), 0);
}

#[tokio::test]
async fn test_remove_failure_is_not_reported_as_not_found() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let contact = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await
        .unwrap();
    contacts.fail_on("remove");

    let result = store.delete(&contact).await;
    assert!(matches!(result, Err(ContactError::Store(StoreError::Io(_)))));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_leads_lookup_reads_only_leads_collection() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let contact = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await
        .unwrap();
    let contact_calls = contacts.get_call_count("find");

    assert!(store.leads(&contact).await.unwrap().is_empty());
    assert_eq!(leads.get_call_count("find"), 1);
    assert_eq!(contacts.get_call_count("find"), contact_calls);
    assert_eq!(leads.get_call_count("insert"), 0);
}

#[tokio::test]
async fn test_slug_change_never_reaches_update() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let mut contact = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await
        .unwrap();
    contact.slug = "clu".to_string();

    assert!(matches!(
        store.update(&contact).await,
        Err(ContactError::Validation(_))
    ));
    assert_eq!(contacts.get_call_count("update"), 0);
}

#[tokio::test]
async fn test_leads_lookup_failure_passes_through() {
    let contacts = MockCollection::new("contacts");
    let leads = MockCollection::new("leads");
    let store = store_with(&contacts, &leads);

    let contact = store
        .create(NewContact::new("Flynn", "flynn@encom.com"))
        .await
        .unwrap();
    leads.fail_on("find");

    let result = store.leads(&contact).await;
    assert!(matches!(result, Err(ContactError::Store(StoreError::Io(_)))));
}

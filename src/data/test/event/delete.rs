use super::*;

/// Tests the soft-delete lifecycle: the row stays in the table with the
/// deleted status and every read path treats it as missing afterwards.
#[tokio::test]
async fn soft_deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let repo = EventRepository::new(db);

    assert!(repo.delete(event.id).await?);

    let stored = Event::find_by_id(event.id).one(db).await?.unwrap();
    assert_eq!(stored.status, ItemStatus::Deleted);

    assert!(repo.get_by_id(event.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id reports false.
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

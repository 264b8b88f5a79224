use super::*;

/// Tests the soft-delete lifecycle: the row stays in the table with the
/// deleted status and every read path treats it as missing afterwards.
#[tokio::test]
async fn soft_deletes_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;

    let repo = VenueRepository::new(db);

    assert!(repo.delete(venue.id).await?);

    let stored = Venue::find_by_id(venue.id).one(db).await?.unwrap();
    assert_eq!(stored.status, ItemStatus::Deleted);

    assert!(repo.get_by_id(venue.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id reports false.
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

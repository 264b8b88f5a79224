use super::*;

/// Tests that update replaces the full row while keeping the id.
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let venue = factory::venue::create_venue(db).await?;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(
            venue.id,
            save_params("xis do tulipa", "Porto Alegre"),
            ItemStatus::Inactive,
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, venue.id);
    assert_eq!(updated.nome, "xis do tulipa");
    assert_eq!(updated.cidade, "Porto Alegre");
    assert_eq!(updated.status, ItemStatus::Inactive);

    Ok(())
}

/// Tests that updating a missing id reports None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(999, save_params("fantasma", "Gramado"), ItemStatus::Active)
        .await?;

    assert!(updated.is_none());

    Ok(())
}

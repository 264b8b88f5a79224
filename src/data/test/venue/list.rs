use super::*;

/// Tests that listing skips soft-deleted venues without any client filter.
#[tokio::test]
async fn excludes_soft_deleted_venues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::venue::create_venue(db).await?;
    factory::venue::VenueFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(live.id));

    Ok(())
}

/// Tests equality filtering on a text column.
#[tokio::test]
async fn filters_by_cidade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::venue::VenueFactory::new(db)
        .nome("restaurante tulipa")
        .cidade("Caxias Do Sul")
        .build()
        .await?;
    factory::venue::VenueFactory::new(db)
        .nome("xis da serra")
        .cidade("Gramado")
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let rows = repo.list(list_params("cidade=Gramado")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome"], serde_json::json!("xis da serra"));

    Ok(())
}

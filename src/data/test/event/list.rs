use super::*;

/// Tests that listing skips soft-deleted events without any client filter.
#[tokio::test]
async fn excludes_soft_deleted_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::event::create_event(db).await?;
    factory::event::EventFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(live.id));

    Ok(())
}

/// Tests equality filtering on the producer reference.
#[tokio::test]
async fn filters_by_produtor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db)
        .nome("festival da serra")
        .produtor(7)
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .nome("show da tulipa")
        .produtor(9)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let rows = repo.list(list_params("produtor=9")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome"], serde_json::json!("show da tulipa"));

    Ok(())
}

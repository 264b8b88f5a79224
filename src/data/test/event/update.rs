use super::*;

/// Tests that update replaces the full row while keeping the id.
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(event.id, save_params("show da tulipa", 9), ItemStatus::Inactive)
        .await?
        .unwrap();

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.nome, "show da tulipa");
    assert_eq!(updated.produtor, 9);
    assert_eq!(updated.faixa_etaria, 2);
    assert_eq!(updated.status, ItemStatus::Inactive);

    Ok(())
}

/// Tests that updating a missing id reports None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let updated = repo
        .update(999, save_params("fantasma", 1), ItemStatus::Active)
        .await?;

    assert!(updated.is_none());

    Ok(())
}

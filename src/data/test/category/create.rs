use super::*;

/// Tests creating a category from write params.
///
/// Expected: Ok with the row persisted and the typed status applied.
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let created = repo
        .create(save_params("cardapio", 1, 1), ItemStatus::Active)
        .await?;

    assert_eq!(created.nome, "cardapio");
    assert_eq!(created.status, ItemStatus::Active);
    assert_eq!(created.parente, 1);

    // Verify the row exists in the database
    let stored = Category::find_by_id(created.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that ids auto-increment across inserts.
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let first = repo
        .create(save_params("musica", 1, 2), ItemStatus::Active)
        .await?;
    let second = repo
        .create(save_params("danca", 1, 2), ItemStatus::Active)
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

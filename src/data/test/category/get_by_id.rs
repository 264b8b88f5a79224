use super::*;

/// Tests fetching a live category by id.
///
/// Expected: Ok(Some) with the stored fields.
#[tokio::test]
async fn returns_live_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .nome("atendimento")
        .parente(3)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let found = repo.get_by_id(category.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, category.id);
    assert_eq!(found.nome, "atendimento");
    assert_eq!(found.parente, 3);

    Ok(())
}

/// Tests that a missing id resolves to None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}

/// Tests that a soft-deleted row is treated as missing.
///
/// Expected: Ok(None) even though the row still exists in the table.
#[tokio::test]
async fn hides_soft_deleted_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.get_by_id(category.id).await?.is_none());

    // The row itself is still there
    assert!(Category::find_by_id(category.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that an inactive row is still visible; only deleted rows hide.
#[tokio::test]
async fn returns_inactive_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .status(ItemStatus::Inactive)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.get_by_id(category.id).await?.is_some());

    Ok(())
}

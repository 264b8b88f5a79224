use super::*;

/// Tests a full-body update of a live category.
///
/// Expected: Ok(Some) with every writable field replaced.
#[tokio::test]
async fn replaces_category_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .nome("som")
        .parente(3)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(category.id, save_params("iluminacao", 2, 3), ItemStatus::Inactive)
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.id, category.id);
    assert_eq!(updated.nome, "iluminacao");
    assert_eq!(updated.status, ItemStatus::Inactive);
    assert_eq!(updated.parente, 3);

    Ok(())
}

/// Tests that updating a missing id resolves to None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(999, save_params("limpeza", 1, 3), ItemStatus::Active)
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that a soft-deleted row cannot be updated.
///
/// Expected: Ok(None) and the stored row untouched.
#[tokio::test]
async fn does_not_update_soft_deleted_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .nome("cenario")
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(category.id, save_params("novo nome", 1, -1), ItemStatus::Active)
        .await?;

    assert!(updated.is_none());

    let stored = Category::find_by_id(category.id).one(db).await?.unwrap();
    assert_eq!(stored.nome, "cenario");
    assert_eq!(stored.status, ItemStatus::Deleted);

    Ok(())
}

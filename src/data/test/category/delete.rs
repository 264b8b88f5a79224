use super::*;

/// Tests the soft-delete lifecycle: delete flips the status, the row stays
/// in the table, and every read path treats it as missing afterwards.
#[tokio::test]
async fn soft_deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(category.id).await?);

    // Row still exists but carries the deleted status
    let stored = Category::find_by_id(category.id).one(db).await?.unwrap();
    assert_eq!(stored.status, ItemStatus::Deleted);

    // And is gone from the read path
    assert!(repo.get_by_id(category.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id reports false.
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

/// Tests that deleting twice reports false the second time.
#[tokio::test]
async fn second_delete_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(category.id).await?);
    assert!(!repo.delete(category.id).await?);

    Ok(())
}

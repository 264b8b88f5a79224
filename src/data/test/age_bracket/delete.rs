use super::*;

/// Tests the soft-delete lifecycle: the row stays in the table with the
/// deleted status and every read path treats it as missing afterwards.
#[tokio::test]
async fn soft_deletes_age_bracket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bracket = factory::age_bracket::create_age_bracket(db).await?;

    let repo = AgeBracketRepository::new(db);

    assert!(repo.delete(bracket.id).await?);

    let stored = AgeBracket::find_by_id(bracket.id).one(db).await?.unwrap();
    assert_eq!(stored.status, ItemStatus::Deleted);

    assert!(repo.get_by_id(bracket.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id reports false.
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AgeBracketRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

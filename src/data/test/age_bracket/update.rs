use super::*;

/// Tests that update replaces the full row while keeping the id.
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bracket = factory::age_bracket::create_age_bracket(db).await?;

    let repo = AgeBracketRepository::new(db);
    let updated = repo
        .update(bracket.id, save_params("Jovem", 12, 17), ItemStatus::Inactive)
        .await?
        .unwrap();

    assert_eq!(updated.id, bracket.id);
    assert_eq!(updated.nome, "Jovem");
    assert_eq!(updated.min_idade, 12);
    assert_eq!(updated.max_idade, Some(17));
    assert_eq!(updated.status, ItemStatus::Inactive);

    Ok(())
}

/// Tests that updating a missing id reports None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AgeBracketRepository::new(db);
    let updated = repo
        .update(999, save_params("Idoso", 60, 120), ItemStatus::Active)
        .await?;

    assert!(updated.is_none());

    Ok(())
}

use super::*;

/// Tests creating an age bracket from write params.
///
/// The two age columns carry distinct values so swapping min and max fails.
#[tokio::test]
async fn creates_age_bracket() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AgeBracketRepository::new(db);
    let created = repo
        .create(save_params("Adulto", 18, 60), ItemStatus::Active)
        .await?;

    assert_eq!(created.nome, "Adulto");
    assert_eq!(created.min_idade, 18);
    assert_eq!(created.status, ItemStatus::Active);
    assert_eq!(created.max_idade, Some(60));

    // Verify the row exists in the database
    let stored = AgeBracket::find_by_id(created.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

use super::*;

/// Tests that listing skips soft-deleted brackets without any client filter.
#[tokio::test]
async fn excludes_soft_deleted_brackets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::age_bracket::create_age_bracket(db).await?;
    factory::age_bracket::AgeBracketFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = AgeBracketRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(live.id));

    Ok(())
}

/// Tests ordering through the camelCase wire name `minIdade`.
#[tokio::test]
async fn orders_by_min_idade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(AgeBracket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (nome, min_idade) in [("Adulto", 18), ("Infantil", 0), ("Jovem", 12)] {
        factory::age_bracket::AgeBracketFactory::new(db)
            .nome(nome)
            .min_idade(min_idade)
            .build()
            .await?;
    }

    let repo = AgeBracketRepository::new(db);
    let rows = repo.list(list_params("orderBy=minIdade")).await?;

    let names: Vec<&str> = rows.iter().map(|r| r["nome"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Infantil", "Jovem", "Adulto"]);

    Ok(())
}

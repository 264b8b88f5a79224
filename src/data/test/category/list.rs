use super::*;

/// Tests that listing skips soft-deleted rows without any client filter.
#[tokio::test]
async fn excludes_soft_deleted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::category::CategoryFactory::new(db)
        .nome("musica")
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .nome("danca")
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(live.id));

    Ok(())
}

/// Tests that inactive rows stay listed; only the deleted status hides.
#[tokio::test]
async fn includes_inactive_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .status(ItemStatus::Inactive)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests the default page size of ten rows.
#[tokio::test]
async fn defaults_to_ten_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..12 {
        factory::category::create_category(db).await?;
    }

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.list(list_params("")).await?.len(), 10);
    assert_eq!(repo.list(list_params("limit=3")).await?.len(), 3);
    // Out-of-range limits fall back to the default page size
    assert_eq!(repo.list(list_params("limit=1000")).await?.len(), 10);

    Ok(())
}

/// Tests that a select projection narrows the returned keys.
#[tokio::test]
async fn select_narrows_returned_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .nome("atendimento")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let rows = repo.list(list_params("select=nome,parente")).await?;

    let row = rows[0].as_object().unwrap();
    assert_eq!(row.len(), 2);
    assert_eq!(row["nome"], serde_json::json!("atendimento"));
    assert!(!row.contains_key("descricao"));

    Ok(())
}

/// Tests descending ordering by name.
#[tokio::test]
async fn orders_rows_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for nome in ["atendimento", "cenario", "limpeza"] {
        factory::category::CategoryFactory::new(db)
            .nome(nome)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let rows = repo.list(list_params("orderBy=nome&order=desc")).await?;

    let names: Vec<&str> = rows.iter().map(|r| r["nome"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["limpeza", "cenario", "atendimento"]);

    Ok(())
}

/// Tests equality filtering on an integer column.
#[tokio::test]
async fn filters_by_column_equality() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .nome("cardapio")
        .parente(1)
        .build()
        .await?;
    factory::category::CategoryFactory::new(db)
        .nome("musica")
        .parente(2)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let rows = repo.list(list_params("parente=1")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome"], serde_json::json!("cardapio"));

    Ok(())
}

/// Tests pagination with offset over an ordered listing.
#[tokio::test]
async fn offset_skips_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::category::create_category(db).await?;
    }

    let repo = CategoryRepository::new(db);
    let rows = repo
        .list(list_params("orderBy=id&limit=2&offset=3"))
        .await?;

    assert_eq!(rows.len(), 2);

    Ok(())
}

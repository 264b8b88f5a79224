use super::*;

/// Tests that listing skips soft-deleted contracts without any client filter.
#[tokio::test]
async fn excludes_soft_deleted_contracts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::contract::create_contract(db).await?;
    factory::contract::ContractFactory::new(db)
        .status(ItemStatus::Deleted)
        .build()
        .await?;

    let repo = ContractRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(live.id));

    Ok(())
}

/// Tests equality filtering through the camelCase wire name `prestadorId`.
#[tokio::test]
async fn filters_by_prestador_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::contract::ContractFactory::new(db)
        .prestador_id(7)
        .build()
        .await?;
    factory::contract::ContractFactory::new(db)
        .prestador_id(8)
        .build()
        .await?;

    let repo = ContractRepository::new(db);
    let rows = repo.list(list_params("prestadorId=7")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], serde_json::json!(wanted.id));

    Ok(())
}

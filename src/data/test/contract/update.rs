use super::*;

/// Tests that update replaces the full row while keeping the id.
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contract = factory::contract::create_contract(db).await?;

    let repo = ContractRepository::new(db);
    let updated = repo
        .update(contract.id, save_params(3, 4), ItemStatus::Inactive)
        .await?
        .unwrap();

    assert_eq!(updated.id, contract.id);
    assert_eq!(updated.prestador_id, 3);
    assert_eq!(updated.produtor_id, 4);
    assert_eq!(updated.evento, 5);
    assert_eq!(updated.status, ItemStatus::Inactive);

    Ok(())
}

/// Tests that updating a missing id reports None.
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContractRepository::new(db);
    let updated = repo.update(999, save_params(1, 2), ItemStatus::Active).await?;

    assert!(updated.is_none());

    Ok(())
}

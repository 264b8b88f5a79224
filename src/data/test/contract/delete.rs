use super::*;

/// Tests the soft-delete lifecycle: the row stays in the table with the
/// deleted status and every read path treats it as missing afterwards.
#[tokio::test]
async fn soft_deletes_contract() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contract = factory::contract::create_contract(db).await?;

    let repo = ContractRepository::new(db);

    assert!(repo.delete(contract.id).await?);

    let stored = Contract::find_by_id(contract.id).one(db).await?.unwrap();
    assert_eq!(stored.status, ItemStatus::Deleted);

    assert!(repo.get_by_id(contract.id).await?.is_none());

    Ok(())
}

/// Tests that deleting a missing id reports false.
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContractRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}

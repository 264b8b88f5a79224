use super::*;

/// Tests creating a contract from write params.
///
/// Provider and producer ids carry distinct values so swapping the two
/// columns fails.
#[tokio::test]
async fn creates_contract() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Contract)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContractRepository::new(db);
    let created = repo.create(save_params(1, 2), ItemStatus::Active).await?;

    assert_eq!(created.prestador_id, 1);
    assert_eq!(created.produtor_id, 2);
    assert_eq!(created.evento, 5);
    assert_eq!(created.status, ItemStatus::Active);
    assert_eq!(created.criado_em, "2024-01-01 12:00:00");

    // Verify the row exists in the database
    let stored = Contract::find_by_id(created.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

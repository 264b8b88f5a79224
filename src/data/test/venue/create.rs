use super::*;

/// Tests creating a venue from write params.
///
/// Every column carries a distinct value so a crossed field mapping fails.
#[tokio::test]
async fn creates_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Venue).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let created = repo
        .create(
            save_params("restaurante tulipa", "Caxias Do Sul"),
            ItemStatus::Active,
        )
        .await?;

    assert_eq!(created.nome, "restaurante tulipa");
    assert_eq!(created.descricao, "descricao para restaurante tulipa");
    assert_eq!(created.bairro, "Centro");
    assert_eq!(created.cidade, "Caxias Do Sul");
    assert_eq!(created.estado, "RS");
    assert_eq!(created.status, ItemStatus::Active);
    assert_eq!(created.categorias, serde_json::json!([1, 2]));
    assert_eq!(created.pais, "brasil");

    // Verify the row exists in the database
    let stored = Venue::find_by_id(created.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

use super::*;

/// Tests boolean-column filtering with a word value.
#[tokio::test]
async fn filters_by_boolean_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nome("rodrigo")
        .prestador(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .nome("Fernanda")
        .produtor(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let rows = repo.list(list_params("prestador=true")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome"], serde_json::json!("rodrigo"));

    Ok(())
}

/// Tests membership filtering against the JSON category list.
///
/// A single `categorias` value matches users whose list contains it, not
/// users whose list equals it.
#[tokio::test]
async fn filters_by_category_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nome("rodrigo")
        .categorias(serde_json::json!([1, 2]))
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .nome("Fernanda")
        .categorias(serde_json::json!([3]))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let rows = repo.list(list_params("categorias=2")).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["nome"], serde_json::json!("rodrigo"));

    Ok(())
}

/// Tests that a repeated key matches any of its values.
#[tokio::test]
async fn repeated_key_matches_any_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for nome in ["rodrigo", "Fernanda", "Paula"] {
        factory::user::UserFactory::new(db).nome(nome).build().await?;
    }

    let repo = UserRepository::new(db);
    let rows = repo
        .list(list_params("nome=rodrigo&nome=Paula&orderBy=id"))
        .await?;

    let names: Vec<&str> = rows.iter().map(|r| r["nome"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["rodrigo", "Paula"]);

    Ok(())
}

/// Tests ascending ordering combined with pagination.
#[tokio::test]
async fn orders_and_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for nome in ["Ana", "Bruno", "Carla", "Diego"] {
        factory::user::UserFactory::new(db).nome(nome).build().await?;
    }

    let repo = UserRepository::new(db);
    let rows = repo
        .list(list_params("orderBy=nome&limit=2&offset=1"))
        .await?;

    let names: Vec<&str> = rows.iter().map(|r| r["nome"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bruno", "Carla"]);

    Ok(())
}

/// Tests that soft-deleted users never show up in listings.
#[tokio::test]
async fn excludes_soft_deleted_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nome("rodrigo")
        .status(ItemStatus::Deleted)
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let rows = repo.list(list_params("")).await?;

    assert_eq!(rows.len(), 1);
    assert_ne!(rows[0]["nome"], serde_json::json!("rodrigo"));

    Ok(())
}

use super::*;

/// Tests inserting a new user.
///
/// Expected: Ok with stored user matching the parameters
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            id: "u1".to_string(),
            username: "Alice".to_string(),
            is_active: true,
            team_name: team.name.clone(),
        })
        .await?;

    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "Alice");
    assert_eq!(user.team_name, team.name);
    assert!(user.is_active);

    Ok(())
}

/// Tests upserting an existing user id.
///
/// Verifies that username, active flag and team are all overwritten.
///
/// Expected: Ok with user moved to the second team
#[tokio::test]
async fn overwrites_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_team(db).await?;
    let second = factory::create_team(db).await?;
    factory::user::UserFactory::new(db, &first.name)
        .id("u1")
        .username("Alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        id: "u1".to_string(),
        username: "Alicia".to_string(),
        is_active: false,
        team_name: second.name.clone(),
    })
    .await?;

    let user = repo.find_by_id("u1").await?.unwrap();
    assert_eq!(user.username, "Alicia");
    assert_eq!(user.team_name, second.name);
    assert!(!user.is_active);

    Ok(())
}

use super::*;

/// Tests finding a team with its members.
///
/// Expected: Ok(Some) with members ordered by id
#[tokio::test]
async fn finds_team_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, members) = factory::helpers::create_team_with_members(db, 3).await?;

    let found = TeamRepository::new(db).find_by_name(&team.name).await?;

    let found = found.unwrap();
    assert_eq!(found.name, team.name);
    let ids: Vec<_> = found.members.iter().map(|m| m.user_id.clone()).collect();
    let expected: Vec<_> = members.iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests finding a team that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = TeamRepository::new(db).find_by_name("nobody").await?;

    assert!(found.is_none());

    Ok(())
}

use super::*;

/// Tests removing a reviewer binding.
///
/// Expected: Ok with only the remaining reviewer bound
#[tokio::test]
async fn removes_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, m) = factory::helpers::create_team_with_members(db, 3).await?;
    let pr = factory::pull_request::PullRequestFactory::new(db, &m[0].id)
        .reviewers([m[1].id.clone(), m[2].id.clone()])
        .build()
        .await?;

    let repo = ReviewerRepository::new(db);
    repo.remove(&pr.id, &m[1].id).await?;

    assert_eq!(repo.get_by_pull_request(&pr.id).await?, vec![m[2].id.clone()]);

    Ok(())
}

/// Tests removing a binding that does not exist.
///
/// Expected: Ok without changes
#[tokio::test]
async fn missing_binding_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, m) = factory::helpers::create_team_with_members(db, 3).await?;
    let pr = factory::pull_request::PullRequestFactory::new(db, &m[0].id)
        .reviewers([m[1].id.clone()])
        .build()
        .await?;

    let repo = ReviewerRepository::new(db);
    repo.remove(&pr.id, &m[2].id).await?;

    assert_eq!(repo.get_by_pull_request(&pr.id).await?, vec![m[1].id.clone()]);

    Ok(())
}

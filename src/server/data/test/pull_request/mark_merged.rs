use super::*;

/// Tests merging an open pull request.
///
/// Expected: Ok(Some) with MERGED status and merged_at set
#[tokio::test]
async fn merges_open_pull_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, members) = factory::helpers::create_team_with_members(db, 2).await?;
    let pr = factory::pull_request::PullRequestFactory::new(db, &members[0].id)
        .reviewers([members[1].id.clone()])
        .build()
        .await?;

    let merged = PullRequestRepository::new(db)
        .mark_merged(&pr.id)
        .await?
        .unwrap();

    assert_eq!(merged.status, PullRequestStatus::Merged);
    assert!(merged.merged_at.is_some());
    assert_eq!(merged.assigned_reviewers, vec![members[1].id.clone()]);

    Ok(())
}

/// Tests that merging twice keeps the first merge timestamp.
///
/// Expected: Ok(Some) with unchanged merged_at
#[tokio::test]
async fn second_merge_keeps_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, members) = factory::helpers::create_team_with_members(db, 1).await?;
    let pr = factory::create_pull_request(db, &members[0].id).await?;

    let repo = PullRequestRepository::new(db);
    let first = repo.mark_merged(&pr.id).await?.unwrap();
    let second = repo.mark_merged(&pr.id).await?.unwrap();

    assert_eq!(second.status, PullRequestStatus::Merged);
    assert_eq!(first.merged_at, second.merged_at);

    Ok(())
}

/// Tests merging a pull request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_pull_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let merged = PullRequestRepository::new(db).mark_merged("pr-x").await?;

    assert!(merged.is_none());

    Ok(())
}

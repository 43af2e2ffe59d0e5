use super::*;

/// Tests merging an open pull request.
///
/// Expected: Ok with MERGED status, merged_at set and reviewers kept
#[tokio::test]
async fn merges_pull_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    let service = PullRequestService::new(db, &picker);

    let (_team, members) = factory::helpers::create_team_with_members(db, 3).await?;
    let created = service.create(create_param("pr-1", &members[0].id)).await?;

    let merged = service.merge("pr-1").await?;

    assert_eq!(merged.status, PullRequestStatus::Merged);
    assert!(merged.merged_at.is_some());
    assert_eq!(merged.assigned_reviewers, created.assigned_reviewers);

    Ok(())
}

/// Tests that merging again is accepted and keeps the first timestamp.
///
/// Expected: Ok with identical status and merged_at
#[tokio::test]
async fn remerge_keeps_timestamp() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    let service = PullRequestService::new(db, &picker);

    let (_team, members) = factory::helpers::create_team_with_members(db, 2).await?;
    service.create(create_param("pr-1", &members[0].id)).await?;

    let first = service.merge("pr-1").await?;
    let second = service.merge("pr-1").await?;

    assert_eq!(second.status, PullRequestStatus::Merged);
    assert_eq!(second.merged_at, first.merged_at);

    Ok(())
}

/// Tests merging an unknown pull request.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_pull_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();

    let result = PullRequestService::new(db, &picker).merge("pr-x").await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::NotFound(_)))
    ));

    Ok(())
}

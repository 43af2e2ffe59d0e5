use super::*;

/// Tests listing reviews across open and merged pull requests.
///
/// Expected: Ok with both pull requests and their statuses
#[tokio::test]
async fn lists_open_and_merged_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, members) = factory::helpers::create_team_with_members(db, 2).await?;
    let reviewer = members[1].id.clone();
    factory::pull_request::PullRequestFactory::new(db, &members[0].id)
        .id("pr-open")
        .reviewers([reviewer.clone()])
        .build()
        .await?;
    factory::pull_request::PullRequestFactory::new(db, &members[0].id)
        .id("pr-merged")
        .created_at(chrono::Utc::now() - chrono::Duration::minutes(5))
        .reviewers([reviewer.clone()])
        .merged()
        .build()
        .await?;

    let reviews = UserService::new(db).get_reviews(&reviewer).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, "pr-open");
    assert_eq!(reviews[0].status, PullRequestStatus::Open);
    assert_eq!(reviews[1].id, "pr-merged");
    assert_eq!(reviews[1].status, PullRequestStatus::Merged);

    Ok(())
}

/// Tests listing reviews for an unknown user.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn unknown_user_has_no_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reviews = UserService::new(db).get_reviews("ghost").await?;

    assert!(reviews.is_empty());

    Ok(())
}

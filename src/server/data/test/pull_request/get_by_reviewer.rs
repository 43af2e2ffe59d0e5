use super::*;
use chrono::{Duration, Utc};

/// Tests listing pull requests reviewed by a user.
///
/// Verifies that open and merged pull requests are both included, newest first, and
/// that pull requests the user only authored are excluded.
///
/// Expected: Ok with two pull requests ordered by creation time descending
#[tokio::test]
async fn lists_reviewed_pull_requests_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_team, members) = factory::helpers::create_team_with_members(db, 2).await?;
    let author = &members[0];
    let reviewer = &members[1];
    let now = Utc::now();

    factory::pull_request::PullRequestFactory::new(db, &author.id)
        .id("pr-old")
        .created_at(now - Duration::hours(2))
        .reviewers([reviewer.id.clone()])
        .merged()
        .build()
        .await?;
    factory::pull_request::PullRequestFactory::new(db, &author.id)
        .id("pr-new")
        .created_at(now)
        .reviewers([reviewer.id.clone()])
        .build()
        .await?;
    factory::pull_request::PullRequestFactory::new(db, &reviewer.id)
        .id("pr-authored")
        .build()
        .await?;

    let prs = PullRequestRepository::new(db)
        .get_by_reviewer(&reviewer.id)
        .await?;

    let ids: Vec<_> = prs.iter().map(|pr| pr.id.as_str()).collect();
    assert_eq!(ids, vec!["pr-new", "pr-old"]);
    assert_eq!(prs[0].status, PullRequestStatus::Open);
    assert_eq!(prs[1].status, PullRequestStatus::Merged);

    Ok(())
}

/// Tests listing for a user without reviews.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_user_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let prs = PullRequestRepository::new(db).get_by_reviewer("ghost").await?;

    assert!(prs.is_empty());

    Ok(())
}

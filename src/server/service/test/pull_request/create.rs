use super::*;

/// Tests reviewer count for every team size from zero to four other members.
///
/// Verifies that the author is never assigned, reviewers are distinct teammates, and
/// the count is `min(others, 2)`.
///
/// Expected: Ok with min(N, 2) distinct reviewers excluding the author
#[tokio::test]
async fn assigns_up_to_two_teammates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::seeded(1);
    let service = PullRequestService::new(db, &picker);

    for others in 0..=4usize {
        let (_team, members) = factory::helpers::create_team_with_members(db, others + 1).await?;
        let author = &members[0];
        let teammates: HashSet<_> = members[1..].iter().map(|m| m.id.clone()).collect();

        let pr = service
            .create(create_param(&format!("pr-size-{}", others), &author.id))
            .await?;

        assert_eq!(pr.assigned_reviewers.len(), others.min(2));
        assert!(!pr.has_reviewer(&author.id));
        let unique: HashSet<_> = pr.assigned_reviewers.iter().cloned().collect();
        assert_eq!(unique.len(), pr.assigned_reviewers.len());
        assert!(unique.is_subset(&teammates));
        assert_eq!(pr.status, PullRequestStatus::Open);
        assert!(pr.merged_at.is_none());
    }

    Ok(())
}

/// Tests that inactive teammates and other teams are never picked.
///
/// Expected: Ok with the single active teammate as only reviewer
#[tokio::test]
async fn skips_inactive_and_foreign_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();

    let team = factory::create_team(db).await?;
    let author = factory::create_user(db, &team.name).await?;
    let active = factory::create_user(db, &team.name).await?;
    factory::user::UserFactory::new(db, &team.name)
        .active(false)
        .build()
        .await?;
    factory::helpers::create_team_with_members(db, 3).await?;

    let pr = PullRequestService::new(db, &picker)
        .create(create_param("pr-1", &author.id))
        .await?;

    assert_eq!(pr.assigned_reviewers, vec![active.id]);

    Ok(())
}

/// Tests creating a pull request for an unknown author.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();

    let result = PullRequestService::new(db, &picker)
        .create(create_param("pr-1", "ghost"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::NotFound(_)))
    ));

    Ok(())
}

/// Tests creating a pull request with an id already in use.
///
/// Expected: Err(PullRequestExists)
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    let service = PullRequestService::new(db, &picker);

    let (_team, members) = factory::helpers::create_team_with_members(db, 3).await?;
    service.create(create_param("pr-1", &members[0].id)).await?;

    let result = service.create(create_param("pr-1", &members[1].id)).await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::PullRequestExists(id))) if id == "pr-1"
    ));

    Ok(())
}

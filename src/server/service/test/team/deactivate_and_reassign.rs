use super::*;
use crate::server::data::user::UserRepository;

/// Creates team "core" with active users a, b, c and d.
async fn create_core_team(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    TeamService::new(db)
        .create(CreateTeamParam {
            name: "core".to_string(),
            members: ["a", "b", "c", "d"]
                .iter()
                .map(|id| member(id, true))
                .collect(),
        })
        .await?;

    Ok(())
}

/// Tests bulk deactivation with no users.
///
/// Expected: Ok with zero-valued summary
#[tokio::test]
async fn empty_batch_yields_zero_summary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();

    let summary = TeamService::new(db)
        .deactivate_and_reassign(&picker, deactivate_param("core", &[]))
        .await?;

    assert_eq!(summary.team_name, "core");
    assert!(summary.deactivated.is_empty());
    assert_eq!(summary.reassigned_reviewers, 0);
    assert_eq!(summary.removed_reviewers, 0);
    assert_eq!(summary.affected_pull_requests, 0);

    Ok(())
}

/// Tests deactivating both reviewers of an open pull request.
///
/// Team "core": author a, reviewers b and c, spare d. Deactivating b hands its review
/// to d; c then has no eligible teammate and is removed. A merged pull request
/// reviewed by b keeps its reviewer.
///
/// Expected: Ok with one reassignment, one removal and one affected pull request
#[tokio::test]
async fn reassigns_then_removes_when_pool_runs_out() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    create_core_team(db).await?;

    factory::pull_request::PullRequestFactory::new(db, "a")
        .id("pr-1")
        .reviewers(["b", "c"])
        .build()
        .await?;
    factory::pull_request::PullRequestFactory::new(db, "a")
        .id("pr-merged")
        .reviewers(["b"])
        .merged()
        .build()
        .await?;

    let summary = TeamService::new(db)
        .deactivate_and_reassign(&picker, deactivate_param("core", &["b", "c"]))
        .await?;

    assert_eq!(summary.deactivated, vec!["b", "c"]);
    assert_eq!(summary.reassigned_reviewers, 1);
    assert_eq!(summary.removed_reviewers, 1);
    assert_eq!(summary.affected_pull_requests, 1);

    let pr_repo = PullRequestRepository::new(db);
    let open = pr_repo.find_by_id("pr-1").await?.unwrap();
    assert_eq!(open.assigned_reviewers, vec!["d"]);
    let merged = pr_repo.find_by_id("pr-merged").await?.unwrap();
    assert_eq!(merged.assigned_reviewers, vec!["b"]);

    let user_repo = UserRepository::new(db);
    assert!(!user_repo.find_by_id("b").await?.unwrap().is_active);
    assert!(!user_repo.find_by_id("c").await?.unwrap().is_active);
    assert!(user_repo.find_by_id("d").await?.unwrap().is_active);

    Ok(())
}

/// Tests the core scenario with randomly chosen initial reviewers.
///
/// Whatever pair of b, c, d was picked, only d can remain: deactivated reviewers are
/// either handed to d or removed when d already reviews.
///
/// Expected: Ok with reviewers [d] and every deactivated reviewer accounted for
#[tokio::test]
async fn core_scenario_leaves_only_remaining_teammate() -> Result<(), AppError> {
    for seed in 0..8 {
        let test = TestBuilder::new()
            .with_review_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let picker = ReviewerPicker::seeded(seed);
        create_core_team(db).await?;

        let pr = PullRequestService::new(db, &picker)
            .create(CreatePullRequestParam {
                id: "p1".to_string(),
                name: "Core change".to_string(),
                author_id: "a".to_string(),
            })
            .await?;
        let outgoing = pr
            .assigned_reviewers
            .iter()
            .filter(|id| *id == "b" || *id == "c")
            .count() as u64;

        let summary = TeamService::new(db)
            .deactivate_and_reassign(&picker, deactivate_param("core", &["b", "c"]))
            .await?;

        assert_eq!(summary.reassigned_reviewers + summary.removed_reviewers, outgoing);
        assert!(summary.reassigned_reviewers <= 1);
        assert_eq!(summary.affected_pull_requests, 1);

        let after = PullRequestRepository::new(db).find_by_id("p1").await?.unwrap();
        assert_eq!(after.assigned_reviewers, vec!["d"]);
    }

    Ok(())
}

/// Tests that an already inactive user is still processed.
///
/// Expected: Ok with the user listed as deactivated and its review reassigned
#[tokio::test]
async fn processes_already_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    create_core_team(db).await?;
    UserRepository::new(db).set_active("b", false).await?;

    factory::pull_request::PullRequestFactory::new(db, "a")
        .id("pr-1")
        .reviewers(["b", "c"])
        .build()
        .await?;

    let summary = TeamService::new(db)
        .deactivate_and_reassign(&picker, deactivate_param("core", &["b"]))
        .await?;

    assert_eq!(summary.deactivated, vec!["b"]);
    assert_eq!(summary.reassigned_reviewers, 1);

    let pr = PullRequestRepository::new(db).find_by_id("pr-1").await?.unwrap();
    assert_eq!(pr.assigned_reviewers, vec!["c", "d"]);

    Ok(())
}

/// Tests aborting on an unknown user.
///
/// Users before the failing id stay deactivated and their reviews are untouched.
///
/// Expected: Err(NotFound) with partial progress kept
#[tokio::test]
async fn aborts_on_unknown_user_keeping_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    create_core_team(db).await?;

    factory::pull_request::PullRequestFactory::new(db, "a")
        .id("pr-1")
        .reviewers(["b"])
        .build()
        .await?;

    let result = TeamService::new(db)
        .deactivate_and_reassign(&picker, deactivate_param("core", &["b", "ghost", "c"]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::NotFound(msg))) if msg.contains("ghost")
    ));

    let user_repo = UserRepository::new(db);
    assert!(!user_repo.find_by_id("b").await?.unwrap().is_active);
    assert!(user_repo.find_by_id("c").await?.unwrap().is_active);
    let pr = PullRequestRepository::new(db).find_by_id("pr-1").await?.unwrap();
    assert_eq!(pr.assigned_reviewers, vec!["b"]);

    Ok(())
}

/// Tests rejecting a user from another team.
///
/// Expected: Err(NotFound) and the user stays active
#[tokio::test]
async fn rejects_user_from_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let picker = ReviewerPicker::new();
    create_core_team(db).await?;
    let (_other, members) = factory::helpers::create_team_with_members(db, 1).await?;

    let result = TeamService::new(db)
        .deactivate_and_reassign(&picker, deactivate_param("core", &[members[0].id.as_str()]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::NotFound(msg))) if msg.contains("does not belong")
    ));
    let user = UserRepository::new(db).find_by_id(&members[0].id).await?.unwrap();
    assert!(user.is_active);

    Ok(())
}

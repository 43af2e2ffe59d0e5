use super::*;

/// Tests counting reviewer bindings across open and merged pull requests.
///
/// Verifies ordering by count descending with ties broken by user id, and that users
/// without bindings are absent.
///
/// Expected: Ok with loads [(b, 2), (a, 1), (c, 1)]
#[tokio::test]
async fn counts_bindings_per_reviewer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let author = factory::user::UserFactory::new(db, &team.name).id("z").build().await?;
    for id in ["a", "b", "c", "idle"] {
        factory::user::UserFactory::new(db, &team.name).id(id).build().await?;
    }

    factory::pull_request::PullRequestFactory::new(db, &author.id)
        .reviewers(["c", "b"])
        .build()
        .await?;
    factory::pull_request::PullRequestFactory::new(db, &author.id)
        .reviewers(["b", "a"])
        .merged()
        .build()
        .await?;

    let load = ReviewerRepository::new(db).get_load().await?;

    assert_eq!(
        load,
        vec![
            ReviewerLoad {
                user_id: "b".to_string(),
                review_count: 2
            },
            ReviewerLoad {
                user_id: "a".to_string(),
                review_count: 1
            },
            ReviewerLoad {
                user_id: "c".to_string(),
                review_count: 1
            },
        ]
    );

    Ok(())
}

/// Tests load without any bindings.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_bindings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let load = ReviewerRepository::new(db).get_load().await?;

    assert!(load.is_empty());

    Ok(())
}

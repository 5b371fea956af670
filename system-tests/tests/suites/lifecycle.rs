// system-tests/tests/suites/lifecycle.rs
// ============================================================================
// Module: Lifecycle Tests
// Description: Update, delete, and dangling-reference checks.
// Purpose: Cover the resource operations beyond create and read.
// Dependencies: system-tests helpers, buildcheck-client, buildcheck-core
// ============================================================================

//! ## Overview
//! Update, delete, and dangling-reference checks.
//! Invariants:
//! - A deleted resource reads back as 404.
//! - Build configurations cannot reference a missing project.

use buildcheck_client::ApiError;
use buildcheck_client::Spec;
use buildcheck_client::StatusCode;
use buildcheck_core::BuildType;
use buildcheck_core::BuildTypeRecord;
use buildcheck_core::Endpoint;
use buildcheck_core::Locator;
use buildcheck_core::Project;
use buildcheck_core::ProjectRecord;
use buildcheck_core::User;
use buildcheck_core::random_identifier;
use helpers::artifacts::TestReporter;
use helpers::harness::TestTarget;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn rename_and_delete_build_type() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("rename_and_delete_build_type")?;
    reporter.suite("Regression");
    reporter.label("Positive", "CRUD");
    let target = TestTarget::acquire().await?;
    let checked = target.api().checked();

    let user = User::new();
    let project = Project::new();
    let build_type = BuildType::new(&project.id);
    let locator = Locator::id(&build_type.id);

    reporter.step("Create user, project and buildType");
    checked.create(&target.super_auth(), Endpoint::Users, &user).await?;
    let user_auth = Spec::auth(&user);
    checked.create(&user_auth, Endpoint::Projects, &project).await?;
    checked.create(&user_auth, Endpoint::BuildTypes, &build_type).await?;

    reporter.step("Rename buildType");
    let renamed = format!("Renamed {}", random_identifier(""));
    let response =
        checked.update(&user_auth, Endpoint::BuildTypes, &locator, "name", &renamed).await?;
    assert_eq!(response.text().trim(), renamed);

    reporter.step("Check buildType has the new name");
    let record: BuildTypeRecord =
        checked.read(&user_auth, Endpoint::BuildTypes, &locator).await?.json()?;
    assert_eq!(record.name, renamed);

    reporter.step("Delete buildType");
    checked.delete(&user_auth, Endpoint::BuildTypes, &locator).await?;

    reporter.step("Check buildType is gone");
    let err = checked
        .read(&user_auth, Endpoint::BuildTypes, &locator)
        .await
        .expect_err("deleted build type must not be readable");
    assert!(matches!(err, ApiError::UnexpectedStatus { .. }), "unexpected error: {err}");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND.as_u16()));

    reporter.finish(
        "pass",
        vec!["renamed build type read back; deleted build type returns 404".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn build_type_for_missing_project_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("build_type_for_missing_project_rejected")?;
    reporter.suite("Regression");
    reporter.label("Negative", "CRUD");
    let target = TestTarget::acquire().await?;

    let user = User::new();
    let orphan = BuildType::new(&random_identifier("missing_project_"));

    reporter.step("Create user");
    target.api().checked().create(&target.super_auth(), Endpoint::Users, &user).await?;

    reporter.step("Create buildType for a project that does not exist");
    let response =
        target.api().unchecked().create(&Spec::auth(&user), Endpoint::BuildTypes, &orphan).await?;

    reporter.step("Check buildType was not created with not found code");
    assert_eq!(response.status(), StatusCode::NOT_FOUND, "body: {}", response.text());
    let read = target
        .api()
        .unchecked()
        .read(&target.super_auth(), Endpoint::BuildTypes, &Locator::id(&orphan.id))
        .await?;
    assert_eq!(read.status(), StatusCode::NOT_FOUND);

    reporter.finish(
        "pass",
        vec!["build type under a missing project rejected".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn project_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("project_lifecycle")?;
    reporter.suite("Regression");
    reporter.label("Positive", "CRUD");
    let target = TestTarget::acquire().await?;
    let checked = target.api().checked();
    let super_auth = target.super_auth();

    let parent = Project::new();
    let child = Project::new().with_parent(&parent.id);
    let nested = BuildType::new(&child.id);

    reporter.step("Create parent and child projects");
    checked.create(&super_auth, Endpoint::Projects, &parent).await?;
    checked.create(&super_auth, Endpoint::Projects, &child).await?;
    checked.create(&super_auth, Endpoint::BuildTypes, &nested).await?;

    reporter.step("Check child project references its parent");
    let record: ProjectRecord =
        checked.read(&super_auth, Endpoint::Projects, &Locator::id(&child.id)).await?.json()?;
    assert_eq!(record.parent_project_id.as_deref(), Some(parent.id.as_str()));

    reporter.step("Create project with duplicate id");
    let duplicate = Project::new();
    let duplicate = Project {
        id: parent.id.clone(),
        ..duplicate
    };
    let response =
        target.api().unchecked().create(&super_auth, Endpoint::Projects, &duplicate).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    reporter.step("Delete parent project");
    checked.delete(&super_auth, Endpoint::Projects, &Locator::id(&parent.id)).await?;

    reporter.step("Check subtree is gone");
    let unchecked = target.api().unchecked();
    for (endpoint, id) in [
        (Endpoint::Projects, &parent.id),
        (Endpoint::Projects, &child.id),
        (Endpoint::BuildTypes, &nested.id),
    ] {
        let response = unchecked.read(&super_auth, endpoint, &Locator::id(id)).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{endpoint} {id} still readable");
    }

    reporter.finish(
        "pass",
        vec!["project delete removes subprojects and build types".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

// system-tests/tests/suites/roles.rs
// ============================================================================
// Module: Role Tests
// Description: Project-scoped permission checks for build configurations.
// Purpose: Validate that PROJECT_ADMIN is confined to its own project.
// Dependencies: system-tests helpers, buildcheck-client, buildcheck-core
// ============================================================================

//! ## Overview
//! Project-scoped permission checks for build configurations.
//! Invariants:
//! - Users start without roles; grants are issued by the super-user.
//! - A project admin may edit only its project and that project's children.

use buildcheck_client::Spec;
use buildcheck_client::StatusCode;
use buildcheck_core::BuildType;
use buildcheck_core::BuildTypeRecord;
use buildcheck_core::Endpoint;
use buildcheck_core::Locator;
use buildcheck_core::Project;
use buildcheck_core::RoleAssignment;
use buildcheck_core::User;
use buildcheck_core::UserRecord;
use helpers::artifacts::TestReporter;
use helpers::harness::TestTarget;

use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn project_admin_creates_build_type() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("project_admin_creates_build_type")?;
    reporter.suite("Regression");
    reporter.label("Positive", "Roles");
    let target = TestTarget::acquire().await?;
    let checked = target.api().checked();
    let super_auth = target.super_auth();

    let user = User::without_roles();
    let project = Project::new();
    let build_type = BuildType::new(&project.id);

    reporter.step("Create user");
    checked.create(&super_auth, Endpoint::Users, &user).await?;

    reporter.step("Create project by super user");
    checked.create(&super_auth, Endpoint::Projects, &project).await?;

    reporter.step("Grant user PROJECT_ADMIN role in project");
    let grant = RoleAssignment::project_admin(&project.id);
    checked.grant_role(&super_auth, &Locator::username(&user.username), &grant).await?;
    let granted: UserRecord = checked
        .read(&super_auth, Endpoint::Users, &Locator::username(&user.username))
        .await?
        .json()?;
    assert!(granted.roles.role.contains(&grant), "role missing: {:?}", granted.roles);

    reporter.step("Create buildType for project by user (PROJECT_ADMIN)");
    let user_auth = Spec::auth(&user);
    checked.create(&user_auth, Endpoint::BuildTypes, &build_type).await?;

    reporter.step("Check buildType was created successfully");
    let created: BuildTypeRecord = checked
        .read(&user_auth, Endpoint::BuildTypes, &Locator::id(&build_type.id))
        .await?
        .json()?;
    assert_eq!(created.id, build_type.id);
    assert_eq!(created.name, build_type.name);

    reporter.finish(
        "pass",
        vec!["project admin created a build type in its own project".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn project_admin_cannot_create_in_foreign_project() -> Result<(), Box<dyn std::error::Error>>
{
    let mut reporter = TestReporter::new("project_admin_cannot_create_in_foreign_project")?;
    reporter.suite("Regression");
    reporter.label("Negative", "Roles");
    let target = TestTarget::acquire().await?;
    let checked = target.api().checked();
    let super_auth = target.super_auth();

    let project_one = Project::new();
    let project_two = Project::new();
    let user_one = User::without_roles();
    let user_two = User::without_roles();

    reporter.step("Create project1");
    checked.create(&super_auth, Endpoint::Projects, &project_one).await?;

    reporter.step("Create project2");
    checked.create(&super_auth, Endpoint::Projects, &project_two).await?;

    reporter.step("Create user1 with PROJECT_ADMIN role in project1");
    checked.create(&super_auth, Endpoint::Users, &user_one).await?;
    checked
        .grant_role(
            &super_auth,
            &Locator::username(&user_one.username),
            &RoleAssignment::project_admin(&project_one.id),
        )
        .await?;

    reporter.step("Create user2 with PROJECT_ADMIN role in project2");
    checked.create(&super_auth, Endpoint::Users, &user_two).await?;
    checked
        .grant_role(
            &super_auth,
            &Locator::username(&user_two.username),
            &RoleAssignment::project_admin(&project_two.id),
        )
        .await?;

    reporter.step("Create buildType for project1 by user2");
    let intruder = BuildType::new(&project_one.id);
    let response = target
        .api()
        .unchecked()
        .create(&Spec::auth(&user_two), Endpoint::BuildTypes, &intruder)
        .await?;

    reporter.step("Check buildType was not created with forbidden code");
    assert_eq!(response.status(), StatusCode::FORBIDDEN, "body: {}", response.text());
    let missing = target
        .api()
        .unchecked()
        .read(&super_auth, Endpoint::BuildTypes, &Locator::id(&intruder.id))
        .await?;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    reporter.step("Check user1 can still create in project1");
    let owned = BuildType::new(&project_one.id);
    let created = checked.create(&Spec::auth(&user_one), Endpoint::BuildTypes, &owned).await?;
    assert!(created.is_success());

    reporter.finish(
        "pass",
        vec!["project admin rejected with 403 outside its project".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

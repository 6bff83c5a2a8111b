//! Users listing through the real binary: filtering, pagination and the
//! JSON view model shape.

use anyhow::Result;
use opsdeck_testing::TestWorld;

fn signed_in_world() -> TestWorld {
    let world = TestWorld::new();
    world.sign_in("admin@example.com").expect("seed session");
    world
}

#[test]
fn test_unfiltered_first_page() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json()?;
    assert_eq!(json["users"].as_array().unwrap().len(), 10);
    assert_eq!(json["total"], 12);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["page"], 1);
    assert_eq!(json["has_prev"], false);
    assert_eq!(json["has_next"], true);
    assert_eq!(json["range"][0], 1);
    assert_eq!(json["range"][1], 10);

    Ok(())
}

#[test]
fn test_second_page_holds_the_remainder() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--page", "2", "--format", "json"])?;
    let json = result.json()?;

    assert_eq!(json["users"].as_array().unwrap().len(), 2);
    assert_eq!(json["has_prev"], true);
    assert_eq!(json["has_next"], false);
    assert_eq!(json["range"][0], 11);
    assert_eq!(json["range"][1], 12);
    assert_eq!(json["users"][0]["name"], "Karen Taylor");

    Ok(())
}

#[test]
fn test_search_matches_case_insensitively() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--search", "GRACE", "--format", "json"])?;
    let json = result.json()?;

    assert_eq!(json["total"], 1);
    assert_eq!(json["total_pages"], 1);
    assert_eq!(json["users"][0]["name"], "Grace Lee");

    Ok(())
}

#[test]
fn test_role_and_status_filters_compose() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&[
        "users", "--role", "admin", "--status", "pending", "--format", "json",
    ])?;
    let json = result.json()?;

    assert_eq!(json["total"], 1);
    assert_eq!(json["users"][0]["name"], "Jack Martinez");
    assert_eq!(json["applied"]["role"], "admin");
    assert_eq!(json["applied"]["status"], "pending");

    Ok(())
}

#[test]
fn test_no_match_is_an_empty_success() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--search", "zzz-no-match", "--format", "json"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["users"].as_array().unwrap().len(), 0);
    assert_eq!(json["total"], 0);
    assert_eq!(json["total_pages"], 0);

    Ok(())
}

#[test]
fn test_plain_output_shows_the_range_line() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users"])?;
    assert!(result.success());
    assert!(result.stdout.contains("Alice Johnson"));
    assert!(result.stdout.contains("Showing 1 to 10 of 12 users (page 1 of 2)"));

    Ok(())
}

#[test]
fn test_plain_output_for_empty_result_names_the_filters() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--search", "zzz-no-match", "--role", "admin"])?;
    assert!(result.success());
    assert!(result.stdout.contains("No users found."));
    assert!(result.stdout.contains("Search: zzz-no-match"));
    assert!(result.stdout.contains("Role: admin"));

    Ok(())
}

#[test]
fn test_page_size_comes_from_config() -> Result<()> {
    let world = signed_in_world();
    world.write_config("page_size = 5\n\n[directory]\nname = \"memory\"\nlatency_ms = 0\n")?;

    let result = world.run(&["users", "--format", "json"])?;
    let json = result.json()?;

    assert_eq!(json["users"].as_array().unwrap().len(), 5);
    assert_eq!(json["total"], 12);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["range"][1], 5);

    Ok(())
}

#[test]
fn test_zero_page_is_rejected_by_argument_parsing() -> Result<()> {
    let world = signed_in_world();

    let result = world.run(&["users", "--page", "0"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("0"));

    Ok(())
}

#[test]
fn test_users_requires_a_session() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["users", "--format", "json"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("not signed in"));

    Ok(())
}

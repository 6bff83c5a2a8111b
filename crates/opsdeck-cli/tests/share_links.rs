//! Shareable query strings from the `users --share` path.

use anyhow::Result;
use opsdeck_testing::TestWorld;

#[test]
fn test_share_prints_the_canonical_query_string() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let result = world.run(&[
        "users", "--search", "grace", "--role", "admin", "--page", "2", "--share",
    ])?;
    assert!(result.success());
    assert_eq!(result.stdout.trim(), "search=grace&role=admin&page=2");

    Ok(())
}

#[test]
fn test_default_query_shares_as_empty() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let result = world.run(&["users", "--share"])?;
    assert!(result.success());
    assert_eq!(result.stdout.trim(), "");

    Ok(())
}

#[test]
fn test_share_output_round_trips_through_query() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let shared = world.run(&["users", "--role", "admin", "--status", "pending", "--share"])?;
    let link = shared.stdout.trim().to_string();
    assert_eq!(link, "role=admin&status=pending");

    let result = world.run(&["users", "--query", &link, "--format", "json"])?;
    let json = result.json()?;
    assert_eq!(json["total"], 1);
    assert_eq!(json["users"][0]["name"], "Jack Martinez");

    Ok(())
}

#[test]
fn test_malformed_query_is_rejected() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let result = world.run(&["users", "--query", "page=0"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("page must be >= 1"));

    Ok(())
}

#[test]
fn test_share_percent_encodes_free_text() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let result = world.run(&["users", "--search", "grace lee", "--share"])?;
    assert!(result.success());
    assert_eq!(result.stdout.trim(), "search=grace%20lee");

    Ok(())
}

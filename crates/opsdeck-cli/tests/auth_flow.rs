//! Mock sign-in lifecycle through the real binary.

use anyhow::Result;
use opsdeck_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_login_then_whoami() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "login",
        "--email",
        "admin@example.com",
        "--password",
        "secret1",
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Signed in as admin <admin@example.com>"));
    assert!(world.has_session());

    let result = world.run(&["whoami", "--format", "json"])?;
    let json = result.json()?;
    assert_eq!(json["name"], "admin");
    assert_eq!(json["email"], "admin@example.com");

    Ok(())
}

#[test]
fn test_short_password_is_rejected() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[
        "login",
        "--email",
        "admin@example.com",
        "--password",
        "12345",
    ])?;
    assert!(!result.success());
    assert!(predicate::str::contains("Invalid credentials").eval(&result.stderr));
    assert!(!world.has_session());

    Ok(())
}

#[test]
fn test_logout_clears_the_session() -> Result<()> {
    let world = TestWorld::new();
    world.sign_in("admin@example.com")?;

    let result = world.run(&["logout"])?;
    assert!(result.success());
    assert!(!world.has_session());

    let result = world.run(&["whoami"])?;
    assert!(!result.success());
    assert!(result.stderr.contains("not signed in"));

    // Logging out again is fine.
    let result = world.run(&["logout"])?;
    assert!(result.success());

    Ok(())
}

#[test]
fn test_corrupt_session_reads_as_signed_out() -> Result<()> {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("session.json"), "{not json")?;

    let result = world.run(&["whoami"])?;
    assert!(!result.success());
    assert!(predicate::str::contains("not signed in").eval(&result.stderr));

    Ok(())
}

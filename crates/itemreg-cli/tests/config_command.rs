use anyhow::Result;
use itemreg_testing::TestWorld;

#[test]
fn test_config_show_defaults_without_file() -> Result<()> {
    let world = TestWorld::new().without_api_override();

    let result = world.run(&["--format", "json", "config", "show"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(
        json["effective_api_url"],
        "https://api-sistema-de-controle-de-itens.onrender.com/itens"
    );
    assert_eq!(json["config"]["api"]["timeout_secs"], 30);
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_set_url_persists_to_config_file() -> Result<()> {
    let world = TestWorld::new().without_api_override();

    let set = world.run(&["config", "set-url", "http://localhost:8080/itens/"])?;
    assert!(set.success(), "stderr: {}", set.stderr());
    assert!(set.stdout().contains("http://localhost:8080/itens"));

    let saved = std::fs::read_to_string(world.config_path())?;
    assert!(saved.contains("base_url = \"http://localhost:8080/itens\""));

    let show = world.run(&["--format", "json", "config", "show"])?;
    assert_eq!(show.json()?["effective_api_url"], "http://localhost:8080/itens");
    Ok(())
}

#[test]
fn test_set_url_rejects_non_http() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set-url", "ftp://example.com/itens"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("http://"));
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_url_precedence() -> Result<()> {
    // Given: a config file URL and an environment URL
    let world = TestWorld::new()
        .without_api_override()
        .with_config("[api]\nbase_url = \"http://127.0.0.1:1/from-config\"\n")
        .with_env("ITEMREG_API_URL", "http://127.0.0.1:1/from-env");

    // When / Then: the environment beats the file
    let env = world.run(&["--format", "json", "config", "show"])?;
    assert_eq!(env.json()?["effective_api_url"], "http://127.0.0.1:1/from-env");

    // And --api-url beats both
    let flag = world.run(&[
        "--format",
        "json",
        "--api-url",
        "http://127.0.0.1:1/from-flag",
        "config",
        "show",
    ])?;
    assert_eq!(flag.json()?["effective_api_url"], "http://127.0.0.1:1/from-flag");
    Ok(())
}

#[test]
fn test_malformed_config_fails_with_path() -> Result<()> {
    let world = TestWorld::new().with_config("[api\n");

    let result = world.run(&["list"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("config.toml"));
    Ok(())
}

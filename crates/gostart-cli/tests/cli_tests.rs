//! End-to-end tests for the `gostart` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MODULE: &str = "github.com/acme/shop";

/// A command isolated from the host: no user config, no formatter, no
/// RUST_LOG, running inside `dir`.
fn gostart(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("gostart");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env("GOSTART__FORMATTER__ENABLED", "false")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn go_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("go.mod"), format!("module {MODULE}\n\ngo 1.22\n")).unwrap();
    dir
}

fn read(dir: &TempDir, rel: &str) -> String {
    fs::read_to_string(dir.path().join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("docker"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path()).assert().code(2);
}

#[test]
fn completions_are_generated() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gostart"));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_usecase_writes_component_and_aggregator() {
    let dir = go_project();
    gostart(dir.path())
        .args(["create", "usecase", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usecases.go"));

    assert!(dir.path().join("src/app/usecases/user/user_usecase.go").is_file());
    assert!(dir.path().join("src/app/usecases/user/interface.go").is_file());
    assert_eq!(
        read(&dir, "src/app/usecases/usecases.go"),
        "package usecases\n\
         \n\
         import (\n\
         \t\"github.com/acme/shop/src/app/usecases/user\"\n\
         )\n\
         \n\
         type (\n\
         \tUserUsecase = user.UserUsecase\n\
         )\n\
         \n\
         var (\n\
         \tNewUserUsecase = user.NewUserUsecase\n\
         )\n"
    );
}

#[test]
fn create_is_idempotent() {
    let dir = go_project();
    gostart(dir.path())
        .args(["create", "repository", "user"])
        .assert()
        .success();
    gostart(dir.path())
        .args(["create", "repository", "task"])
        .assert()
        .success();
    let before = read(&dir, "src/infrastructure/repositories/repositories.go");

    gostart(dir.path())
        .args(["create", "repo", "USER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));

    assert_eq!(
        read(&dir, "src/infrastructure/repositories/repositories.go"),
        before
    );
    assert!(before.find("NewTaskRepository").unwrap() < before.find("NewUserRepository").unwrap());
}

#[test]
fn create_feature_wires_bootstrap() {
    let dir = go_project();
    gostart(dir.path())
        .args(["create", "feature", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap.go"));

    let bootstrap = read(&dir, "src/app/bootstrap/bootstrap.go");
    assert!(bootstrap.contains("userRepo := repositories.NewUserRepository(db)"));
    assert!(bootstrap.contains("userUsecase := usecases.NewUserUsecase(userRepo)"));
    assert!(bootstrap.contains("userHandler := handler.NewUserHandler(userUsecase)"));
    assert!(bootstrap.contains("UserHandler *handler.UserHandler"));
    assert!(bootstrap.contains("UserHandler: userHandler,"));
    assert!(bootstrap.contains("\"github.com/acme/shop/src/interface/handler\""));

    for aggregator in [
        "src/app/usecases/usecases.go",
        "src/infrastructure/repositories/repositories.go",
        "src/interface/handler/handler.go",
    ] {
        assert!(read(&dir, aggregator).contains("NewUser"), "{aggregator}");
    }

    gostart(dir.path())
        .args(["create", "feature", "user"])
        .assert()
        .success();
    assert_eq!(read(&dir, "src/app/bootstrap/bootstrap.go"), bootstrap);
}

#[test]
fn create_outside_a_module_is_not_found() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .args(["create", "usecase", "user"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("go mod init"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn invalid_component_name_is_a_user_error() {
    let dir = go_project();
    gostart(dir.path())
        .args(["create", "handler", "func"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid component name"));
}

#[test]
fn project_dir_flag_targets_another_directory() {
    let dir = go_project();
    let elsewhere = TempDir::new().unwrap();
    gostart(elsewhere.path())
        .args(["create", "usecase", "order", "-C"])
        .arg(dir.path())
        .assert()
        .success();
    assert!(dir.path().join("src/app/usecases/usecases.go").is_file());
    assert!(!elsewhere.path().join("src").exists());
}

#[test]
fn missing_project_dir_is_not_found() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .args(["-C", "does-not-exist", "create", "usecase", "user"])
        .assert()
        .code(3);
}

#[test]
fn layout_from_environment_is_honoured() {
    let dir = go_project();
    gostart(dir.path())
        .env("GOSTART__LAYOUT__USECASES_DIR", "internal/usecases")
        .args(["create", "usecase", "user"])
        .assert()
        .success();
    let aggregator = read(&dir, "internal/usecases/usecases.go");
    assert!(aggregator.contains("\"github.com/acme/shop/internal/usecases/user\""));
}

#[test]
fn template_override_directory_is_used() {
    let dir = go_project();
    fs::create_dir_all(dir.path().join("tmpl")).unwrap();
    fs::write(
        dir.path().join("tmpl/handler.tmpl"),
        "package {{.ServiceNameLower}}\n\n// custom {{.ServiceName}}\n",
    )
    .unwrap();
    fs::write(dir.path().join("gostart.toml"), "[templates]\ndir = \"tmpl\"\n").unwrap();

    gostart(dir.path())
        .args(["create", "handler", "user"])
        .assert()
        .success();
    assert_eq!(
        read(&dir, "src/interface/handler/user/user_handler.go"),
        "package user\n\n// custom User\n"
    );
}

#[test]
fn misspelt_template_override_is_not_found() {
    let dir = go_project();
    fs::create_dir_all(dir.path().join("tmpl")).unwrap();
    fs::write(dir.path().join("tmpl/handlr.tmpl"), "// typo\n").unwrap();
    fs::write(dir.path().join("gostart.toml"), "[templates]\ndir = \"tmpl\"\n").unwrap();

    gostart(dir.path())
        .args(["create", "handler", "user"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found: handlr"));
    assert!(!dir.path().join("src").exists());
}

// ── init / docker ─────────────────────────────────────────────────────────────

#[test]
fn init_creates_tree_and_keeps_edits() {
    let dir = go_project();
    gostart(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps"));

    for folder in [
        "src/app/usecases",
        "src/infrastructure/repositories",
        "src/infrastructure/database/models",
        "src/interface/handler",
    ] {
        assert!(dir.path().join(folder).is_dir(), "{folder}");
    }
    assert!(read(&dir, "src/cmd/main.go").contains(MODULE));
    assert!(dir.path().join(".air.toml").is_file());

    fs::write(dir.path().join("README.md"), "mine\n").unwrap();
    gostart(dir.path()).arg("init").assert().success();
    assert_eq!(read(&dir, "README.md"), "mine\n");

    gostart(dir.path()).args(["init", "--force"]).assert().success();
    assert_ne!(read(&dir, "README.md"), "mine\n");
}

#[test]
fn init_module_flag_wins_over_manifest() {
    let dir = go_project();
    gostart(dir.path())
        .args(["init", "--module", "example.com/other"])
        .assert()
        .success();
    assert!(read(&dir, "src/cmd/main.go").contains("example.com/other"));
}

#[test]
fn docker_defaults_to_app_and_overwrites() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path()).arg("docker").assert().success();
    assert!(dir.path().join("Dockerfile").is_file());
    assert!(read(&dir, "docker-compose.yaml").contains("app"));

    gostart(dir.path()).args(["docker", "Shop"]).assert().success();
    assert!(read(&dir, "docker-compose.yaml").contains("shop"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment_override() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .env("GOSTART__FORMATTER__COMMAND", "goimports")
        .args(["config", "get", "formatter.command"])
        .assert()
        .success()
        .stdout(predicate::str::diff("goimports\n"));
}

#[test]
fn config_get_unknown_key_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("layout.usecases_dir"));
}

#[test]
fn config_init_then_path() {
    let dir = TempDir::new().unwrap();
    gostart(dir.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(read(&dir, "gostart.toml").contains("[formatter]"));

    gostart(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gostart.toml"));
}

#[test]
fn malformed_config_is_a_configuration_error() {
    let dir = go_project();
    fs::write(dir.path().join("gostart.toml"), "[layout\n").unwrap();
    gostart(dir.path())
        .args(["create", "usecase", "user"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// Both binaries read answers line by line when stdin is not a terminal, so the full flow can be
// driven by piping answers in.
use predicates::prelude::*;
use std::{fs, path::Path};

fn scaffolder(bin: &str, cwd: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin(bin).unwrap();

    cmd.current_dir(cwd).env_remove("HAJIME_CONFIG");

    cmd
}

#[test]
fn full_typescript_project() {
    let dir = tempfile::tempdir().unwrap();

    // name, typescript, package manager, readme, examples, install, git
    scaffolder("hajime", dir.path())
        .write_stdin("storefront\n\n\n\n\nn\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project \"storefront\" created successfully!"))
        .stdout(predicate::str::contains("npm install"));

    let root = dir.path().join("storefront");
    for file in [
        "package.json",
        "tsconfig.json",
        "nodemon.json",
        ".env",
        ".gitignore",
        "README.md",
        "index.ts",
        "src/app.ts",
        "src/config/database.ts",
        "src/middlewares/auth.ts",
        "src/middlewares/errorHandler.ts",
        "src/routes/index.ts",
        "src/routes/auth.ts",
        "src/utils/logger.ts",
        "src/controllers/userController.ts",
        "src/models/User.ts",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(!root.join(".git").exists());
}

#[test]
fn full_javascript_project_with_git() {
    let dir = tempfile::tempdir().unwrap();

    scaffolder("hajime", dir.path())
        .write_stdin("ledger\nn\npnpm\nn\nn\nn\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm run dev"));

    let root = dir.path().join("ledger");
    assert!(root.join("index.js").is_file());
    assert!(root.join("nodemon.json").is_file());
    assert!(!root.join("tsconfig.json").exists());
    assert!(!root.join("README.md").exists());
    assert!(!root.join("src/models").exists());
    assert!(root.join(".git").is_dir());
}

#[test]
fn empty_project_name_exits_with_failure_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    scaffolder("hajime", dir.path())
        .write_stdin("\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project name is required"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unknown_package_manager_falls_back_to_npm() {
    let dir = tempfile::tempdir().unwrap();

    scaffolder("hajime-quick", dir.path())
        .write_stdin("pocket\ny\nbun\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid package manager 'bun'! Using npm instead."))
        .stdout(predicate::str::contains("npm run dev"));

    let root = dir.path().join("pocket");
    for file in ["package.json", "index.ts", "tsconfig.json", "nodemon.json", ".env", ".gitignore"] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn quick_project_defaults_to_javascript() {
    let dir = tempfile::tempdir().unwrap();

    scaffolder("hajime-quick", dir.path())
        .write_stdin("pocket\n\n\n")
        .assert()
        .success();

    let root = dir.path().join("pocket");
    assert!(root.join("index.js").is_file());
    assert!(root.join("public").is_dir());
    assert!(!root.join("tsconfig.json").exists());
    assert_eq!(
        fs::read_to_string(root.join(".env")).unwrap(),
        "PORT=3000\nNODE_ENV=development\n"
    );
}

#[test]
fn rerun_overwrites_existing_project() {
    let dir = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        scaffolder("hajime-quick", dir.path())
            .write_stdin("pocket\n\n\n")
            .assert()
            .success();
    }

    let manifest = fs::read_to_string(dir.path().join("pocket/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"pocket\""));
}

#[test]
fn settings_file_changes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("hajime.toml"),
        "[defaults]\ntypescript = false\npackage_manager = \"yarn\"\ninstall = false\ngit = false\n",
    )
    .unwrap();

    scaffolder("hajime", dir.path())
        .write_stdin("atlas\n\n\n\n\n\n\n")
        .assert()
        .success();

    let root = dir.path().join("atlas");
    assert!(root.join("index.js").is_file());
    assert!(!root.join(".git").exists());
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("yarn install"));
}

#[test]
fn malformed_settings_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hajime.toml"), "[defaults\n").unwrap();

    scaffolder("hajime", dir.path())
        .write_stdin("atlas\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to parse settings file"));

    assert!(!dir.path().join("atlas").exists());
}

#[cfg(unix)]
#[test]
fn interrupt_while_waiting_for_answers_exits_cleanly() {
    use std::io::{BufRead, BufReader, Read};
    use std::process::{Command, Stdio};

    let dir = tempfile::tempdir().unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_hajime-quick"))
        .current_dir(dir.path())
        .env_remove("HAJIME_CONFIG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // held open so the process blocks on the first question
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    // the banner is printed once the handler is in place
    let mut line = String::new();
    while !line.contains("Express Quick Setup") {
        line.clear();
        assert_ne!(stdout.read_line(&mut line).unwrap(), 0, "banner never printed");
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.contains("Setup cancelled by user"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use todo::task::Task;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn init() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn task_file(&self) -> PathBuf {
        self.dir.path().join("todos.json")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(".todo.toml", contents)
    }

    pub fn read_tasks(&self) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
        self.read_tasks_from(&self.task_file())
    }

    pub fn read_tasks_from(&self, path: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

pub fn todo_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Seed the default task file through the CLI.
pub fn add_tasks(dir: &TestDir, descriptions: &[&str]) {
    for description in descriptions {
        todo_cmd(dir)
            .args(["--add", *description])
            .assert()
            .success();
    }
}

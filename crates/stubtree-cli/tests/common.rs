//! Shared helpers for CLI tests.
#![allow(dead_code, unused_imports)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub use stubtree_cli::cli::{Cli, Command};
pub use stubtree_cli::commands::{self, Outcome};

pub const MOTOR: &str = r#"
SourceFile
  Namespace
    Name
      Ident "Plant"
    Class
      Name
        Ident "Motor"
      Method
        Name
          Ident "Start"
        StmtList
          VarDecl
            Name
              Ident "stray"
  Program
    Name
      Ident "Start"
"#;

/// A fresh directory under the system temp dir.
pub fn temp_dir(prefix: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("stubtree-{prefix}-{stamp}"));
    std::fs::create_dir_all(&dir).expect("create temp directory");
    dir
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write file");
    path
}

//! Shared sandbox helpers for binary-level tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory with a fake editor and a private config.
pub struct Sandbox {
    pub td: TempDir,
    pub root: PathBuf,
    pub config: PathBuf,
    pub audit_dir: PathBuf,
    pub editor: PathBuf,
    pub edited: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let td = tempfile::tempdir().expect("tempdir");
        let root = fs::canonicalize(td.path()).expect("canonicalize tempdir");
        let files = root.join("files");
        fs::create_dir_all(&files).unwrap();
        let audit_dir = root.join("audit");
        fs::create_dir_all(&audit_dir).unwrap();

        let config = root.join("config.xml");
        fs::write(
            &config,
            format!(
                "<config>\n  <log_level>quiet</log_level>\n  <audit_dir>{}</audit_dir>\n</config>\n",
                audit_dir.display()
            ),
        )
        .unwrap();

        // The "editor" replaces the listing with whatever the test prepared.
        let edited = root.join("edited.txt");
        let editor = root.join("fake-editor.sh");
        fs::write(&editor, format!("#!/bin/sh\ncat '{}' > \"$1\"\n", edited.display())).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&editor, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self {
            td,
            root,
            config,
            audit_dir,
            editor,
            edited,
        }
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join("files")
    }

    /// Create a file in the files dir with the given content; returns its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let p = self.dir().join(name);
        fs::write(&p, content).unwrap();
        p
    }

    /// Set what the fake editor will write back, one path per line.
    pub fn edit_to(&self, lines: &[&Path]) {
        let mut body = String::new();
        for l in lines {
            body.push_str(&l.display().to_string());
            body.push('\n');
        }
        fs::write(&self.edited, body).unwrap();
    }

    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("gmv"));
        cmd.env("GMV_CONFIG", &self.config)
            .env("EDITOR", &self.editor)
            .env_remove("VISUAL");
        cmd
    }

    pub fn audit_logs(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.audit_dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .is_some_and(|n| n.to_string_lossy().starts_with("gmv-log-"))
            })
            .collect()
    }
}

pub fn read(p: &Path) -> String {
    fs::read_to_string(p).unwrap_or_else(|e| panic!("read {}: {e}", p.display()))
}

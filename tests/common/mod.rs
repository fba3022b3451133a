#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the guideline-guard binary.
#[macro_export]
macro_rules! guideline_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("guideline-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Creates a `.guideline-guard.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".guideline-guard.toml", content);
    }

    /// Runs `git` in the fixture root with a throwaway identity.
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Guard Test",
                "-c",
                "user.email=guard@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(self.dir.path())
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {args:?} failed");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A source file no rule objects to.
pub const CLEAN_SOURCE: &str = "#include \"pump.h\"

void Pump::start() {
  running_ = true;
}
";

/// Raw allocation plus a C-style cast: one BLOCKER and one STRONG.
pub const RAW_MALLOC_SOURCE: &str = "void Pump::reset() {
  int* buffer = (int*)malloc(4);
}
";

/// Trailing whitespace only: a single ADVISORY.
pub const TRAILING_SPACE_SOURCE: &str = "int pump_count = 1;   \n";

/// Allocation covered by a well-formed waiver.
pub const WAIVED_SOURCE: &str = "// GUIDELINE-WAIVER: 5.1 pool allocator owns this buffer
void* pool = malloc(64);
";

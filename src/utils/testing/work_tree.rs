use crate::utils::git_ops::{CommandOutput, CommandRunner, SystemRunner};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

type TestResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// scratch working tree in a temporary directory, optionally a git repository
pub struct TestWorkTree {
    path: PathBuf,
    _temp_dir: TempDir,
    _remote_dir: Option<TempDir>,
}

impl TestWorkTree {
    /// plain empty directory
    pub fn new() -> TestResult<Self> {
        let temp_dir = TempDir::new()?;
        Ok(Self {
            path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
            _remote_dir: None,
        })
    }

    /// empty git repository on branch `main` with a test identity
    pub fn with_git() -> TestResult<Self> {
        let tree = Self::new()?;

        tree.git(&["init"])?;
        tree.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
        tree.git(&["config", "user.name", "Repogen Test"])?;
        tree.git(&["config", "user.email", "test@repogen.test"])?;
        // disable GPG signing for tests
        tree.git(&["config", "commit.gpgsign", "false"])?;

        Ok(tree)
    }

    /// attach a fresh bare repository as remote `name`
    pub fn add_bare_remote(&mut self, name: &str) -> TestResult<PathBuf> {
        let remote_dir = TempDir::new()?;
        let remote_path = remote_dir.path().join("remote.git");
        let remote = remote_path.to_string_lossy().to_string();

        let output = SystemRunner::new(remote_dir.path())
            .execute("git", &["init", "--bare", remote.as_str()])?;
        if !output.is_success() {
            return Err(format!("git init --bare failed: {}", output.stderr).into());
        }
        self.git(&["remote", "add", name, remote.as_str()])?;

        self._remote_dir = Some(remote_dir);
        Ok(remote_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// run git in the tree, failing on a non-zero exit
    pub fn git(&self, args: &[&str]) -> TestResult<CommandOutput> {
        let output = SystemRunner::new(&self.path).execute("git", args)?;
        if !output.is_success() {
            return Err(format!("git {} failed: {}", args.join(" "), output.stderr).into());
        }
        Ok(output)
    }

    /// number of commits reachable from HEAD
    pub fn commit_count(&self) -> TestResult<usize> {
        let output = self.git(&["rev-list", "--count", "HEAD"])?;
        Ok(output.stdout.trim().parse()?)
    }

    /// all regular files below the tree, skipping `.git`, sorted
    pub fn files(&self) -> TestResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_files(&self.path, &mut files)?;
        files.sort();
        Ok(files)
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if path.file_name().is_some_and(|name| name == ".git") {
                continue;
            }
            collect_files(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

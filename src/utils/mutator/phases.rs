// individual create / modify / delete / rename passes over the working tree

use super::tracked_set::TrackedSet;
use super::types::RenamedFile;
use crate::error::{Error, Result};
use crate::utils::config::MutatorConfig;
use crate::utils::random::RandomSource;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const RENAME_SUFFIX: RangeInclusive<usize> = 1000..=9999;

/// random printable content with a length drawn from `length`
pub fn random_content(length: RangeInclusive<usize>, rng: &mut dyn RandomSource) -> String {
    let length = rng.in_range(length);
    rng.printable_string(length)
}

fn check_content_length(length: &RangeInclusive<usize>) -> Result<()> {
    if length.is_empty() {
        return Err(Error::InvalidConfig {
            reason: format!(
                "content length range {}..={} is empty",
                length.start(),
                length.end()
            ),
        });
    }
    Ok(())
}

/// create the fan-out directories below `root`, in order
pub fn create_directories(root: &Path, config: &MutatorConfig) -> Result<Vec<PathBuf>> {
    (1..=config.dir_count)
        .map(|n| -> Result<PathBuf> {
            let dir = root.join(format!("{}{}", config.dir_prefix, n));
            fs::create_dir_all(&dir).map_err(|e| Error::directory_create(&dir, e))?;
            Ok(dir)
        })
        .collect()
}

/// populate `root` with `config.file_count` random files
///
/// returns every created path; the first io failure aborts the pass
pub fn create_files(
    root: &Path,
    config: &MutatorConfig,
    rng: &mut dyn RandomSource,
) -> Result<TrackedSet> {
    if config.file_count > 0 && (config.dir_count == 0 || config.extensions.is_empty()) {
        return Err(Error::InvalidConfig {
            reason: "files need at least one directory and one extension".to_string(),
        });
    }
    check_content_length(&config.content_length())?;

    info!(
        "Creating {} files across {} directories...",
        config.file_count, config.dir_count
    );

    let directories = create_directories(root, config)?;
    let mut tracked = TrackedSet::new();

    for i in 1..=config.file_count {
        let directory = &directories[rng.index(directories.len())];
        let extension = &config.extensions[rng.index(config.extensions.len())];
        let file_path = directory.join(format!("file_{}{}", i, extension));

        let content = random_content(config.content_length(), rng);
        fs::write(&file_path, content).map_err(|e| Error::file_write(&file_path, e))?;

        tracked.insert(file_path);
    }

    info!("Created {} files", tracked.len());
    Ok(tracked)
}

/// overwrite up to `count` tracked files with fresh content
///
/// returns the sampled paths, sampled paths missing on disk are skipped
pub fn modify_files(
    tracked: &TrackedSet,
    count: usize,
    content_length: RangeInclusive<usize>,
    rng: &mut dyn RandomSource,
) -> Result<Vec<PathBuf>> {
    check_content_length(&content_length)?;
    info!("Modifying {} files...", count);
    let selected = tracked.sample(count, rng);

    for path in &selected {
        if !path.exists() {
            debug!("skipping missing file {}", path.display());
            continue;
        }
        let content = random_content(content_length.clone(), rng);
        fs::write(path, content).map_err(|e| Error::file_write(path, e))?;
    }

    Ok(selected)
}

/// remove up to `count` tracked files from disk
///
/// the caller must drop the returned paths from the tracked set
pub fn delete_files(
    tracked: &TrackedSet,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<PathBuf>> {
    info!("Deleting {} files...", count);
    let selected = tracked.sample(count, rng);

    for path in &selected {
        if !path.exists() {
            debug!("skipping missing file {}", path.display());
            continue;
        }
        fs::remove_file(path).map_err(|e| Error::FileRemove {
            path: path.clone(),
            source: e,
        })?;
    }

    Ok(selected)
}

/// rename up to `count` tracked files in place, keeping their extension
///
/// the caller must apply the returned renames to the tracked set
pub fn rename_files(
    tracked: &TrackedSet,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<RenamedFile>> {
    info!("Renaming {} files...", count);
    let selected = tracked.sample(count, rng);
    let mut renamed = Vec::with_capacity(selected.len());

    for path in selected {
        if !path.exists() {
            debug!("skipping missing file {}", path.display());
            continue;
        }

        let new_path = rename_target(&path, rng);
        fs::rename(&path, &new_path).map_err(|e| Error::FileRename {
            from: path.clone(),
            to: new_path.clone(),
            source: e,
        })?;

        renamed.push(RenamedFile::new(path, new_path));
    }

    Ok(renamed)
}

/// `renamed_<unix seconds>_<4 digits><ext>` next to `path`, never an existing file
fn rename_target(path: &Path, rng: &mut dyn RandomSource) -> PathBuf {
    let directory = path.parent().unwrap_or_else(|| Path::new(""));
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    loop {
        let candidate = directory.join(format!(
            "renamed_{}_{}{}",
            chrono::Utc::now().timestamp(),
            rng.in_range(RENAME_SUFFIX),
            extension
        ));
        if !candidate.exists() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::RngSource;
    use std::collections::{HashMap, HashSet};
    use tempfile::TempDir;

    fn small_config(file_count: usize, dir_count: usize) -> MutatorConfig {
        MutatorConfig {
            file_count,
            dir_count,
            ..MutatorConfig::default()
        }
    }

    fn snapshot(tracked: &TrackedSet) -> HashMap<PathBuf, Vec<u8>> {
        tracked
            .iter()
            .map(|p| (p.clone(), fs::read(p).unwrap()))
            .collect()
    }

    #[test]
    fn test_create_directories_naming() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = create_directories(temp_dir.path(), &small_config(0, 3)).unwrap();

        assert_eq!(
            dirs,
            vec![
                temp_dir.path().join("dir_new1_11"),
                temp_dir.path().join("dir_new1_12"),
                temp_dir.path().join("dir_new1_13"),
            ]
        );
        assert!(dirs.iter().all(|d| d.is_dir()));
    }

    #[test]
    fn test_create_files_sizes_and_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let config = small_config(40, 4);
        let tracked = create_files(temp_dir.path(), &config, &mut RngSource::seeded(4)).unwrap();

        assert_eq!(tracked.len(), 40);
        for path in tracked.iter() {
            let size = fs::metadata(path).unwrap().len() as usize;
            assert!(config.content_length().contains(&size));

            let ext = format!(".{}", path.extension().unwrap().to_string_lossy());
            assert!(config.extensions.contains(&ext));
            assert!(path.file_name().unwrap().to_string_lossy().starts_with("file_"));
        }
    }

    #[test]
    fn test_create_files_rejects_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let result = create_files(
            temp_dir.path(),
            &small_config(5, 0),
            &mut RngSource::seeded(1),
        );

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_create_files_rejects_inverted_content_length() {
        let temp_dir = TempDir::new().unwrap();
        let config = MutatorConfig {
            content_length_min: 50,
            content_length_max: 5,
            ..small_config(3, 1)
        };

        let result = create_files(temp_dir.path(), &config, &mut RngSource::seeded(1));

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
        assert!(!temp_dir.path().join("dir_new1_11").exists());
    }

    #[test]
    fn test_modify_rejects_inverted_content_length() {
        let temp_dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(2);
        let tracked = create_files(temp_dir.path(), &small_config(3, 1), &mut rng).unwrap();
        let before = snapshot(&tracked);

        #[allow(clippy::reversed_empty_ranges)]
        let result = modify_files(&tracked, 3, 50..=5, &mut rng);

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
        assert_eq!(before, snapshot(&tracked));
    }

    #[test]
    fn test_modify_changes_only_sampled_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = MutatorConfig {
            // long content makes an identical rewrite practically impossible
            content_length_min: 64,
            content_length_max: 64,
            ..small_config(20, 2)
        };
        let mut rng = RngSource::seeded(8);
        let tracked = create_files(temp_dir.path(), &config, &mut rng).unwrap();
        let before = snapshot(&tracked);

        let modified = modify_files(&tracked, 7, config.content_length(), &mut rng).unwrap();
        let modified: HashSet<_> = modified.into_iter().collect();
        assert_eq!(modified.len(), 7);

        let after = snapshot(&tracked);
        for path in tracked.iter() {
            if modified.contains(path) {
                assert_ne!(before[path], after[path]);
            } else {
                assert_eq!(before[path], after[path]);
            }
        }
    }

    #[test]
    fn test_modify_skips_missing_paths() {
        let temp_dir = TempDir::new().unwrap();
        let ghost = temp_dir.path().join("ghost.txt");
        let tracked: TrackedSet = [ghost.clone()].into_iter().collect();

        let modified = modify_files(&tracked, 1, 10..=20, &mut RngSource::seeded(1)).unwrap();

        assert_eq!(modified, vec![ghost.clone()]);
        assert!(!ghost.exists());
    }

    #[test]
    fn test_delete_removes_min_of_count_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(12);
        let mut tracked = create_files(temp_dir.path(), &small_config(6, 2), &mut rng).unwrap();

        let deleted = delete_files(&tracked, 50, &mut rng).unwrap();
        assert_eq!(deleted.len(), 6);
        assert!(deleted.iter().all(|p| !p.exists()));

        tracked.remove_all(&deleted);
        assert!(tracked.is_empty());
    }

    #[test]
    fn test_delete_leaves_others_present() {
        let temp_dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(13);
        let mut tracked = create_files(temp_dir.path(), &small_config(15, 3), &mut rng).unwrap();

        let deleted = delete_files(&tracked, 5, &mut rng).unwrap();
        assert_eq!(deleted.len(), 5);

        tracked.remove_all(&deleted);
        assert_eq!(tracked.len(), 10);
        assert!(tracked.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_rename_preserves_directory_extension_and_content() {
        let temp_dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(21);
        let mut tracked = create_files(temp_dir.path(), &small_config(10, 3), &mut rng).unwrap();
        let before = snapshot(&tracked);

        let renamed = rename_files(&tracked, 4, &mut rng).unwrap();
        assert_eq!(renamed.len(), 4);

        for rename in &renamed {
            assert!(!rename.from.exists());
            assert!(rename.to.exists());
            assert_eq!(rename.from.parent(), rename.to.parent());
            assert_eq!(rename.from.extension(), rename.to.extension());
            assert!(
                rename
                    .to
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .starts_with("renamed_")
            );
            assert_eq!(before[&rename.from], fs::read(&rename.to).unwrap());
        }

        tracked.apply_renames(&renamed);
        assert_eq!(tracked.len(), 10);
        assert!(tracked.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_rename_target_never_clobbers() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("file_1.txt");
        fs::write(&source, "a").unwrap();

        let mut targets = HashSet::new();
        let mut rng = RngSource::seeded(5);
        for _ in 0..20 {
            let target = rename_target(&source, &mut rng);
            fs::write(&target, "taken").unwrap();
            assert!(targets.insert(target));
        }
    }
}

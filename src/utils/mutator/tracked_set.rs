use super::types::RenamedFile;
use crate::utils::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// paths the mutation phases are allowed to touch, in creation order
///
/// the set only changes through `insert`, `remove_all` and `apply_renames`,
/// each of which leaves it consistent in a single call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PathBuf>", into = "Vec<PathBuf>")]
pub struct TrackedSet {
    paths: Vec<PathBuf>,
    // membership index, always holds exactly the entries of `paths`
    index: HashSet<PathBuf>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    /// add a path, ignoring duplicates
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if !self.index.insert(path.clone()) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// drop every listed path, returns how many were tracked
    pub fn remove_all(&mut self, removed: &[PathBuf]) -> usize {
        let removed: HashSet<&PathBuf> = removed
            .iter()
            .filter(|p| self.index.remove(p.as_path()))
            .collect();
        if !removed.is_empty() {
            self.paths.retain(|p| !removed.contains(p));
        }
        removed.len()
    }

    /// swap each renamed path for its new name, keeping its position
    pub fn apply_renames(&mut self, renames: &[RenamedFile]) {
        let targets: HashMap<&PathBuf, &PathBuf> = renames
            .iter()
            .filter(|r| self.index.contains(&r.from))
            .map(|r| (&r.from, &r.to))
            .collect();
        if targets.is_empty() {
            return;
        }

        for path in self.paths.iter_mut() {
            if let Some(to) = targets.get(&*path) {
                self.index.remove(path.as_path());
                *path = (*to).clone();
            }
        }
        self.index.extend(targets.values().map(|to| (*to).clone()));
    }

    /// `min(count, len)` distinct paths, uniformly without replacement
    pub fn sample(&self, count: usize, rng: &mut dyn RandomSource) -> Vec<PathBuf> {
        rng.sample_indices(self.paths.len(), count)
            .into_iter()
            .map(|i| self.paths[i].clone())
            .collect()
    }
}

impl FromIterator<PathBuf> for TrackedSet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = TrackedSet::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

impl From<Vec<PathBuf>> for TrackedSet {
    fn from(paths: Vec<PathBuf>) -> Self {
        paths.into_iter().collect()
    }
}

impl From<TrackedSet> for Vec<PathBuf> {
    fn from(set: TrackedSet) -> Self {
        set.paths
    }
}

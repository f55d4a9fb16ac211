use std::collections::HashSet;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::resume::{ResumeCandidate, UploadedFile};

/// Ordered collection of accepted resumes.
///
/// Validation happens upstream in `services::intake`; the store trusts what
/// it is given.
#[derive(Debug, Default)]
pub struct UploadStore {
    files: Vec<UploadedFile>,
    picker: PickerState,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each candidate under a fresh id, returning the ids in order.
    pub fn add<I>(&mut self, new_files: I) -> Vec<Uuid>
    where
        I: IntoIterator<Item = ResumeCandidate>,
    {
        let start = self.files.len();
        self.files
            .extend(new_files.into_iter().map(UploadedFile::from_candidate));
        self.files[start..].iter().map(|f| f.id).collect()
    }

    /// Drop the entry with `id`. Absent ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// Forget what the picker has seen so the same file can be selected again.
    pub fn reset_input(&mut self) {
        self.picker.reset();
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut PickerState {
        &mut self.picker
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn get(&self, id: Uuid) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(UploadedFile::size).sum()
    }
}

/// Selection state of the file picker.
///
/// A path already selected since the last reset does not fire another
/// selection, mirroring a file input whose value was never cleared.
#[derive(Debug, Default)]
pub struct PickerState {
    selected: HashSet<PathBuf>,
}

impl PickerState {
    /// Returns the paths that count as a new selection, in input order.
    pub fn select<'a, I>(&mut self, paths: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        paths
            .into_iter()
            .filter(|p| self.selected.insert(p.to_path_buf()))
            .map(Path::to_path_buf)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use itertools::{Either::*, Itertools};
use walkdir::WalkDir;

use super::{definitions::IMAGE_EXTENSION, LibError};

/// The image files directly inside one directory, in stacking order.
pub struct ImageFileSet {
    source_dir: PathBuf,
    enumerated: bool,
    enumerated_paths: Vec<PathBuf>,
}

impl ImageFileSet {
    pub fn new(source_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            enumerated: false,
            enumerated_paths: Default::default(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn enumerate_from_fs(&mut self) -> Result<&[PathBuf], LibError> {
        if !self.enumerated {
            self.enumerate_from_fs_inner()?;
            self.enumerated = true;
        }

        Ok(&self.enumerated_paths)
    }

    fn enumerate_from_fs_inner(&mut self) -> Result<(), LibError> {
        if !self.source_dir.is_dir() {
            return Err(LibError::InputDirNotFound(self.source_dir.clone()));
        }

        //depth 1 only: subdirectories are never searched.
        let entries = WalkDir::new(&self.source_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter(|dir_entry_res| match dir_entry_res {
                Ok(dir_entry) => should_keep(dir_entry.path()),
                Err(_) => true,
            });

        let (mut enumerated_paths, errors): (Vec<_>, Vec<_>) =
            entries.partition_map(|dir_entry_res| match dir_entry_res {
                Ok(dir_entry) => Left(dir_entry.into_path()),
                Err(e) => Right(e),
            });

        // An unreadable directory is fatal; there is no partial mode.
        if let Some(source) = errors.into_iter().next() {
            return Err(LibError::Enumeration {
                dir: self.source_dir.clone(),
                source,
            });
        }

        //the file name is the only sort key, so the output is reproducible
        //for identical directory contents.
        enumerated_paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        trace!(
            target: "file_set",
            "Found {} images in {}",
            enumerated_paths.len(),
            self.source_dir.display()
        );

        self.enumerated_paths = enumerated_paths;
        Ok(())
    }

    /// File names of the enumerated images, in order. Empty until
    /// [`ImageFileSet::enumerate_from_fs`] has run.
    pub fn file_names(&self) -> Vec<String> {
        self.enumerated_paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

fn should_keep(path: &Path) -> bool {
    path.is_file() && has_image_extension(path.file_name())
}

pub fn has_image_extension(file_name: Option<&OsStr>) -> bool {
    file_name
        .map(OsStr::to_string_lossy)
        .map(|name| name.to_lowercase().ends_with(IMAGE_EXTENSION))
        .unwrap_or(false)
}

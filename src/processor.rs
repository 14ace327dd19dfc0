//! Rewriting of a source tree into a destination.
//!
//! The destination must be missing or an empty directory. Output is staged in
//! a temporary directory next to the destination and moved into place only
//! once every file has been processed, so a failed run leaves the destination
//! as it found it.

use crate::constants::STAGING_PREFIX;
use crate::error::{Error, Result};
use crate::file::File;
use crate::hooks::run_operations;
use crate::transformations::Transformations;
use log::{debug, error, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Returns whether `path` does not exist or is an empty directory.
pub fn is_dir_empty_or_missing<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(source) => Err(read_error(path, source)),
        Ok(metadata) if metadata.is_dir() => {
            let mut entries = fs::read_dir(path).map_err(|e| read_error(path, e))?;
            Ok(entries.next().is_none())
        }
        Ok(_) => Ok(false),
    }
}

/// Ensures the destination is safe to write to.
///
/// # Errors
/// * `Error::DestinationNotEmptyError` if it exists and is not an empty directory
pub fn ensure_destination_is_empty<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    if !is_dir_empty_or_missing(destination)? {
        error!("Destination {} is not empty, aborting", destination.display());
        return Err(Error::DestinationNotEmptyError {
            destination: destination.display().to_string(),
        });
    }
    Ok(())
}

/// Applies bound [`Transformations`] to a source tree.
pub struct Processor<'a> {
    transformations: &'a Transformations,
    source: PathBuf,
    destination: PathBuf,
}

impl<'a> Processor<'a> {
    pub fn new<S, D>(transformations: &'a Transformations, source: S, destination: D) -> Self
    where
        S: Into<PathBuf>,
        D: Into<PathBuf>,
    {
        Self { transformations, source: source.into(), destination: destination.into() }
    }

    /// Runs the before hooks, rewrites the tree, then runs the after hooks.
    ///
    /// # Flow
    /// 1. Checks the destination is missing or empty, doing nothing otherwise
    /// 2. Runs the before operations
    /// 3. Walks the source in file name order and stages every output file
    /// 4. Moves the staged tree to the destination
    /// 5. Runs the after operations
    pub fn run(&self) -> Result<()> {
        ensure_destination_is_empty(&self.destination)?;

        let source = fs::canonicalize(&self.source).map_err(|e| read_error(&self.source, e))?;

        run_operations(self.transformations.before())?;

        let destination = resolve_destination(&self.destination)?;
        let parent = destination.parent().unwrap_or(Path::new("/"));

        let staging = TempDir::with_prefix_in(STAGING_PREFIX, parent)
            .map_err(|e| write_error(parent, e))?;
        let output = staging.path().join("output");
        fs::create_dir(&output).map_err(|e| write_error(&output, e))?;

        self.rewrite(&source, staging.path(), &output)?;

        if destination.exists() {
            fs::remove_dir(&destination).map_err(|e| write_error(&destination, e))?;
        }
        fs::rename(&output, &destination).map_err(|e| write_error(&destination, e))?;
        info!("Generated {}", destination.display());

        run_operations(self.transformations.after())
    }

    fn rewrite(&self, source: &Path, staging: &Path, output: &Path) -> Result<()> {
        let walker = WalkDir::new(source)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.path() != staging);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source.to_path_buf());
                read_error(&path, e.into())
            })?;
            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                warn!("Skipping {}: not a regular file", entry.path().display());
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| read_error(entry.path(), io::Error::other(e)))?;
            self.process_file(entry.path(), relative_path, output)?;
        }
        Ok(())
    }

    fn process_file(&self, full_path: &Path, relative_path: &Path, output: &Path) -> Result<()> {
        if self.transformations.is_globally_ignored(relative_path)? {
            debug!("Ignoring {}", relative_path.display());
            return Ok(());
        }

        let target = output.join(relative_path);
        if !self.transformations.is_transformed(relative_path)? {
            debug!("Copying {}", relative_path.display());
            create_parent(&target)?;
            fs::copy(full_path, &target).map_err(|e| write_error(&target, e))?;
            return Ok(());
        }

        let metadata = fs::metadata(full_path).map_err(|e| read_error(full_path, e))?;
        let contents = fs::read_to_string(full_path).map_err(|e| read_error(full_path, e))?;
        let file = self.transformations.transform(File::new(full_path, relative_path, contents))?;
        if file.discarded {
            debug!("Discarding {}", relative_path.display());
            return Ok(());
        }

        debug!("Writing {}", relative_path.display());
        create_parent(&target)?;
        fs::write(&target, &file.contents).map_err(|e| write_error(&target, e))?;
        fs::set_permissions(&target, metadata.permissions()).map_err(|e| write_error(&target, e))
    }
}

/// Absolute destination path. Missing parent directories are created.
fn resolve_destination(destination: &Path) -> Result<PathBuf> {
    if destination.exists() {
        return fs::canonicalize(destination).map_err(|e| read_error(destination, e));
    }
    let name = destination.file_name().ok_or_else(|| {
        write_error(destination, io::Error::new(io::ErrorKind::InvalidInput, "invalid destination"))
    })?;
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    let parent = fs::canonicalize(parent).map_err(|e| read_error(parent, e))?;
    Ok(parent.join(name))
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| write_error(parent, e)),
        None => Ok(()),
    }
}

fn read_error(path: &Path, source: io::Error) -> Error {
    Error::ReadError { path: path.display().to_string(), source }
}

fn write_error(path: &Path, source: io::Error) -> Error {
    Error::WriteError { path: path.display().to_string(), source }
}

//! Upload orchestration: take a user-selected `.txt` file, parse it into a
//! [`Recipe`] and save it into private storage.
//!
//! One attempt per call, no retries. Every failure surfaces as an
//! [`UploadError`] whose display string is the user-facing message; storage is
//! left untouched by any failing path.

use std::path::Path;

use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::UploadError;
use crate::model::Recipe;
use crate::parser::parse_recipe_text_with_clock;
use crate::storage::PrivateStorage;

const SYSTEM_CLOCK: SystemClock = SystemClock;

/// Outcome of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadReceipt {
    /// The recipe as persisted, including any collision rename.
    pub recipe: Recipe,
    /// Folder path the recipe was saved under, e.g. `["root", "Recipes"]`.
    pub path: Vec<String>,
}

impl UploadReceipt {
    /// Slash-joined display form of the save path, e.g. `/root/Recipes`.
    pub fn display_path(&self) -> String {
        format!("/{}", self.path.join("/"))
    }

    pub fn success_message(&self) -> String {
        format!(
            "Recipe uploaded successfully! Saved to: {}. Open the recipe browser to view it.",
            self.display_path()
        )
    }
}

/// Runs the upload sequence against a storage collaborator.
pub struct Uploader<'a> {
    storage: &'a dyn PrivateStorage,
    clock: &'a dyn Clock,
    user_id: String,
    preferred_folder: String,
}

impl<'a> Uploader<'a> {
    /// Uploader using the system clock. `preferred_folder` is the subfolder
    /// of `root` preferred as the save destination, usually `Recipes`.
    pub fn new(
        storage: &'a dyn PrivateStorage,
        user_id: impl Into<String>,
        preferred_folder: impl Into<String>,
    ) -> Self {
        Uploader::with_clock(storage, &SYSTEM_CLOCK, user_id, preferred_folder)
    }

    /// Uploader with an explicit clock, for deterministic ids and suffixes.
    pub fn with_clock(
        storage: &'a dyn PrivateStorage,
        clock: &'a dyn Clock,
        user_id: impl Into<String>,
        preferred_folder: impl Into<String>,
    ) -> Self {
        Uploader {
            storage,
            clock,
            user_id: user_id.into(),
            preferred_folder: preferred_folder.into(),
        }
    }

    /// Full upload sequence for a selected file.
    ///
    /// `file` is `None` when nothing was selected. Validation runs before any
    /// read: a missing selection or a non-`.txt` name fails without touching
    /// the filesystem or storage.
    pub async fn upload_file(&self, file: Option<&Path>) -> Result<UploadReceipt, UploadError> {
        let file = file.ok_or(UploadError::NoFileSelected)?;
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(UploadError::NoFileSelected)?;
        if !name.to_lowercase().ends_with(".txt") {
            return Err(UploadError::NotATextFile);
        }

        info!("Reading file {:?}...", name);
        let text = tokio::fs::read_to_string(file)
            .await
            .map_err(UploadError::ReadFailed)?;

        self.upload_text(&text)
    }

    /// Parse already-read text and persist the result. The synchronous tail
    /// of [`upload_file`](Self::upload_file), exposed for callers that bring
    /// their own file handling.
    pub fn upload_text(&self, text: &str) -> Result<UploadReceipt, UploadError> {
        let mut recipe = parse_recipe_text_with_clock(text, self.clock);
        let save_path = self.default_save_path();

        // Non-empty title before the collision check.
        if recipe.title.trim().is_empty() {
            recipe.title = format!("Uploaded Recipe {}", self.clock.now_millis());
        }

        // Collision check covers the destination's direct children only. A
        // failed folder lookup skips the check and lets the save attempt
        // decide.
        if let Some(folder) = self.storage.find_folder(&save_path, &self.user_id) {
            if folder.has_child_titled(&recipe.title) {
                let renamed = format!("{} ({})", recipe.title, self.clock.timestamp_label());
                debug!("title {:?} taken, renaming to {:?}", recipe.title, renamed);
                recipe.title = renamed;
            }
        }

        if !self
            .storage
            .add_private_recipe(&recipe, &save_path, &self.user_id, false)
        {
            return Err(UploadError::AlreadyExists);
        }

        // Session pointers let the next page find what was just saved.
        self.storage.set_save_file_path_to_open(&save_path);
        self.storage.set_recipe_to_open(&recipe);

        info!("saved {:?} under /{}", recipe.title, save_path.join("/"));
        Ok(UploadReceipt {
            recipe,
            path: save_path,
        })
    }

    /// Prefer `root/<preferred_folder>` when it exists, else `root`. A pure
    /// probe; nothing is created.
    fn default_save_path(&self) -> Vec<String> {
        let preferred = vec!["root".to_string(), self.preferred_folder.clone()];
        if self.storage.find_folder(&preferred, &self.user_id).is_some() {
            preferred
        } else {
            vec!["root".to_string()]
        }
    }
}

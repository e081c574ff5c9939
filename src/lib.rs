//! recipe-box: parse plain-text recipe files into structured records, save
//! them into a private folder tree, and browse community recipe cards.

pub mod clock;
pub mod community;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod storage;
pub mod upload;

use std::path::Path;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::community::{build_cards, render_card_list, CommunityClient, RecipeCard, RecipeSummary};
pub use crate::config::AppConfig;
pub use crate::error::{FeedError, UploadError};
pub use crate::model::{Folder, FolderEntry, Recipe, RecipeSource};
pub use crate::parser::{parse_recipe_text, parse_recipe_text_with_clock, write_recipe_text};
pub use crate::storage::{MemoryStorage, PrivateStorage};
pub use crate::upload::{UploadReceipt, Uploader};

/// Upload a recipe text file into `storage` using the given configuration.
///
/// Convenience wrapper around [`Uploader`] for the common case.
pub async fn upload_recipe_file(
    file: &Path,
    storage: &dyn PrivateStorage,
    config: &AppConfig,
) -> Result<UploadReceipt, UploadError> {
    Uploader::new(storage, &config.user_id, &config.preferred_folder)
        .upload_file(Some(file))
        .await
}

/// Fetch the community feed and pair each summary with a configured author.
pub async fn fetch_community_cards(config: &AppConfig) -> Result<Vec<RecipeCard>, FeedError> {
    let client = CommunityClient::from_config(&config.community);
    let summaries = client.fetch_random().await?;
    Ok(build_cards(summaries, &config.community.authors))
}

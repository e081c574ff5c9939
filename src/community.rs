//! Community recipe feed: fetch random recipe summaries from the recipe API,
//! annotate them with display authors, and render cards as markup.
//!
//! Rendering is pure data-to-string; nothing here knows about a live page.

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::CommunityConfig;
use crate::error::FeedError;

/// Shown when the API supplies no image for a recipe.
const FALLBACK_IMAGE: &str = "https://via.placeholder.com/300";

/// One recipe summary as returned by the listing API.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub title: String,
    pub image: String,
}

/// A renderable community card: a summary plus its assigned author and like
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub image: String,
    pub title: String,
    pub author: String,
    pub liked: bool,
}

impl RecipeCard {
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Markup for one card. Title and author come from outside, so both are
    /// escaped.
    pub fn to_html(&self) -> String {
        let like_label = if self.liked { "♥ Liked" } else { "♡ Like" };
        format!(
            concat!(
                "<div class=\"card\">",
                "<img class=\"card-img\" src=\"{src}\" alt=\"{alt}\">",
                "<h3 class=\"card-title\">{title}</h3>",
                "<p class=\"card-author\">@{author}</p>",
                "<button class=\"card-like-btn\">{like}</button>",
                "</div>"
            ),
            src = encode_double_quoted_attribute(&self.image),
            alt = encode_double_quoted_attribute(&self.title),
            title = encode_text(&self.title),
            author = encode_text(&self.author),
            like = like_label,
        )
    }
}

/// Markup for the whole card list.
pub fn render_card_list(cards: &[RecipeCard]) -> String {
    cards.iter().map(RecipeCard::to_html).collect()
}

/// Pair each summary with an author from the configured list, cycling through
/// it by index. Returns the annotated cards instead of mutating shared state.
pub fn build_cards(summaries: Vec<RecipeSummary>, authors: &[String]) -> Vec<RecipeCard> {
    summaries
        .into_iter()
        .enumerate()
        .map(|(i, summary)| RecipeCard {
            image: summary.image,
            title: summary.title,
            author: authors
                .get(i % authors.len().max(1))
                .cloned()
                .unwrap_or_default(),
            liked: false,
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct RandomRecipesResponse {
    #[serde(default)]
    recipes: Vec<ApiRecipe>,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<String>,
}

/// Client for the community recipe listing API.
pub struct CommunityClient {
    http: Client,
    base_url: String,
    api_key: String,
    display_num: u32,
}

impl CommunityClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, display_num: u32) -> Self {
        CommunityClient {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            display_num,
        }
    }

    pub fn from_config(config: &CommunityConfig) -> Self {
        CommunityClient::new(
            config.base_url.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.display_num,
        )
    }

    /// Fetch `display_num` random recipe summaries. Missing or empty image
    /// URLs fall back to a placeholder.
    pub async fn fetch_random(&self) -> Result<Vec<RecipeSummary>, FeedError> {
        let url = format!(
            "{}/recipes/random?number={}",
            self.base_url.trim_end_matches('/'),
            self.display_num
        );
        debug!("fetching community recipes from {}", url);

        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::BadStatus(status.as_u16()));
        }

        let body: RandomRecipesResponse = response.json().await?;
        Ok(body
            .recipes
            .into_iter()
            .map(|r| RecipeSummary {
                title: r.title,
                image: r
                    .image
                    .filter(|i| !i.is_empty())
                    .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            })
            .collect())
    }
}

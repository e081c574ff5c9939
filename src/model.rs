use serde::{Deserialize, Serialize};

/// Where a recipe record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// Created by uploading a plain-text file.
    File,
    /// Imported from the community recipe API.
    Api,
}

/// Canonical recipe record.
///
/// Produced by the text parser and handed off to private storage. Field names
/// serialize camelCase so stored records match the browser-era JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Creation-timestamp-derived id. Locally distinguishing, not globally unique.
    pub id: i64,
    pub title: String,
    pub food_name: String,
    pub description: String,
    pub cover_image: Option<String>,
    /// Parallel to `amounts` and `units`; index i across all three is one
    /// ingredient line.
    pub ingredients: Vec<String>,
    pub amounts: Vec<String>,
    pub units: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub favorite: bool,
    pub rating: f32,
    #[serde(rename = "type")]
    pub source: RecipeSource,
}

impl Recipe {
    /// Empty file-sourced recipe with the documented defaults. The parser
    /// starts from this and overwrites whatever the input supplies.
    pub fn empty(id: i64) -> Self {
        Recipe {
            id,
            title: "New Recipe".to_string(),
            food_name: String::new(),
            description: String::new(),
            cover_image: None,
            ingredients: Vec::new(),
            amounts: Vec::new(),
            units: Vec::new(),
            instructions: Vec::new(),
            tags: Vec::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            favorite: false,
            rating: 0.0,
            source: RecipeSource::File,
        }
    }
}

/// A node in the user's private folder tree.
///
/// The upload path only ever reads `children` to look for title collisions;
/// everything else about the tree belongs to the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub title: String,
    pub children: Vec<FolderEntry>,
}

impl Folder {
    pub fn new(title: impl Into<String>) -> Self {
        Folder {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// True if a direct child (folder or recipe) carries exactly this title.
    pub fn has_child_titled(&self, title: &str) -> bool {
        self.children.iter().any(|c| c.title() == title)
    }
}

/// One direct child of a folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FolderEntry {
    Folder(Folder),
    Recipe(Recipe),
}

impl FolderEntry {
    pub fn title(&self) -> &str {
        match self {
            FolderEntry::Folder(f) => &f.title,
            FolderEntry::Recipe(r) => &r.title,
        }
    }
}

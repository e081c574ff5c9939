//! Private recipe storage, the collaborator the upload path saves into.
//!
//! The upload code only needs the four operations below; what sits behind
//! them (browser localStorage originally, [`MemoryStorage`] here) is the
//! store's business. Operations are synchronous and atomic from the caller's
//! point of view.

use std::sync::Mutex;

use log::debug;

use crate::model::{Folder, FolderEntry, Recipe};

/// Per-user folder tree plus the session-scoped "currently open" pointers.
pub trait PrivateStorage {
    /// Resolve a path like `["root", "Recipes"]` to a folder snapshot.
    /// Absent folders are a normal negative result, not an error.
    fn find_folder(&self, path: &[String], user_id: &str) -> Option<Folder>;

    /// Store a recipe at `path`. With `overwrite` false, a same-titled entry
    /// already present makes this return false and leave the tree untouched.
    fn add_private_recipe(
        &self,
        recipe: &Recipe,
        path: &[String],
        user_id: &str,
        overwrite: bool,
    ) -> bool;

    /// Remember which folder the next page should open.
    fn set_save_file_path_to_open(&self, path: &[String]);

    /// Remember which recipe the next page should open.
    fn set_recipe_to_open(&self, recipe: &Recipe);
}

/// In-memory folder tree for one user. Shared-singleton style: interior
/// mutability behind a mutex so callers hold `&MemoryStorage`.
pub struct MemoryStorage {
    user_id: String,
    inner: Mutex<StorageState>,
}

struct StorageState {
    root: Folder,
    save_file_path_to_open: Option<Vec<String>>,
    recipe_to_open: Option<Recipe>,
}

impl MemoryStorage {
    /// Empty tree containing only the `root` folder.
    pub fn new(user_id: impl Into<String>) -> Self {
        MemoryStorage {
            user_id: user_id.into(),
            inner: Mutex::new(StorageState {
                root: Folder::new("root"),
                save_file_path_to_open: None,
                recipe_to_open: None,
            }),
        }
    }

    /// Tree with `root` plus one named subfolder, the usual starting layout.
    pub fn with_subfolder(user_id: impl Into<String>, subfolder: &str) -> Self {
        let storage = MemoryStorage::new(user_id);
        {
            let mut state = storage.inner.lock().unwrap();
            state
                .root
                .children
                .push(FolderEntry::Folder(Folder::new(subfolder)));
        }
        storage
    }

    /// The "currently open" folder pointer, if an upload has set one.
    pub fn save_file_path_to_open(&self) -> Option<Vec<String>> {
        self.inner.lock().unwrap().save_file_path_to_open.clone()
    }

    /// The "currently open" recipe pointer, if an upload has set one.
    pub fn recipe_to_open(&self) -> Option<Recipe> {
        self.inner.lock().unwrap().recipe_to_open.clone()
    }
}

fn resolve<'a>(root: &'a Folder, path: &[String]) -> Option<&'a Folder> {
    let (first, rest) = path.split_first()?;
    if *first != root.title {
        return None;
    }
    let mut current = root;
    for segment in rest {
        current = current.children.iter().find_map(|c| match c {
            FolderEntry::Folder(f) if f.title == *segment => Some(f),
            _ => None,
        })?;
    }
    Some(current)
}

fn resolve_mut<'a>(root: &'a mut Folder, path: &[String]) -> Option<&'a mut Folder> {
    let (first, rest) = path.split_first()?;
    if *first != root.title {
        return None;
    }
    let mut current = root;
    for segment in rest {
        current = current.children.iter_mut().find_map(|c| match c {
            FolderEntry::Folder(f) if f.title == *segment => Some(f),
            _ => None,
        })?;
    }
    Some(current)
}

impl PrivateStorage for MemoryStorage {
    fn find_folder(&self, path: &[String], user_id: &str) -> Option<Folder> {
        if user_id != self.user_id {
            return None;
        }
        let state = self.inner.lock().unwrap();
        resolve(&state.root, path).cloned()
    }

    fn add_private_recipe(
        &self,
        recipe: &Recipe,
        path: &[String],
        user_id: &str,
        overwrite: bool,
    ) -> bool {
        if user_id != self.user_id {
            return false;
        }
        let mut state = self.inner.lock().unwrap();
        let Some(folder) = resolve_mut(&mut state.root, path) else {
            return false;
        };

        if let Some(existing) = folder
            .children
            .iter_mut()
            .find(|c| c.title() == recipe.title)
        {
            if !overwrite {
                debug!("save rejected, {:?} already holds {:?}", path, recipe.title);
                return false;
            }
            *existing = FolderEntry::Recipe(recipe.clone());
            return true;
        }

        folder.children.push(FolderEntry::Recipe(recipe.clone()));
        true
    }

    fn set_save_file_path_to_open(&self, path: &[String]) {
        self.inner.lock().unwrap().save_file_path_to_open = Some(path.to_vec());
    }

    fn set_recipe_to_open(&self, recipe: &Recipe) {
        self.inner.lock().unwrap().recipe_to_open = Some(recipe.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn find_folder_resolves_nested_paths() {
        let storage = MemoryStorage::with_subfolder("user1", "Recipes");
        assert!(storage.find_folder(&path(&["root"]), "user1").is_some());
        assert!(storage
            .find_folder(&path(&["root", "Recipes"]), "user1")
            .is_some());
        assert!(storage
            .find_folder(&path(&["root", "Desserts"]), "user1")
            .is_none());
        assert!(storage.find_folder(&path(&["Recipes"]), "user1").is_none());
    }

    #[test]
    fn find_folder_checks_user() {
        let storage = MemoryStorage::new("user1");
        assert!(storage.find_folder(&path(&["root"]), "someone-else").is_none());
    }

    #[test]
    fn add_rejects_title_collision_without_overwrite() {
        let storage = MemoryStorage::new("user1");
        let mut recipe = Recipe::empty(1);
        recipe.title = "Soup".to_string();

        assert!(storage.add_private_recipe(&recipe, &path(&["root"]), "user1", false));
        assert!(!storage.add_private_recipe(&recipe, &path(&["root"]), "user1", false));

        let root = storage.find_folder(&path(&["root"]), "user1").unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn add_with_overwrite_replaces_in_place() {
        let storage = MemoryStorage::new("user1");
        let mut recipe = Recipe::empty(1);
        recipe.title = "Soup".to_string();
        storage.add_private_recipe(&recipe, &path(&["root"]), "user1", false);

        let mut updated = recipe.clone();
        updated.description = "richer".to_string();
        assert!(storage.add_private_recipe(&updated, &path(&["root"]), "user1", true));

        let root = storage.find_folder(&path(&["root"]), "user1").unwrap();
        assert_eq!(root.children.len(), 1);
        match &root.children[0] {
            FolderEntry::Recipe(r) => assert_eq!(r.description, "richer"),
            other => panic!("expected recipe entry, got {:?}", other),
        }
    }

    #[test]
    fn add_into_missing_folder_fails() {
        let storage = MemoryStorage::new("user1");
        let recipe = Recipe::empty(1);
        assert!(!storage.add_private_recipe(&recipe, &path(&["root", "Nope"]), "user1", false));
    }

    #[test]
    fn session_pointers_round_trip() {
        let storage = MemoryStorage::new("user1");
        assert!(storage.save_file_path_to_open().is_none());
        assert!(storage.recipe_to_open().is_none());

        let recipe = Recipe::empty(7);
        storage.set_save_file_path_to_open(&path(&["root", "Recipes"]));
        storage.set_recipe_to_open(&recipe);

        assert_eq!(
            storage.save_file_path_to_open(),
            Some(path(&["root", "Recipes"]))
        );
        assert_eq!(storage.recipe_to_open().unwrap().id, 7);
    }
}

//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.
//!
//! Ids come from a counter that only moves forward, like a serial column:
//! a deleted id is never handed out again.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    FavouriteRecipe, NewFavourite, NewNote, NewUser, Note, NoteId, Recipe, RecipeId, User, UserId,
};
use crate::domain::ports::{NoteRepository, RecipeRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    last_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.last_id.fetch_max(user.id.0, Ordering::SeqCst);
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn user_exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.users.read().unwrap().contains_key(&id))
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().unwrap().get(&id).cloned())
    }

    async fn add_new_user(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().unwrap();

        if users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Database(format!(
                "duplicate key value violates unique constraint: email {}",
                new_user.email
            )));
        }

        let id = UserId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let user = User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            image_url: new_user.image_url.clone(),
        };
        users.insert(id, user.clone());

        Ok(user)
    }
}

// ============================================================================
// In-Memory Recipe Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<RwLock<BTreeMap<RecipeId, Recipe>>>,
    favourites: Arc<RwLock<BTreeSet<(UserId, RecipeId)>>>,
    last_id: AtomicI32,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a recipe nobody has favourited
    pub fn with_recipe(self, recipe: Recipe) -> Self {
        self.last_id.fetch_max(recipe.id.0, Ordering::SeqCst);
        self.recipes.write().unwrap().insert(recipe.id, recipe);
        self
    }

    /// Pre-populate with a recipe in a user's favourites
    pub fn with_favourite(self, user_id: UserId, recipe: Recipe) -> Self {
        self.favourites.write().unwrap().insert((user_id, recipe.id));
        self.with_recipe(recipe)
    }

    /// Number of stored recipes
    pub fn recipe_count(&self) -> usize {
        self.recipes.read().unwrap().len()
    }

    /// Number of stored favourite links
    pub fn favourite_count(&self) -> usize {
        self.favourites.read().unwrap().len()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn recipe_id_by_title(&self, title: &str) -> Result<Option<RecipeId>, DomainError> {
        let recipes = self.recipes.read().unwrap();
        Ok(recipes.values().find(|r| r.title == title).map(|r| r.id))
    }

    async fn recipe_exists_in_fav(
        &self,
        title: &str,
        user_id: UserId,
    ) -> Result<bool, DomainError> {
        let recipes = self.recipes.read().unwrap();
        let favourites = self.favourites.read().unwrap();

        Ok(favourites.iter().any(|(uid, rid)| {
            *uid == user_id && recipes.get(rid).is_some_and(|r| r.title == title)
        }))
    }

    async fn add_recipe(&self, favourite: &NewFavourite) -> Result<FavouriteRecipe, DomainError> {
        let mut recipes = self.recipes.write().unwrap();
        let mut favourites = self.favourites.write().unwrap();

        if recipes.values().any(|r| r.title == favourite.title) {
            return Err(DomainError::Database(format!(
                "duplicate key value violates unique constraint: title {}",
                favourite.title
            )));
        }

        let id = RecipeId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let recipe = Recipe {
            id,
            title: favourite.title.clone(),
            ingredients: favourite.ingredients.clone(),
            instructions: favourite.instructions.clone(),
        };
        recipes.insert(id, recipe.clone());
        favourites.insert((favourite.user_id, id));

        Ok(FavouriteRecipe::from_recipe(recipe, Some(favourite.user_id)))
    }

    async fn add_recipe_to_user(&self, user: &User, title: &str) -> Result<(), DomainError> {
        let recipe_id = self
            .recipe_id_by_title(title)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Recipe '{}'", title)))?;

        self.favourites.write().unwrap().insert((user.id, recipe_id));
        Ok(())
    }

    async fn get_favourite_recipe(
        &self,
        id: RecipeId,
    ) -> Result<Option<FavouriteRecipe>, DomainError> {
        let recipes = self.recipes.read().unwrap();
        Ok(recipes
            .get(&id)
            .cloned()
            .map(|r| FavouriteRecipe::from_recipe(r, None)))
    }

    async fn get_favs_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FavouriteRecipe>, DomainError> {
        let recipes = self.recipes.read().unwrap();
        let favourites = self.favourites.read().unwrap();

        Ok(favourites
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .filter_map(|(_, rid)| recipes.get(rid).cloned())
            .map(|r| FavouriteRecipe::from_recipe(r, Some(user_id)))
            .collect())
    }

    async fn delete_favourite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .favourites
            .write()
            .unwrap()
            .remove(&(user_id, recipe_id)))
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        Ok(self.recipes.read().unwrap().get(&id).cloned())
    }
}

// ============================================================================
// In-Memory Note Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<BTreeMap<NoteId, Note>>>,
    last_id: AtomicI32,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a note for testing
    pub fn with_note(self, note: Note) -> Self {
        self.last_id.fetch_max(note.id.0, Ordering::SeqCst);
        self.notes.write().unwrap().insert(note.id, note);
        self
    }

    /// Number of stored notes
    pub fn note_count(&self) -> usize {
        self.notes.read().unwrap().len()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn get_notes(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().unwrap();
        Ok(notes
            .values()
            .filter(|n| n.user_id == user_id && n.recipe_id == recipe_id)
            .cloned()
            .collect())
    }

    async fn get_note(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        Ok(self.notes.read().unwrap().get(&id).cloned())
    }

    async fn note_exists_by_id(&self, id: NoteId) -> Result<bool, DomainError> {
        Ok(self.notes.read().unwrap().contains_key(&id))
    }

    async fn add_note(
        &self,
        note: &NewNote,
        user: &User,
        recipe: &Recipe,
    ) -> Result<Note, DomainError> {
        let mut notes = self.notes.write().unwrap();

        let id = NoteId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let created = Note {
            id,
            note_text: note.note_text.clone(),
            user_id: user.id,
            recipe_id: recipe.id,
        };
        notes.insert(id, created.clone());

        Ok(created)
    }

    async fn delete_note(&self, id: NoteId) -> Result<bool, DomainError> {
        Ok(self.notes.write().unwrap().remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_favourite, new_note, test_recipe, test_user};

    #[tokio::test]
    async fn deleted_note_id_is_not_reused() {
        let repo = InMemoryNoteRepository::new();
        let (user, recipe) = (test_user(), test_recipe());

        let first = repo
            .add_note(&new_note(user.id, recipe.id), &user, &recipe)
            .await
            .unwrap();
        assert!(repo.delete_note(first.id).await.unwrap());
        let second = repo
            .add_note(&new_note(user.id, recipe.id), &user, &recipe)
            .await
            .unwrap();

        assert_ne!(second.id, first.id);
        assert!(!repo.delete_note(first.id).await.unwrap());
        assert_eq!(repo.note_count(), 1);
    }

    #[tokio::test]
    async fn new_ids_follow_prepopulated_ones() {
        let repo = InMemoryRecipeRepository::new().with_recipe(test_recipe());

        let created = repo.add_recipe(&new_favourite(UserId(1))).await.unwrap();

        assert_eq!(created.recipe_id, RecipeId(2));
    }

    #[tokio::test]
    async fn user_ids_start_at_one() {
        let repo = InMemoryUserRepository::new();

        let user = repo.add_new_user(&crate::test_utils::new_user()).await.unwrap();

        assert_eq!(user.id, UserId(1));
    }
}

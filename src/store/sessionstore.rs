use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    models::{
        propertymodel::Property,
        sessionmodel::{Language, SessionState, Theme},
    },
    service::error::ServiceError,
    store::ListingStore,
};

#[async_trait]
pub trait SessionExt {
    /// Current state for the session, created on first touch.
    async fn get_session(&self, session_id: Uuid) -> SessionState;

    /// Adds the property to the session favorites, or removes it when
    /// already present. Returns whether it is a favorite afterwards.
    async fn toggle_favorite(
        &self,
        session_id: Uuid,
        property_id: Uuid,
    ) -> Result<(bool, SessionState), ServiceError>;

    /// Favorited properties in catalogue order.
    async fn get_favorite_properties(&self, session_id: Uuid) -> Vec<Property>;

    async fn update_preferences(
        &self,
        session_id: Uuid,
        language: Option<Language>,
        theme: Option<Theme>,
    ) -> SessionState;
}

#[async_trait]
impl SessionExt for ListingStore {
    async fn get_session(&self, session_id: Uuid) -> SessionState {
        self.sessions
            .write()
            .await
            .entry(session_id)
            .or_insert_with(|| SessionState::new(session_id))
            .clone()
    }

    async fn toggle_favorite(
        &self,
        session_id: Uuid,
        property_id: Uuid,
    ) -> Result<(bool, SessionState), ServiceError> {
        let known = {
            self.properties
                .read()
                .await
                .iter()
                .any(|property| property.id == property_id)
        };
        if !known {
            return Err(ServiceError::PropertyNotFound(property_id));
        }

        let mut sessions = self.sessions.write().await;
        let state = sessions
            .entry(session_id)
            .or_insert_with(|| SessionState::new(session_id));

        let is_favorite = if state.favorites.remove(&property_id) {
            false
        } else {
            state.favorites.insert(property_id);
            true
        };

        Ok((is_favorite, state.clone()))
    }

    async fn get_favorite_properties(&self, session_id: Uuid) -> Vec<Property> {
        let favorites = match self.sessions.read().await.get(&session_id) {
            Some(state) => state.favorites.clone(),
            None => return vec![],
        };

        self.properties
            .read()
            .await
            .iter()
            .filter(|property| favorites.contains(&property.id))
            .cloned()
            .collect()
    }

    async fn update_preferences(
        &self,
        session_id: Uuid,
        language: Option<Language>,
        theme: Option<Theme>,
    ) -> SessionState {
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .entry(session_id)
            .or_insert_with(|| SessionState::new(session_id));

        if let Some(language) = language {
            state.language = language;
        }
        if let Some(theme) = theme {
            state.theme = theme;
        }

        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggling_twice_restores_prior_state() {
        let store = ListingStore::seeded();
        let session_id = Uuid::new_v4();
        let property_id = store.properties.read().await[0].id;

        let (on, _) = store.toggle_favorite(session_id, property_id).await.unwrap();
        assert!(on);
        assert_eq!(store.get_favorite_properties(session_id).await.len(), 1);

        let (off, state) = store.toggle_favorite(session_id, property_id).await.unwrap();
        assert!(!off);
        assert!(state.favorites.is_empty());
        assert!(store.get_favorite_properties(session_id).await.is_empty());
    }

    #[tokio::test]
    async fn favoriting_an_unknown_property_fails() {
        let store = ListingStore::seeded();

        let err = store
            .toggle_favorite(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::PropertyNotFound(_)));
    }

    #[tokio::test]
    async fn preferences_update_only_what_was_sent() {
        let store = ListingStore::seeded();
        let session_id = Uuid::new_v4();

        let state = store
            .update_preferences(session_id, Some(Language::Ar), None)
            .await;
        assert_eq!(state.language, Language::Ar);
        assert_eq!(state.theme, Theme::Light);

        let state = store
            .update_preferences(session_id, None, Some(Theme::Dark))
            .await;
        assert_eq!(state.language, Language::Ar);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = ListingStore::seeded();
        let property_id = store.properties.read().await[0].id;

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        store.toggle_favorite(first, property_id).await.unwrap();

        assert!(store.get_favorite_properties(second).await.is_empty());
    }
}

use std::collections::HashSet;
use std::sync::Arc;

use crackers_storefront::{
    auth::{AuthStore, LoginRequest, RegisterRequest},
    catalog::Catalog,
    error::AppError,
    language::LanguageStore,
    models::Language,
    storage::{LANGUAGE_KEY, MemoryStore, SnapshotStore, USER_KEY},
};

#[test]
fn catalog_ids_are_unique_and_related_lists_resolve() {
    let catalog = Catalog::builtin();
    let products = catalog.list_all();
    assert_eq!(products.len(), 10);

    let ids: HashSet<u32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), products.len());

    for product in products {
        for rid in &product.related {
            assert!(
                catalog.by_id(*rid).is_some(),
                "product {} references unknown related id {}",
                product.id,
                rid
            );
        }
    }

    let related = catalog.related_to(1);
    let related_ids: Vec<u32> = related.iter().map(|p| p.id).collect();
    assert_eq!(related_ids, vec![2, 3, 5]);
    assert!(catalog.related_to(999).is_empty());
}

#[test]
fn catalog_category_lookups() {
    let catalog = Catalog::builtin();

    let gift_packs = catalog.by_category("Gift Packs & Novelties");
    let gift_ids: Vec<u32> = gift_packs.iter().map(|p| p.id).collect();
    assert_eq!(gift_ids, vec![1, 8, 10]);

    assert!(catalog.by_category("No Such Category").is_empty());

    let categories = catalog.categories();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0], "Gift Packs & Novelties");
}

#[test]
fn language_defaults_persists_and_rehydrates() -> anyhow::Result<()> {
    let storage: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());

    let mut language = LanguageStore::new(Arc::clone(&storage), Language::En);
    assert_eq!(language.current(), Language::En);

    language.set(Language::Ta);
    assert_eq!(storage.load(LANGUAGE_KEY)?.as_deref(), Some("ta"));

    let rehydrated = LanguageStore::new(Arc::clone(&storage), Language::En);
    assert_eq!(rehydrated.current(), Language::Ta);
    Ok(())
}

#[test]
fn unknown_language_code_falls_back_to_default() -> anyhow::Result<()> {
    let storage: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
    storage.save(LANGUAGE_KEY, "fr")?;

    let language = LanguageStore::new(storage, Language::En);
    assert_eq!(language.current(), Language::En);
    Ok(())
}

#[test]
fn login_persists_a_session_marker() -> anyhow::Result<()> {
    let storage: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());

    let mut auth = AuthStore::new(Arc::clone(&storage));
    assert!(!auth.is_authenticated());

    let user = auth
        .login(LoginRequest {
            email: "asha@example.com".into(),
            password: "secret".into(),
        })
        .map(|u| u.clone())?;
    assert_eq!(user.email, "asha@example.com");
    assert!(auth.is_authenticated());
    assert!(storage.load(USER_KEY)?.is_some());

    // A fresh store sees the persisted session.
    let rehydrated = AuthStore::new(Arc::clone(&storage));
    assert!(rehydrated.is_authenticated());
    assert_eq!(rehydrated.current_user().map(|u| u.email.as_str()), Some("asha@example.com"));

    let mut auth = rehydrated;
    auth.logout();
    assert!(!auth.is_authenticated());
    assert!(storage.load(USER_KEY)?.is_none());
    Ok(())
}

#[test]
fn login_rejects_missing_fields() {
    let mut auth = AuthStore::new(Arc::new(MemoryStore::new()));
    let err = auth
        .login(LoginRequest {
            email: String::new(),
            password: String::new(),
        })
        .expect_err("empty credentials must be rejected");

    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["email", "password"]);
    assert!(!auth.is_authenticated());
}

#[test]
fn register_requires_matching_passwords() {
    let mut auth = AuthStore::new(Arc::new(MemoryStore::new()));
    let err = auth
        .register(RegisterRequest {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        })
        .expect_err("mismatched passwords must be rejected");
    assert!(matches!(err, AppError::Validation(_)));

    let user = auth
        .register(RegisterRequest {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            password: "one".into(),
            confirm_password: "one".into(),
        })
        .map(|u| u.clone())
        .expect("valid registration");
    assert_eq!(user.name, "Asha");
    assert!(auth.is_authenticated());
}

#[test]
fn corrupted_user_snapshot_means_signed_out() -> anyhow::Result<()> {
    let storage: Arc<dyn SnapshotStore> = Arc::new(MemoryStore::new());
    storage.save(USER_KEY, "not json at all")?;

    let auth = AuthStore::new(storage);
    assert!(!auth.is_authenticated());
    Ok(())
}

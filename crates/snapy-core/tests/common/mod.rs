use serde_json::json;
use snapy_core::ops::{project_ops, user_ops};
use snapy_core::{NewProject, NewTemplate, NewUser, Project, Store, StoreConfig, User};

/// Create a new empty Store for testing (no sample templates)
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create an empty Store with the given config
#[allow(dead_code)]
pub fn store_with(config: StoreConfig) -> Store {
    Store::with_config(config)
}

/// Register a user whose email is derived from the username
#[allow(dead_code)]
pub fn create_test_user(store: &mut Store, username: &str) -> User {
    user_ops::create_user(
        store,
        NewUser::new(username, format!("{username}@example.com"), "pw"),
    )
    .unwrap()
}

/// Create a project with default dimensions
#[allow(dead_code)]
pub fn create_test_project(store: &mut Store, user_id: &str, title: &str) -> Project {
    project_ops::create_project(store, NewProject::new(user_id, title))
}

/// A template payload in the given category
#[allow(dead_code)]
pub fn sample_template(title: &str, category: &str, is_premium: bool) -> NewTemplate {
    NewTemplate {
        title: title.to_string(),
        description: None,
        category: category.to_string(),
        canvas_data: json!({"version": "5.3.0", "objects": []}),
        thumbnail: "data:image/png;base64,AAAA".to_string(),
        width: None,
        height: None,
        is_premium,
    }
}

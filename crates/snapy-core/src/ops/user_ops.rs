use chrono::Utc;

use super::store::{new_id, Store};
use crate::errors::{Result, SnapyError};
use crate::model::{NewUser, Plan, User, UserPatch};

/// Register a new user
///
/// New users start on the free plan with the configured free quota, no
/// usage and no billing references.
///
/// # Errors
/// * `DuplicateUsername` - If another user already has this username
/// * `DuplicateEmail` - If another user already has this email
pub fn create_user(store: &mut Store, new: NewUser) -> Result<User> {
    if store.get_user_by_username(&new.username).is_some() {
        return Err(SnapyError::DuplicateUsername {
            username: new.username,
        });
    }
    if store.get_user_by_email(&new.email).is_some() {
        return Err(SnapyError::DuplicateEmail { email: new.email });
    }

    let user = User {
        id: new_id(),
        username: new.username,
        email: new.email,
        password: new.password,
        plan: Plan::Free,
        ai_generations_used: 0,
        ai_generations_limit: store.config.plans.limit_for(Plan::Free),
        billing_customer_id: None,
        billing_subscription_id: None,
        created_at: Utc::now(),
    };

    tracing::debug!(user_id = %user.id, "user created");
    store.users.insert(user.id.clone(), user.clone());
    Ok(user)
}

/// Apply a patch to a user and return the merged record
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
pub fn update_user(store: &mut Store, id: &str, patch: UserPatch) -> Result<User> {
    let user = store
        .users
        .get_mut(id)
        .ok_or_else(|| SnapyError::UserNotFound {
            user_id: id.to_string(),
        })?;

    patch.apply_to(user);
    Ok(user.clone())
}

/// Record payment-provider references
///
/// Keeps the existing subscription reference when `subscription_id` is
/// `None`.
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
pub fn update_user_billing(
    store: &mut Store,
    id: &str,
    customer_id: String,
    subscription_id: Option<String>,
) -> Result<User> {
    update_user(
        store,
        id,
        UserPatch {
            billing_customer_id: Some(customer_id),
            billing_subscription_id: subscription_id,
            ..Default::default()
        },
    )
}

/// Overwrite the AI usage counter
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
pub fn update_user_ai_usage(store: &mut Store, id: &str, used: u32) -> Result<User> {
    update_user(
        store,
        id,
        UserPatch {
            ai_generations_used: Some(used),
            ..Default::default()
        },
    )
}

/// Move a user to `plan` with an explicit quota, resetting usage to zero
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
pub fn update_user_plan(store: &mut Store, id: &str, plan: Plan, limit: u32) -> Result<User> {
    update_user(
        store,
        id,
        UserPatch {
            plan: Some((plan, limit)),
            ..Default::default()
        },
    )
}

/// Move a user to `plan` using the configured quota for that plan
///
/// Invoked once the payment provider has confirmed an upgrade; no payment
/// verification happens here.
///
/// # Errors
/// * `UserNotFound` - If the user doesn't exist
pub fn change_plan(store: &mut Store, id: &str, plan: Plan) -> Result<User> {
    let limit = store.config.plans.limit_for(plan);
    let user = update_user_plan(store, id, plan, limit)?;
    tracing::debug!(user_id = %id, plan = %plan, limit, "plan changed");
    Ok(user)
}

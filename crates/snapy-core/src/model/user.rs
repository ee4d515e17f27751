use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snapy_core_types::Sensitive;
use std::fmt;
use std::str::FromStr;

use crate::errors::SnapyError;

/// Subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = SnapyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "enterprise" => Ok(Plan::Enterprise),
            other => Err(SnapyError::InvalidValue {
                field: "plan",
                value: other.to_string(),
            }),
        }
    }
}

/// A registered account
///
/// Owns projects and assets. The password is redacted in Debug output and
/// never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: Sensitive<String>,
    pub plan: Plan,
    pub ai_generations_used: u32,
    pub ai_generations_limit: u32,
    /// Payment provider customer reference
    pub billing_customer_id: Option<String>,
    /// Payment provider subscription reference
    pub billing_subscription_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Generations left before the quota is exhausted
    pub fn remaining_generations(&self) -> u32 {
        self.ai_generations_limit
            .saturating_sub(self.ai_generations_used)
    }

    pub fn has_generations_left(&self) -> bool {
        self.ai_generations_used < self.ai_generations_limit
    }
}

/// Fields supplied by the caller when registering a user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: Sensitive<String>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Sensitive::new(password.into()),
        }
    }
}

/// Mutable subset of a user
///
/// Identity (id, username, email) cannot be patched. Setting `plan`
/// resets `ai_generations_used` to zero, overriding any usage value in the
/// same patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub plan: Option<(Plan, u32)>,
    pub ai_generations_used: Option<u32>,
    pub billing_customer_id: Option<String>,
    pub billing_subscription_id: Option<String>,
}

impl UserPatch {
    pub(crate) fn apply_to(self, user: &mut User) {
        if let Some(used) = self.ai_generations_used {
            user.ai_generations_used = used;
        }
        if let Some(customer) = self.billing_customer_id {
            user.billing_customer_id = Some(customer);
        }
        if let Some(subscription) = self.billing_subscription_id {
            user.billing_subscription_id = Some(subscription);
        }
        if let Some((plan, limit)) = self.plan {
            user.plan = plan;
            user.ai_generations_limit = limit;
            user.ai_generations_used = 0;
        }
    }
}

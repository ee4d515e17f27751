use thiserror::Error;

/// Result type alias using SnapyError
pub type Result<T> = std::result::Result<T, SnapyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A stable classification of every error the store can raise. Each kind
/// maps to a stable code usable by the HTTP layer and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Quota
    QuotaExhausted,

    // Integration/IO
    Io,
    Serialization,
    Config,
    Concurrency,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::QuotaExhausted => "ERR_QUOTA_EXHAUSTED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification fields for programmatic handling plus
/// context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Snapy store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapyError {
    // ===== Not found =====
    /// User not found in store
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    /// Project not found in store
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: String },

    /// Template not found in store
    #[error("Template not found: {template_id}")]
    TemplateNotFound { template_id: String },

    // ===== Constraint violations =====
    /// Another user already holds this username
    #[error("Username already taken: {username}")]
    DuplicateUsername { username: String },

    /// Another user already holds this email
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    // ===== Quota =====
    /// User has used every AI generation their plan allows
    #[error("AI generation limit reached for user {user_id}: {used}/{limit}")]
    QuotaExhausted {
        user_id: String,
        used: u32,
        limit: u32,
    },

    // ===== Validation =====
    /// A value could not be parsed into its typed form
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    // ===== Integration =====
    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File system error while loading configuration
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON/TOML rendering failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The shared store guard was poisoned by a panicking writer
    #[error("Store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl From<SnapyError> for ExError {
    fn from(err: SnapyError) -> Self {
        match err {
            SnapyError::UserNotFound { user_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(user_id)
                .with_message("User not found"),

            SnapyError::ProjectNotFound { project_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(project_id)
                .with_message("Project not found"),

            SnapyError::TemplateNotFound { template_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(template_id)
                .with_message("Template not found"),

            SnapyError::DuplicateUsername { username } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_op("create_user")
                    .with_message(format!("Username '{}' already taken", username))
            }

            SnapyError::DuplicateEmail { email } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("create_user")
                .with_message(format!("Email '{}' already registered", email)),

            SnapyError::QuotaExhausted {
                user_id,
                used,
                limit,
            } => ExError::new(ExErrorKind::QuotaExhausted)
                .with_entity_id(user_id)
                .with_message(format!("AI generation limit reached ({}/{})", used, limit)),

            SnapyError::InvalidValue { field, value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid {}: {}", field, value)),

            SnapyError::Config { message } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }

            SnapyError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),

            SnapyError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            SnapyError::StoreUnavailable { reason } => {
                ExError::new(ExErrorKind::Concurrency).with_message(reason)
            }
        }
    }
}

impl From<serde_json::Error> for SnapyError {
    fn from(err: serde_json::Error) -> Self {
        SnapyError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SnapyError {
    fn from(err: toml::de::Error) -> Self {
        SnapyError::Config {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for SnapyError {
    fn from(err: toml::ser::Error) -> Self {
        SnapyError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SnapyError {
    fn from(err: std::io::Error) -> Self {
        SnapyError::Io {
            message: err.to_string(),
        }
    }
}

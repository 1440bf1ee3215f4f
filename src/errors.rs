use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortgicError {
    /// Externally supplied identifier failed the format check.
    InvalidFormat(String),
    /// Well-formed identifier with no stored record.
    NotFound(String),
    /// Target already mapped; payload is the existing identifier.
    DuplicateTarget(String),
    /// Identifier space saturated at the configured length.
    AllocationExhausted(String),
    /// Store-level transactional failure, including lost races.
    PersistenceFailure(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    Validation(String),
    Serialization(String),
}

impl ShortgicError {
    pub fn code(&self) -> &'static str {
        match self {
            ShortgicError::InvalidFormat(_) => "E001",
            ShortgicError::NotFound(_) => "E002",
            ShortgicError::DuplicateTarget(_) => "E003",
            ShortgicError::AllocationExhausted(_) => "E004",
            ShortgicError::PersistenceFailure(_) => "E005",
            ShortgicError::DatabaseConfig(_) => "E006",
            ShortgicError::DatabaseConnection(_) => "E007",
            ShortgicError::Validation(_) => "E008",
            ShortgicError::Serialization(_) => "E009",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ShortgicError::InvalidFormat(_) => "Invalid Link Format",
            ShortgicError::NotFound(_) => "Resource Not Found",
            ShortgicError::DuplicateTarget(_) => "Duplicate Target URL",
            ShortgicError::AllocationExhausted(_) => "Link Allocation Exhausted",
            ShortgicError::PersistenceFailure(_) => "Persistence Failure",
            ShortgicError::DatabaseConfig(_) => "Database Configuration Error",
            ShortgicError::DatabaseConnection(_) => "Database Connection Error",
            ShortgicError::Validation(_) => "Validation Error",
            ShortgicError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ShortgicError::InvalidFormat(msg) => msg,
            ShortgicError::NotFound(msg) => msg,
            ShortgicError::DuplicateTarget(msg) => msg,
            ShortgicError::AllocationExhausted(msg) => msg,
            ShortgicError::PersistenceFailure(msg) => msg,
            ShortgicError::DatabaseConfig(msg) => msg,
            ShortgicError::DatabaseConnection(msg) => msg,
            ShortgicError::Validation(msg) => msg,
            ShortgicError::Serialization(msg) => msg,
        }
    }

    /// Server-side faults, as opposed to caller mistakes.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            ShortgicError::AllocationExhausted(_)
                | ShortgicError::PersistenceFailure(_)
                | ShortgicError::DatabaseConfig(_)
                | ShortgicError::DatabaseConnection(_)
                | ShortgicError::Serialization(_)
        )
    }
}

impl fmt::Display for ShortgicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for ShortgicError {}

impl ShortgicError {
    pub fn invalid_format<T: Into<String>>(msg: T) -> Self {
        ShortgicError::InvalidFormat(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortgicError::NotFound(msg.into())
    }

    /// `existing_link` is the identifier already mapped to the target.
    pub fn duplicate_target<T: Into<String>>(existing_link: T) -> Self {
        ShortgicError::DuplicateTarget(existing_link.into())
    }

    pub fn allocation_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortgicError::AllocationExhausted(msg.into())
    }

    pub fn persistence_failure<T: Into<String>>(msg: T) -> Self {
        ShortgicError::PersistenceFailure(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortgicError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortgicError::DatabaseConnection(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortgicError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortgicError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for ShortgicError {
    fn from(err: sea_orm::DbErr) -> Self {
        ShortgicError::PersistenceFailure(err.to_string())
    }
}

impl From<std::io::Error> for ShortgicError {
    fn from(err: std::io::Error) -> Self {
        ShortgicError::PersistenceFailure(err.to_string())
    }
}

impl From<serde_json::Error> for ShortgicError {
    fn from(err: serde_json::Error) -> Self {
        ShortgicError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortgicError>;

use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkletError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    DuplicateCode(String),
    NotFound(String),
}

impl LinkletError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkletError::DatabaseConfig(_) => "E001",
            LinkletError::DatabaseConnection(_) => "E002",
            LinkletError::DatabaseOperation(_) => "E003",
            LinkletError::Validation(_) => "E004",
            LinkletError::DuplicateCode(_) => "E005",
            LinkletError::NotFound(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkletError::DatabaseConfig(_) => "Database Configuration Error",
            LinkletError::DatabaseConnection(_) => "Database Connection Error",
            LinkletError::DatabaseOperation(_) => "Database Operation Error",
            LinkletError::Validation(_) => "Validation Error",
            LinkletError::DuplicateCode(_) => "Duplicate Code",
            LinkletError::NotFound(_) => "Resource Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkletError::DatabaseConfig(msg) => msg,
            LinkletError::DatabaseConnection(msg) => msg,
            LinkletError::DatabaseOperation(msg) => msg,
            LinkletError::Validation(msg) => msg,
            LinkletError::DuplicateCode(msg) => msg,
            LinkletError::NotFound(msg) => msg,
        }
    }
}

impl fmt::Display for LinkletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkletError {}

// Convenience constructors
impl LinkletError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkletError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkletError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkletError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkletError::Validation(msg.into())
    }

    pub fn duplicate_code<T: Into<String>>(msg: T) -> Self {
        LinkletError::DuplicateCode(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkletError::NotFound(msg.into())
    }
}

impl From<sea_orm::DbErr> for LinkletError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkletError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(LinkletError::database_config("x").code(), "E001");
        assert_eq!(LinkletError::database_connection("x").code(), "E002");
        assert_eq!(LinkletError::database_operation("x").code(), "E003");
        assert_eq!(LinkletError::validation("x").code(), "E004");
        assert_eq!(LinkletError::duplicate_code("x").code(), "E005");
        assert_eq!(LinkletError::not_found("x").code(), "E006");
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let err = LinkletError::not_found("No such code: abc123");
        assert_eq!(err.to_string(), "Resource Not Found: No such code: abc123");
        assert_eq!(err.error_type(), "Resource Not Found");
        assert_eq!(err.message(), "No such code: abc123");
    }

    #[test]
    fn test_from_db_err() {
        let err: LinkletError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, LinkletError::DatabaseOperation(_)));
        assert_eq!(err.code(), "E003");
    }
}

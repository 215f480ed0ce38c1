use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Collection is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Collection must be sorted by name before searching")]
    PreconditionViolation,

    #[error("Invalid input for '{field}': {reason} (value: '{value}')")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

impl CatalogError {
    /// Short message meant for the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::CapacityExceeded { capacity } => {
                format!("Limite máximo atingido! ({} componentes)", capacity)
            }
            CatalogError::PreconditionViolation => {
                "A lista precisa estar ordenada por NOME antes da busca!".to_string()
            }
            CatalogError::InvalidInput { field, reason, .. } => {
                format!("Entrada inválida em '{}': {}", field, reason)
            }
            CatalogError::IoError(e) => format!("Falha de entrada/saída: {}", e),
            CatalogError::SerializationError(e) => format!("Falha ao gerar JSON: {}", e),
            CatalogError::CsvError(e) => format!("Falha ao gerar CSV: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuração inválida em '{}': {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::CapacityExceeded { .. } => {
                "The collection holds at most 20 components; start a new session to add more"
            }
            CatalogError::PreconditionViolation => "Sort the list by name (menu 3, option 1) first",
            CatalogError::InvalidInput { .. } => "Re-enter the component with a non-empty name",
            CatalogError::IoError(_) => "Check that stdin/stdout are available and the file exists",
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                "Try the default table display format"
            }
            CatalogError::ConfigValidationError { .. } => {
                "Check the TOML configuration file and command line flags"
            }
        }
    }

    /// Errors the session reports and then keeps running after.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CatalogError::CapacityExceeded { .. }
                | CatalogError::PreconditionViolation
                | CatalogError::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

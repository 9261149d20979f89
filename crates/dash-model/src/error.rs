use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required column(s): {} (upload must include: {})", missing.join(", "), required.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },
    #[error("{0}")]
    Message(String),
}

impl DashError {
    /// Build the validation failure for an upload lacking required columns.
    ///
    /// Carries the full required list alongside the missing names so the
    /// caller can show the user exactly what an upload must contain.
    pub fn missing_columns(missing: Vec<String>) -> Self {
        DashError::MissingColumns {
            missing,
            required: crate::schema::required_column_names(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_lists_required_set() {
        let error = DashError::missing_columns(vec!["camp_name".to_string()]);
        let message = error.to_string();
        assert!(message.contains("camp_name"));
        assert!(message.contains("Total_Payout"));
    }
}

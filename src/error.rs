use std::fmt;

#[derive(Debug)]
pub enum ConfirmError {
    /// Localized string lookup failed (missing key, pack error, remote failure)
    StringResolution {
        key: String,
        component: Option<String>,
        detail: String,
    },

    /// Dialog factory refused to build the dialog
    DialogCreation(String),

    /// The form id passed at attach time does not exist in the page snapshot
    FormNotFound { form_id: String },

    /// A changed field carries no label to display
    MissingLabel { field: String },

    /// Page snapshot JSON did not deserialize into the expected model
    SnapshotParse {
        context: String,
        source: serde_json::Error,
    },

    /// Page snapshot JSON is structurally wrong (not a deserialization error)
    SnapshotShape(String),
}

impl fmt::Display for ConfirmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmError::StringResolution {
                key,
                component,
                detail,
            } => match component {
                Some(c) => write!(f, "Failed to load string: {}/{} ({})", c, key, detail),
                None => write!(f, "Failed to load string: {} ({})", key, detail),
            },
            ConfirmError::DialogCreation(msg) => {
                write!(f, "Failed to create confirmation dialog: {}", msg)
            }
            ConfirmError::FormNotFound { form_id } => {
                write!(f, "Form '{}' not found in page snapshot", form_id)
            }
            ConfirmError::MissingLabel { field } => {
                write!(f, "Field '{}' changed but has no label", field)
            }
            ConfirmError::SnapshotParse { context, source } => {
                write!(f, "Snapshot parse error ({}): {}", context, source)
            }
            ConfirmError::SnapshotShape(msg) => {
                write!(f, "Unexpected snapshot structure: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfirmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfirmError::SnapshotParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors produced by the shape generators and mesh validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A generator precondition was violated (zero segments, non-finite radius, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("index {index} out of bounds for mesh with {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },

    #[error("index count {index_count} is not a multiple of 3")]
    IncompleteTriangle { index_count: usize },
}

impl GeomError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotFound>;

/// Every way an address can fail to name a page.
///
/// None of these are recoverable by clamping or wrapping; the caller shows
/// a "not found" page instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("no images in `{category}/{subcategory}`")]
    EmptyGallery {
        category: String,
        subcategory: String,
    },

    #[error("invalid image position `{0}`")]
    InvalidPosition(String),

    #[error("image position {position} is out of range for {len} images")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("no page at `{0}`")]
    UnknownRoute(String),
}

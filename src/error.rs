use crate::{EntityId, LabelId};
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("no entity with id {0}")]
    /// An entity was looked up by an id that was never inserted
    EntityNotFound(EntityId),

    #[error("no label with id {0}")]
    /// A label was looked up by an id the label list does not know about
    LabelNotFound(LabelId),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("No scale pattern named `{name}`. Known patterns are: {known}.")]
    UnknownScalePattern { name: String, known: String },

    #[error("Pitch `{pitch}` is not a recognized note name.")]
    UnknownPitch { pitch: String },

    #[error("String `{name}` not found on instrument `{instrument}`.")]
    StringNotFound { name: String, instrument: String },

    #[error("Cannot render an empty tab. The first measure needs at least one chord.")]
    EmptyTab,

    #[error("No instrument named `{name}`. Try `guitar` or `ukulele`.")]
    UnknownInstrument { name: String },
}

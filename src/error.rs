//! Error types for the diatonic library.

use crate::scale::Quality;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// A note name outside the letter-plus-accidental grammar.
    ///
    /// # Example
    /// ```
    /// use diatonic::Note;
    ///
    /// let err = Note::parse("H").unwrap_err();
    /// assert_eq!(err.to_string(), "Invalid note name: H");
    /// ```
    #[error("Invalid note name: {name}")]
    InvalidNote { name: String },

    /// A scale name that could not be split into a tonic and a quality.
    #[error("Invalid scale name: {name} (expected \"<TONIC> <QUALITY>\")")]
    InvalidScaleName { name: String },

    /// A quality token that is not one of the supported scale qualities.
    #[error("Unknown scale quality: {quality}")]
    UnknownQuality { quality: String },

    /// The tonic cannot carry a scale of the requested quality.
    ///
    /// The tonic may be a perfectly valid note name on its own; the scale is
    /// rejected because its key signature would need double sharps or double
    /// flats (a G# major scale, for example, would be written with an F##).
    #[error("Invalid tonic {tonic} for a {quality} scale: the key signature would need double sharps or double flats")]
    InvalidTonic { tonic: String, quality: Quality },

    /// An unrecognized scale degree name.
    ///
    /// Valid degree names are TONIC, SUPERTONIC, MEDIANT, SUBDOMINANT,
    /// DOMINANT, SUBMEDIANT, and LEADING TONE.
    #[error("Invalid degree name: {degree}")]
    InvalidDegree { degree: String },
}

//! Build musical scales with correct enharmonic spelling.
//!
//! Given a tonic and a quality, this crate derives the ordered seven-note
//! spelling of the scale, its key signature, and named-degree access. Notes
//! are spelled, not reduced to pitch classes: the third of D major is F#,
//! never Gb, and tonics whose key signature would need double sharps or
//! flats (like G# major) are rejected up front.
//!
//! ```
//! use diatonic::Scale;
//!
//! let scale = Scale::new("D MAJOR")?;
//! assert_eq!(scale.ascend(), ["D", "E", "F#", "G", "A", "B", "C#"]);
//!
//! let names: Vec<String> = scale
//!     .key_signature()
//!     .notes()
//!     .iter()
//!     .map(|n| n.to_string())
//!     .collect();
//! assert_eq!(names, ["F#", "C#"]);
//! # Ok::<(), diatonic::TheoryError>(())
//! ```

pub mod error;
pub mod interval;
pub mod key;
pub mod note;
pub mod scale;

pub use error::TheoryError;
pub use interval::Interval;
pub use key::{KeySignature, Mode};
pub use note::{Accidental, Letter, Note};
pub use scale::{Degree, Quality, Scale};

//! # Intervals
//!
//! The from-tonic intervals that major and minor scales are built from, and
//! the resolution of an interval above a tonic to a correctly spelled
//! [`Note`].
//!
//! Spelling is determined by two independent distances: the letter moves by
//! the interval's diatonic step count (a third above D is always some F, a
//! seventh above G# is always some F), and the accidental absorbs whatever
//! chromatic adjustment is left over. Working in letters first is what keeps
//! the result enharmonically correct: a major third above D is F#, never Gb.

use crate::note::{Accidental, Note};

/// Intervals measured up from the tonic.
///
/// These are the ten intervals the supported scale qualities use. Each knows
/// its chromatic size in semitones and its diatonic size in letter steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interval {
    Unison,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    /// Chromatic size in semitones.
    pub fn semitones(self) -> u8 {
        match self {
            Interval::Unison => 0,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
        }
    }

    /// Diatonic size in letter steps (a second moves one letter, a seventh
    /// moves six).
    pub fn letter_steps(self) -> u8 {
        match self {
            Interval::Unison => 0,
            Interval::MajorSecond => 1,
            Interval::MinorThird => 2,
            Interval::MajorThird => 2,
            Interval::PerfectFourth => 3,
            Interval::PerfectFifth => 4,
            Interval::MinorSixth => 5,
            Interval::MajorSixth => 5,
            Interval::MinorSeventh => 6,
            Interval::MajorSeventh => 6,
        }
    }
}

impl Note {
    /// The correctly spelled note at `interval` above this one.
    ///
    /// The caller is expected to have validated the starting note against the
    /// legal tonic sets; from any legal tonic every scale interval lands
    /// within a double accidental.
    pub(crate) fn interval_up(self, interval: Interval) -> Note {
        let letter = self.letter().advance(interval.letter_steps());
        let pitch_class = (self.semitone() + interval.semitones()) % 12;

        // Chromatic distance from the target letter's natural pitch, taken
        // as the nearest representative so that e.g. B natural -> C natural
        // is +1, not -11.
        let mut offset = (pitch_class as i8 - letter.natural_semitone() as i8).rem_euclid(12);
        if offset > 6 {
            offset -= 12;
        }

        let accidental = match offset {
            0 => Accidental::Natural,
            1 => Accidental::Sharp,
            -1 => Accidental::Flat,
            2 => Accidental::DoubleSharp,
            -2 => Accidental::DoubleFlat,
            _ => unreachable!("interval spelling beyond a double accidental"),
        };

        Note::new(letter, accidental)
    }
}

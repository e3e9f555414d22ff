/*!
 * Validation of generated subtitle tracks.
 *
 * - `timecodes`: checks indices and timing of consecutive entries
 */

pub mod timecodes;

pub use timecodes::{TimecodeIssue, TimecodeValidationResult, TimecodeValidator};

#![warn(rust_2018_idioms)]

//! Conversion of text typed on the legacy Terafont Gujarati keyboard
//! layout into standard Unicode Gujarati.
//!
//! Terafont is a non-Unicode Gujarati font encoding mapped onto a Latin
//! keyboard. Decoding it is context sensitive: the same key can mean a
//! consonant or a dependent vowel sign depending on the surrounding
//! characters, the pre-base vowel sign Sign I is typed after its consonant
//! but written before it, and consonant clusters joined by halant need to
//! be fused into their conjunct forms.
//!
//! ```
//! use terafont::convert;
//!
//! assert_eq!(convert("Af"), "બા");
//! ```

/// The conversion pipeline.
pub mod convert;
pub mod error;
/// The fixed Terafont key-mapping tables.
pub mod keymap;
/// Keyboard layout configuration for key-event emulation layers.
pub mod layout;

pub use crate::convert::convert;

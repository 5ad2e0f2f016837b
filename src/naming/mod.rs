//! Naming primitives: splitting raw design names into words and deriving
//! stable, lowercase hyphenated keys from them.
//!
//! Design tools, SVG exports, and folder names each follow their own casing
//! conventions (`MapView16`, `GPSIcon`, `01_MapView_Dark`). Everything in
//! this module is a pure function of its input so that the same names always
//! produce the same catalog identifiers.

pub mod normalize;
pub mod tokenize;

pub use normalize::{NameAndSize, split_name_and_size, strip_theme_suffix, to_kebab_key};
pub use tokenize::tokenize;

//! Typed records produced by the decoders.
//!
//! Ownership is a plain tree: a [`Tweet`] owns its [`Entities`], which own their
//! [`Medium`] list, which owns [`Variant`]s and [`Size`]s. Nothing is shared and
//! nothing is mutated after decoding.

mod entities;
mod media;
mod range;
mod tweet;

pub use entities::{Entities, Hashtag, Symbol, Url, UserMention};
pub use media::{AspectRatio, Medium, MediumKind, Resize, Size, Variant};
pub use range::IntRange;
pub use tweet::{Tweet, UNDETERMINED_LANG};

//! Shared data model for gamedeck: game records, badge definitions and the
//! data-source manifest.

pub mod badge;
pub mod error;
pub mod game;
pub mod manifest;
pub mod util;

pub use badge::BadgeDef;
pub use error::HandlerError;
pub use game::{Game, GameDraft};
pub use manifest::ManifestEntry;
pub use util::badge_label;

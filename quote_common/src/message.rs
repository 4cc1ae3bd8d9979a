//! Style classes attached to messages shown to the user.

use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of a user-facing message; its string form is the style class of the
/// `message` region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MessageKind {
    /// Operation completed, rendered with the `success` class.
    Success,
    /// Validation, application or network failure, rendered with the `error` class.
    Error,
}

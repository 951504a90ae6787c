//! Built-in lint rules.

pub mod empty_message;
pub mod enum_missing_default;
pub mod enum_value_gaps;
pub mod message_size;
pub mod naming_convention;

pub use empty_message::EmptyMessageRule;
pub use enum_missing_default::EnumMissingDefaultRule;
pub use enum_value_gaps::EnumValueGapsRule;
pub use message_size::MessageSizeRule;
pub use naming_convention::NamingConventionRule;

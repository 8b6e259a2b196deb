/// File extension for exported notes, without the leading dot.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Separator between the module name and the ordinal in a vector-index document id.
pub const DOC_ID_SEPARATOR: char = ':';

/// Separator between components of a textual name.
pub const NAME_SEPARATOR: char = '.';

/// Opening escape for name components that cannot be written bare.
pub const ESCAPE_OPEN: char = '«';

/// Closing escape for name components that cannot be written bare.
pub const ESCAPE_CLOSE: char = '»';

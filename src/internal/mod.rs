/// Module that provides the cursor that tracks offset, line and column of a scan session.
pub(crate) mod cursor;
pub(crate) use cursor::Cursor;

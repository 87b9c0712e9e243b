/// Identifier assigned to a posting by the remote job API.
///
/// Not globally unique: the same `jd_uid` can appear on more than one
/// page, so it must never be used as a standalone key.
pub type JdUid = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

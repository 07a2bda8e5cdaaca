pub mod ask;
pub mod chat;
pub mod ping;

/// Delay between characters when printing a reply.
pub const TYPEWRITER_DELAY_MS: u64 = 12;

/// NZBGet JSON-RPC support: request envelopes, typed results and the HTTP
/// client used by the nzbgram bot.
pub mod client;
pub mod errors;
pub mod models;
pub mod protocol;

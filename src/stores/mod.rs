// linkboard stores
// Stores hold the cached copy of each backend collection and run
// mutations through validation and the client layer.

pub mod bookmark_store;
pub mod group_store;
pub mod tab_store;

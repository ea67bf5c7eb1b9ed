//! Endpoint methods of [`OsuClient`](crate::api::OsuClient), grouped like the
//! API documentation. Each one builds a path and its query parameters, names
//! the key holding the payload if it is wrapped, and replaces a `Null` error
//! kind with the kind the endpoint implies.

mod beatmap_packs;
mod beatmaps;
mod beatmapsets;
mod comments;
mod discussions;
mod events;
mod forums;
mod matches;
mod news;
mod rankings;
mod scores;
mod seasonal;
mod users;
mod wiki;

pub use comments::CommentsOptions;
pub use users::{UserKey, UserScoresOptions};

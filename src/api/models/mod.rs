//! Records returned by the endpoints.

pub mod beatmaps;
pub mod comments;
pub mod discussions;
pub mod events;
pub mod forums;
pub mod matches;
pub mod news;
pub mod rankings;
pub mod scores;
pub mod seasonal;
pub mod users;
pub mod wiki;

pub use beatmaps::*;
pub use comments::*;
pub use discussions::*;
pub use events::*;
pub use forums::*;
pub use matches::*;
pub use news::*;
pub use rankings::*;
pub use scores::*;
pub use seasonal::*;
pub use users::*;
pub use wiki::*;

mod actor;
mod movie;

pub use actor::{Actor, ActorPayload};
pub use movie::{Movie, MoviePayload};

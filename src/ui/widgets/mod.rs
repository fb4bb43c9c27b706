pub mod current;
pub mod error;
pub mod extras;
pub mod forecast;
pub mod insight;
pub mod loading;
pub mod search;
mod shared;

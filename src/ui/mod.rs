pub mod icon;
pub mod pages;
pub mod typewriter;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use typewriter::Typewriter;

//! Page content and the framework-free state behind the landing page

#[cfg(feature = "ssr")]
pub mod config;
mod content;
#[cfg(feature = "ssr")]
pub mod error;
pub mod icons;
mod menu;
mod scroll;
mod typewriter;

pub use content::*;
pub use menu::*;
pub use scroll::*;
pub use typewriter::*;

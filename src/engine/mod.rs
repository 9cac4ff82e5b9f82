//! Pure decision engines.
//!
//! Everything in this module is deterministic and side-effect free: no clock,
//! no network, no cache. Provider data goes in, a decision comes out.

pub mod accessories;
pub mod clothing;
pub mod news;

pub use accessories::{decide_accessories, AccessoryDecision};
pub use clothing::{decide_clothing, ClothingDecision};

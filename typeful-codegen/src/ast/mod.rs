//! Builders for the small TypeScript surface the generator emits.

mod consts;
mod imports;
mod interface;

pub use consts::Const;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};

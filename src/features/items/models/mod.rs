mod changes;
mod item;

pub use changes::{ItemChanges, NewItem};
pub use item::Item;

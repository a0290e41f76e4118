pub mod config;
pub mod factory;
pub mod layout;
pub mod list;
pub mod model;
pub mod store;
pub mod style;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use factory::{
    BindOutcome, RecyclingFactory, RowParts, RowSlot, RowSurface, SlotState, WindowSurface,
};
pub use layout::{LayoutPlan, LayoutTarget};
pub use list::ItemList;
pub use model::{ItemListModel, SelectionChange, SelectionModel};
pub use store::EntryStore;
pub use style::{StyleEngine, StyleOrigin, StylePriority, StyleRegistry, StyleSheet};

pub use walker_types::*;

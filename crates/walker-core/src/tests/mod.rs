//! Test module for walker-core
//!
//! This module contains tests for:
//! - Row recycling (setup, bind, idempotent rebinds, window class mirroring)
//! - Selection model (autoselect-first, navigation)
//! - Layout mapping from config
//! - Style sheet resolution and registration
//! - Config loading
//! - Full display cycles through `ItemList`

mod layout_tests;
mod list_tests;
mod selection_tests;

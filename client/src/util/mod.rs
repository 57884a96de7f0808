//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! theme DOM, file reads) from page and component logic.

pub mod file;
pub mod location;
pub mod storage;
pub mod theme;
pub mod timer;

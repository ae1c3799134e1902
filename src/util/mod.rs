//! Host-independent page logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module decides *what* a page behavior does and reaches the page only
//! through small traits (`LayoutBox`, `ClassTarget`, `FormSurface`, ...). The
//! `dom` module implements those traits over `web_sys`; tests implement them
//! over plain structs.

pub mod forms;
pub mod geometry;
pub mod lazy;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod target;

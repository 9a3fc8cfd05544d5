//! FFI layer (PyO3 bindings)
//!
//! Minimal and safe Python interface: plain scalars in, `Vec<f64>` columns
//! out. The Python slider GUIs and plotting scripts drive the engine
//! exclusively through this surface.

pub mod simulation;

//! Host platform adapters.

mod winit;

pub use self::winit::WinitTranslator;

// Adapters layer: concrete implementations for external systems (terminal I/O).

pub mod console;

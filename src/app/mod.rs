// Application layer: the dialogue around the pricing engine.

pub mod presenter;
pub mod prompter;
pub mod quote;

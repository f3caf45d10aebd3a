pub mod document;
pub mod mepla;
pub mod sink;

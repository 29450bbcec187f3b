mod reference;

pub use reference::ReferenceSelection;

mod console;

pub use console::Shell;

// Command handlers module
pub mod completions;
pub mod journal;
pub mod run;
pub mod status;
pub mod version;

// Re-exports for cleaner imports
pub use run::execute as run;
pub use status::execute as status;
pub use version::execute as version;

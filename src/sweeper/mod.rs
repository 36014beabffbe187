pub mod batch;
pub mod engine;

pub use batch::{remove_files, SweepOptions, MAX_FILE_AGE_DAYS, SEPARATOR_LEN};
pub use engine::{
    directory_is_empty, empty_directory, execute, remove_by_extension, run, Directive,
    DirectiveReport, RunReport, SweepMode,
};

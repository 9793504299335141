pub mod config;
pub mod guesser;
pub mod layout;
pub mod linker;
pub mod organizer;
pub mod scanner;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use guesser::{FilenameGuesser, Guess, Guesser, MediaKind};
pub use layout::{resolve_target, LayoutError};
pub use linker::{FsLinker, LinkOutcome, LinkerError, PruneReport};
pub use organizer::{Organizer, OrganizerConfig, OrganizerError, RunReport};

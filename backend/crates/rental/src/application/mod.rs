//! Application Layer - Use cases and orchestration

pub mod list_consoles;
pub mod rent_console;

pub use list_consoles::ListConsolesUseCase;
pub use rent_console::{RentConsoleInput, RentConsoleUseCase};

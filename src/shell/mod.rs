// Composition root for the shopping carts bounded context.
//
// Responsibilities:
// - Read config from the environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the command dispatcher and router.

pub mod config;
pub mod http;
pub mod state;

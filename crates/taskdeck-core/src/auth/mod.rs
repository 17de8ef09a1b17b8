/*
[INPUT]:  Credentials from the presentation layer
[OUTPUT]: Login/register state machines and local validation
[POS]:    Auth layer - module wiring
[UPDATE]: When auth flows or validation surface change
*/

pub mod login;
pub mod register;
pub mod validate;

pub use login::{LoginFlow, LoginOutcome, LoginState};
pub use register::{RegisterFlow, RegisterOutcome, RegisterState, SUCCESS_REDIRECT_DELAY};

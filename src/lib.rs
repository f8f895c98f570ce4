#[allow(non_snake_case)]
pub mod GasPhase;
#[allow(non_snake_case)]
pub mod Setup;
#[allow(non_snake_case)]
pub mod Utils;

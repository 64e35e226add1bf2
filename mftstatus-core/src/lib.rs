pub mod capture;
pub mod cli;
pub mod locate;
pub mod logging;

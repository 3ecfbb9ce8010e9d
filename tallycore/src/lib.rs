//! tallycore — the calculator engine behind tallycalc
//!
//! Holds the entry state machine and everything around it that does not
//! touch a widget: operators, number rendering, errors, button model and
//! the settings file.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod number;
pub mod operator;
pub mod storage;

pub use config::Config;
pub use error::{CalcError, ConfigError, ErrorKind};
pub use evaluator::{ChainStep, Evaluator, Temp};
pub use input::Input;
pub use operator::Operator;

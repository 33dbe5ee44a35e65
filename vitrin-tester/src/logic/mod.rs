pub mod reports;
pub mod scenarios;
pub mod tester;

pub use scenarios::{CheckContext, Scenario};
pub use tester::{LogicTester, ScenarioResult};

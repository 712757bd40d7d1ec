/// Use cases module containing application business logic orchestration
mod aggregate_formula;

pub use aggregate_formula::AggregateFormulaUseCase;

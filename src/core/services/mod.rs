pub mod alert_service;
pub mod allocation_service;
pub mod expense_service;
pub mod summary_service;

pub use alert_service::AlertService;
pub use allocation_service::{AllocationAction, AllocationRecord, AllocationService};
pub use expense_service::{ExpenseReceipt, ExpenseService};
pub use summary_service::{SpendingVerdict, SummaryService};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("amount must be > 0 and at most the remaining balance ({remaining:.2})")]
    InvalidAmount { remaining: f64 },
    #[error("day {0} is outside the calendar range 1..=31")]
    InvalidDay(u32),
    #[error("{0}")]
    Validation(String),
}

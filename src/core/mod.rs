pub mod calendar;
pub mod dashboard;
pub mod elapsed;
pub mod refetch;
pub mod reports;
pub mod shift_form;
pub mod tracking;

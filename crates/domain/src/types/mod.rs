//! Domain types and models

pub mod assistant;
pub mod month;
pub mod pipeline;
pub mod stats;

pub use assistant::{ActivitySummary, DealHealth};
pub use month::MonthKey;
pub use pipeline::{Activity, ActivityType, Client, Deal, DealStage};
pub use stats::{
    ActivityTypeCount, DashboardMetrics, ForecastRow, MonthForecast, MonthlyRow, StageFinancials,
    StageTotal,
};

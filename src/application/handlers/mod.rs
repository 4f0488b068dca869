//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assistant;
pub mod catalog;
pub mod consultation;
pub mod pricing;

pub use assistant::{
    ChatReply, GetChatHistoryHandler, GetChatHistoryQuery, SendChatMessageCommand,
    SendChatMessageHandler,
};
pub use catalog::{
    CatalogListingHandler, GetProjectQuery, ListCompletedProjectsQuery, ListLatestProjectsQuery,
    ListMaterialsQuery, ListPricingRowsQuery, ListProjectReviewsQuery, ListServicesQuery,
    ProjectQueryHandler,
};
pub use consultation::{
    BookConsultationCommand, BookConsultationHandler, ListConsultationsHandler,
    ListConsultationsQuery, UpdateConsultationStatusCommand, UpdateConsultationStatusHandler,
};
pub use pricing::{
    ComputeEstimateHandler, ComputeEstimateQuery, GetRateCardHandler, GetRateCardQuery, RateCard,
};

pub mod location_service;
pub use location_service::LocationService;
pub mod movement_service;
pub use movement_service::MovementService;
pub mod product_service;
pub use product_service::ProductService;
pub mod report_service;
pub use report_service::ReportService;

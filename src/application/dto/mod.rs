/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod depend_info_request;
mod depend_info_response;
mod output_format;

pub use depend_info_request::DependInfoRequest;
pub use depend_info_response::DependInfoResponse;
pub use output_format::OutputFormat;

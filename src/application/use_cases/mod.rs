/// Use cases module containing application business logic orchestration
mod depend_info;

pub use depend_info::DependInfoUseCase;

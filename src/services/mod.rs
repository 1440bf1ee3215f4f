pub mod allocator;
pub mod link_service;

pub use allocator::LinkAllocator;
pub use link_service::LinkService;

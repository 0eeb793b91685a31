pub mod fixed;
pub mod traits;

// Re-export
pub use fixed::FixedReadingRepository;
pub use traits::ReadingRepository;

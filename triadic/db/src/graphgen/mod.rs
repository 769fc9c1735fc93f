pub mod random;
pub mod random_attachment;

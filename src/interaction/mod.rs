pub mod gesture;

pub mod tomtom;

pub mod camera;
pub mod pointer;
pub mod startup;
pub mod sync;

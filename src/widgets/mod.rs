pub mod dropdown;
pub mod pointer;

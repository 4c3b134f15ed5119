pub mod auctiondtos;
pub mod chatdtos;
pub mod propertydtos;
pub mod sessiondtos;

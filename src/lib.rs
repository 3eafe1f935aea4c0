pub mod core;
pub mod deduce;
pub mod evaluate;
pub mod gen;
pub mod random;
pub mod solve;
pub mod verify;

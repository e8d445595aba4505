//! 外部API

pub mod artic;

pub mod canvas;
pub mod config;
pub mod consts;
pub mod controller;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod io;
pub mod speech;
pub mod volume;

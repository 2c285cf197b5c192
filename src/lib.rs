pub mod apply;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod mapper;
pub mod pages;
pub mod review;
pub mod scanner;

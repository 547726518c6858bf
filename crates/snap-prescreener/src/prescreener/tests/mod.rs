mod common;
mod service;
mod visibility;

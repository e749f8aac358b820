mod config;
mod frame;
mod status;

mod cli;
mod config;
mod samples;

//! Integration tests for the liftplan compiler and CLI

mod cli_commands;
mod config_integration;
mod test_utils;

//! HTTP request handlers.

pub mod command;

#[cfg(test)]
mod test;

mod credential;
mod template;
mod usage;

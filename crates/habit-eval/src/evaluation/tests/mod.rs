mod bundle;
mod common;

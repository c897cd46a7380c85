pub mod cli;
pub mod wordlist;

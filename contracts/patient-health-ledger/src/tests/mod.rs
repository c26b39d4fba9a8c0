#![cfg(test)]

mod ledger;
mod research;
mod utils;

pub mod cache_contract;
